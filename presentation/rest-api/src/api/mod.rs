pub mod error;
pub mod tags;
pub mod validation;
pub mod health {
    pub mod routes;
}
pub mod scan {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod settings {
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_list {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
