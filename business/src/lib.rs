pub mod application {
    pub mod scan {
        pub mod capture;
        pub mod get_history;
        pub mod languages;
    }
    pub mod settings {
        pub mod clear_all_data;
        pub mod get;
        pub mod save;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod clear;
        pub mod create;
        pub mod delete;
        pub mod duplicate;
        pub mod export;
        pub mod get_all;
        pub mod get_by_id;
        pub mod mutation;
        pub mod remove_item;
        pub mod search;
        pub mod set_item_quantity;
        pub mod stats;
        pub mod summary;
        pub mod update_item;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod scan {
        pub mod errors;
        pub mod extraction;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod capture;
            pub mod get_history;
            pub mod languages;
        }
    }
    pub mod settings {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod clear_all_data;
            pub mod get;
            pub mod save;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod export;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod create;
            pub mod delete;
            pub mod duplicate;
            pub mod export;
            pub mod get_all;
            pub mod get_by_id;
            pub mod remove_item;
            pub mod search;
            pub mod set_item_quantity;
            pub mod stats;
            pub mod summary;
            pub mod update_item;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
