use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::{Json, PlainText},
};

use business::domain::shopping_list::model::{PriceItemPatch, ShoppingList};
use business::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::shopping_list::use_cases::clear::ClearShoppingListUseCase;
use business::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::delete::DeleteShoppingListUseCase;
use business::domain::shopping_list::use_cases::duplicate::{
    DuplicateShoppingListParams, DuplicateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::export::ExportShoppingListUseCase;
use business::domain::shopping_list::use_cases::get_all::GetAllShoppingListsUseCase;
use business::domain::shopping_list::use_cases::get_by_id::GetShoppingListByIdUseCase;
use business::domain::shopping_list::use_cases::remove_item::{
    RemoveItemParams, RemoveItemUseCase,
};
use business::domain::shopping_list::use_cases::search::SearchShoppingListsUseCase;
use business::domain::shopping_list::use_cases::set_item_quantity::{
    SetItemQuantityParams, SetItemQuantityUseCase,
};
use business::domain::shopping_list::use_cases::stats::GetListStatsUseCase;
use business::domain::shopping_list::use_cases::summary::GetListsSummaryUseCase;
use business::domain::shopping_list::use_cases::update_item::{
    UpdateItemParams, UpdateItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_list::dto::{
    AddItemRequest, CreateShoppingListRequest, DuplicateShoppingListRequest, ListStatsResponse,
    ListsSummaryResponse, SearchMatchResponse, SetItemQuantityRequest, ShoppingListResponse,
    UpdateItemRequest,
};
use crate::api::tags::ApiTags;
use crate::api::validation::{
    ValidationError, parse_id, parse_price, parse_quantity, parse_signed_quantity,
};

pub struct ShoppingListUseCases {
    pub create: Arc<dyn CreateShoppingListUseCase>,
    pub get_all: Arc<dyn GetAllShoppingListsUseCase>,
    pub get_by_id: Arc<dyn GetShoppingListByIdUseCase>,
    pub delete: Arc<dyn DeleteShoppingListUseCase>,
    pub add_item: Arc<dyn AddItemUseCase>,
    pub update_item: Arc<dyn UpdateItemUseCase>,
    pub set_item_quantity: Arc<dyn SetItemQuantityUseCase>,
    pub remove_item: Arc<dyn RemoveItemUseCase>,
    pub clear: Arc<dyn ClearShoppingListUseCase>,
    pub duplicate: Arc<dyn DuplicateShoppingListUseCase>,
    pub search: Arc<dyn SearchShoppingListsUseCase>,
    pub export: Arc<dyn ExportShoppingListUseCase>,
    pub stats: Arc<dyn GetListStatsUseCase>,
    pub summary: Arc<dyn GetListsSummaryUseCase>,
}

pub struct ShoppingListApi {
    use_cases: ShoppingListUseCases,
}

impl ShoppingListApi {
    pub fn new(use_cases: ShoppingListUseCases) -> Self {
        Self { use_cases }
    }
}

/// Shopping list management API
///
/// Lists of priced items, their totals and statistics.
#[OpenApi]
impl ShoppingListApi {
    /// List all shopping lists
    #[oai(path = "/shopping-lists", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_all(&self) -> GetAllShoppingListsResponse {
        match self.use_cases.get_all.execute().await {
            Ok(lists) => GetAllShoppingListsResponse::Ok(Json(
                lists.into_iter().map(|l| l.into()).collect(),
            )),
            Err(err) => GetAllShoppingListsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Create a shopping list
    #[oai(path = "/shopping-lists", method = "post", tag = "ApiTags::ShoppingLists")]
    async fn create(&self, body: Json<CreateShoppingListRequest>) -> CreateShoppingListResponse {
        let params = CreateShoppingListParams { name: body.0.name };

        match self.use_cases.create.execute(params).await {
            Ok(list) => CreateShoppingListResponse::Created(Json(list.into())),
            Err(err) => CreateShoppingListResponse::from_error(err),
        }
    }

    /// Summary across every list
    ///
    /// Number of lists, number of item lines and the sum of all list totals.
    #[oai(
        path = "/shopping-lists/summary",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn summary(&self) -> ListsSummaryResult {
        match self.use_cases.summary.execute().await {
            Ok(summary) => ListsSummaryResult::Ok(Json(summary.into())),
            Err(err) => ListsSummaryResult::InternalError(err.into_error_response().1),
        }
    }

    /// Search items across lists
    ///
    /// Case-insensitive match on item names and recognized text. Lists
    /// without a matching item are left out.
    #[oai(
        path = "/shopping-lists/search",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn search(&self, query: Query<String>) -> SearchShoppingListsResponse {
        match self.use_cases.search.execute(&query.0).await {
            Ok(matches) => SearchShoppingListsResponse::Ok(Json(
                matches.into_iter().map(|m| m.into()).collect(),
            )),
            Err(err) => SearchShoppingListsResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Get a shopping list
    #[oai(
        path = "/shopping-lists/:id",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_by_id(&self, id: Path<String>) -> ShoppingListResult {
        let list_id = match parse_id(&id.0) {
            Ok(list_id) => list_id,
            Err(err) => return ShoppingListResult::from_error(err),
        };

        ShoppingListResult::from_result(self.use_cases.get_by_id.execute(list_id).await)
    }

    /// Delete a shopping list
    #[oai(
        path = "/shopping-lists/:id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete(&self, id: Path<String>) -> DeleteShoppingListResponse {
        let list_id = match parse_id(&id.0) {
            Ok(list_id) => list_id,
            Err(err) => return DeleteShoppingListResponse::from_error(err),
        };

        match self.use_cases.delete.execute(list_id).await {
            Ok(()) => DeleteShoppingListResponse::NoContent,
            Err(err) => DeleteShoppingListResponse::from_error(err),
        }
    }

    /// Duplicate a shopping list
    ///
    /// Copies every item under fresh identifiers.
    #[oai(
        path = "/shopping-lists/:id/duplicate",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn duplicate(
        &self,
        id: Path<String>,
        body: Json<DuplicateShoppingListRequest>,
    ) -> DuplicateShoppingListResponse {
        let list_id = match parse_id(&id.0) {
            Ok(list_id) => list_id,
            Err(err) => return DuplicateShoppingListResponse::from_error(err),
        };
        let params = DuplicateShoppingListParams {
            list_id,
            name: body.0.name,
        };

        match self.use_cases.duplicate.execute(params).await {
            Ok(list) => DuplicateShoppingListResponse::Created(Json(list.into())),
            Err(err) => DuplicateShoppingListResponse::from_error(err),
        }
    }

    /// Statistics of a shopping list
    #[oai(
        path = "/shopping-lists/:id/stats",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn stats(&self, id: Path<String>) -> ListStatsResult {
        let list_id = match parse_id(&id.0) {
            Ok(list_id) => list_id,
            Err(err) => return ListStatsResult::from_error(err),
        };

        match self.use_cases.stats.execute(list_id).await {
            Ok(stats) => ListStatsResult::Ok(Json(stats.into())),
            Err(err) => ListStatsResult::from_error(err),
        }
    }

    /// Export a shopping list as CSV text
    #[oai(
        path = "/shopping-lists/:id/export",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn export(&self, id: Path<String>) -> ExportShoppingListResponse {
        let list_id = match parse_id(&id.0) {
            Ok(list_id) => list_id,
            Err(err) => return ExportShoppingListResponse::from_error(err),
        };

        match self.use_cases.export.execute(list_id).await {
            Ok(text) => ExportShoppingListResponse::Ok(PlainText(text)),
            Err(err) => ExportShoppingListResponse::from_error(err),
        }
    }

    /// Add an item to a shopping list
    #[oai(
        path = "/shopping-lists/:id/items",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn add_item(&self, id: Path<String>, body: Json<AddItemRequest>) -> ShoppingListResult {
        let params = match add_item_params(&id.0, body.0) {
            Ok(params) => params,
            Err(err) => return ShoppingListResult::from_error(err),
        };

        ShoppingListResult::from_result(self.use_cases.add_item.execute(params).await)
    }

    /// Remove every item from a shopping list
    #[oai(
        path = "/shopping-lists/:id/items",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn clear(&self, id: Path<String>) -> ShoppingListResult {
        let list_id = match parse_id(&id.0) {
            Ok(list_id) => list_id,
            Err(err) => return ShoppingListResult::from_error(err),
        };

        ShoppingListResult::from_result(self.use_cases.clear.execute(list_id).await)
    }

    /// Update an item
    ///
    /// Only the provided fields change; totals are recomputed.
    #[oai(
        path = "/shopping-lists/:id/items/:item_id",
        method = "put",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn update_item(
        &self,
        id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> ShoppingListResult {
        let params = match update_item_params(&id.0, &item_id.0, body.0) {
            Ok(params) => params,
            Err(err) => return ShoppingListResult::from_error(err),
        };

        ShoppingListResult::from_result(self.use_cases.update_item.execute(params).await)
    }

    /// Remove an item
    ///
    /// Removing an item that is not in the list leaves the list unchanged.
    #[oai(
        path = "/shopping-lists/:id/items/:item_id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn remove_item(&self, id: Path<String>, item_id: Path<String>) -> ShoppingListResult {
        let params = match (parse_id(&id.0), parse_id(&item_id.0)) {
            (Ok(list_id), Ok(item_id)) => RemoveItemParams { list_id, item_id },
            (Err(err), _) | (_, Err(err)) => return ShoppingListResult::from_error(err),
        };

        ShoppingListResult::from_result(self.use_cases.remove_item.execute(params).await)
    }

    /// Set the quantity of an item
    ///
    /// A quantity of zero or less removes the item.
    #[oai(
        path = "/shopping-lists/:id/items/:item_id/quantity",
        method = "put",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn set_item_quantity(
        &self,
        id: Path<String>,
        item_id: Path<String>,
        body: Json<SetItemQuantityRequest>,
    ) -> ShoppingListResult {
        let params = match (
            parse_id(&id.0),
            parse_id(&item_id.0),
            parse_signed_quantity(&body.0.quantity),
        ) {
            (Ok(list_id), Ok(item_id), Ok(quantity)) => SetItemQuantityParams {
                list_id,
                item_id,
                quantity,
            },
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                return ShoppingListResult::from_error(err);
            }
        };

        ShoppingListResult::from_result(self.use_cases.set_item_quantity.execute(params).await)
    }
}

fn add_item_params(list_id: &str, body: AddItemRequest) -> Result<AddItemParams, ValidationError> {
    Ok(AddItemParams {
        list_id: parse_id(list_id)?,
        price: parse_price(&body.price)?,
        quantity: parse_quantity(body.quantity.as_deref())?,
        name: body.name,
        image_path: body.image_path,
        raw_text: body.raw_text,
    })
}

fn update_item_params(
    list_id: &str,
    item_id: &str,
    body: UpdateItemRequest,
) -> Result<UpdateItemParams, ValidationError> {
    let quantity = match body.quantity.as_deref() {
        Some(raw) => Some(parse_quantity(Some(raw))?),
        None => None,
    };

    Ok(UpdateItemParams {
        list_id: parse_id(list_id)?,
        item_id: parse_id(item_id)?,
        patch: PriceItemPatch {
            name: body.name,
            price: body.price.as_deref().map(parse_price).transpose()?,
            quantity,
        },
    })
}

#[derive(ApiResponse)]
pub enum GetAllShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CreateShoppingListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum ListsSummaryResult {
    #[oai(status = 200)]
    Ok(Json<ListsSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum SearchShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SearchMatchResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of every operation that returns the changed list.
#[derive(ApiResponse)]
pub enum ShoppingListResult {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ShoppingListResult {
    fn from_result<E: IntoErrorResponse>(
        result: Result<ShoppingList, E>,
    ) -> Self {
        match result {
            Ok(list) => Self::Ok(Json(list.into())),
            Err(err) => Self::from_error(err),
        }
    }

    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteShoppingListResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DeleteShoppingListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DuplicateShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DuplicateShoppingListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum ListStatsResult {
    #[oai(status = 200)]
    Ok(Json<ListStatsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ListStatsResult {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum ExportShoppingListResponse {
    /// Header row plus one quoted, comma-separated row per item
    #[oai(status = 200)]
    Ok(PlainText<String>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ExportShoppingListResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
