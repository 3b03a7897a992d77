use std::sync::Arc;

use chrono::Local;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::expiry::filter::{Lifecycle, ProductFilter};
use business::domain::expiry::use_cases::get_summary::{
    GetExpirySummaryParams, GetExpirySummaryUseCase,
};
use business::domain::expiry::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::StorageUnit;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::expiry::dto::{ExpirySummaryResponse, ProductListResponse};
use crate::api::expiry::routes::failure_policy;
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    summary_use_case: Arc<dyn GetExpirySummaryUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        summary_use_case: Arc<dyn GetExpirySummaryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            list_use_case,
            summary_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

/// Builds list criteria from raw query values. Units accept the code or the display label.
fn parse_filter(
    lifecycle: Option<String>,
    unit: Option<String>,
    search: Option<String>,
) -> Result<ProductFilter, Json<ErrorResponse>> {
    let lifecycle = match lifecycle {
        Some(raw) => raw
            .parse::<Lifecycle>()
            .map_err(|_| ErrorResponse::validation("expiry.invalid_lifecycle"))?,
        None => Lifecycle::default(),
    };
    let unit = unit
        .map(|raw| raw.parse::<StorageUnit>())
        .transpose()
        .map_err(|_| ErrorResponse::validation("product.invalid_unit"))?;

    Ok(ProductFilter {
        lifecycle,
        unit,
        search,
    })
}

/// Product inventory API
///
/// Endpoints for managing stocked products and viewing them by expiry status.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            image_url: body.0.image_url,
            expiry_date: body.0.expiry_date,
            unit: body.0.unit.map(Into::into).unwrap_or_default(),
            category: body.0.category,
            barcode: body.0.barcode,
            location: body.0.location,
            current_quantity: body.0.current_quantity,
            minimum_quantity: body.0.minimum_quantity.unwrap_or(0),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products by expiry status
    ///
    /// `lifecycle` is `all` (default, everything not yet expired), `expired` or
    /// `expiring`. `unit` narrows to one storage unit. `search` matches name,
    /// category, barcode or location, case-insensitively. Results are soonest
    /// expiry first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        lifecycle: Query<Option<String>>,
        unit: Query<Option<String>>,
        search: Query<Option<String>>,
        strict: Query<Option<bool>>,
    ) -> ListProductsResponse {
        let filter = match parse_filter(lifecycle.0, unit.0, search.0) {
            Ok(filter) => filter,
            Err(json) => return ListProductsResponse::BadRequest(json),
        };

        let params = ListProductsParams {
            filter,
            today: Local::now().date_naive(),
            policy: failure_policy(strict.0),
        };

        match self.list_use_case.execute(params).await {
            Ok(selection) => ListProductsResponse::Ok(Json(selection.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => ListProductsResponse::UnprocessableEntity(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Count expired and expiring products
    #[oai(path = "/products/summary", method = "get", tag = "ApiTags::Products")]
    async fn get_summary(&self, strict: Query<Option<bool>>) -> GetSummaryResponse {
        let params = GetExpirySummaryParams {
            today: Local::now().date_naive(),
            policy: failure_policy(strict.0),
        };

        match self.summary_use_case.execute(params).await {
            Ok(summary) => GetSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetSummaryResponse::UnprocessableEntity(json),
                    _ => GetSummaryResponse::InternalError(json),
                }
            }
        }
    }

    /// Full inventory
    ///
    /// Every stored product, expired and unreadable ones included, sorted by
    /// expiry date with unreadable dates last.
    #[oai(path = "/inventory", method = "get", tag = "ApiTags::Products")]
    async fn get_inventory(&self) -> GetInventoryResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetInventoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetInventoryResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description,
            image_url: body.0.image_url,
            expiry_date: body.0.expiry_date,
            unit: body.0.unit.into(),
            category: body.0.category,
            barcode: body.0.barcode,
            location: body.0.location,
            current_quantity: body.0.current_quantity,
            minimum_quantity: body.0.minimum_quantity.unwrap_or(0),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Scheduled reminders are left alone; withdraw them through
    /// `DELETE /products/:id/reminders`.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let uuid = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<ExpirySummaryResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetInventoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
