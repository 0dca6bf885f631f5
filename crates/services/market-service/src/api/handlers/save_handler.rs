//! Save handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{NewProduct, NewUser, Product, User};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// User save request. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveUserRequest {
    /// Display name
    #[validate(length(max = 255, message = "Name is too long"))]
    #[schema(example = "Maxim")]
    pub name: String,
    /// Preferred currency code
    #[validate(length(max = 255, message = "Currency is too long"))]
    #[schema(example = "ruble")]
    pub currency: String,
}

impl From<SaveUserRequest> for NewUser {
    fn from(req: SaveUserRequest) -> Self {
        NewUser::new(req.name, req.currency)
    }
}

/// Product save request with validation. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveProductRequest {
    /// Display name
    #[validate(length(max = 255, message = "Name is too long"))]
    #[schema(example = "milk")]
    pub name: String,
    /// Price in whole units of `currency`
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 70)]
    pub price: i64,
    /// Currency code
    #[validate(length(max = 255, message = "Currency is too long"))]
    #[schema(example = "ruble")]
    pub currency: String,
}

impl From<SaveProductRequest> for NewProduct {
    fn from(req: SaveProductRequest) -> Self {
        NewProduct::new(req.name, req.price, req.currency)
    }
}

/// Create save routes
pub fn save_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(save_user))
        .route("/product", post(save_product))
}

/// Save a new user
#[utoipa::path(
    post,
    path = "/save/user",
    tag = "Catalog",
    request_body = SaveUserRequest,
    responses(
        (status = 200, description = "User saved with a store-assigned id", body = User),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn save_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveUserRequest>,
) -> AppResult<Json<User>> {
    let user = state.catalog.save_user(payload.into()).await?;
    Ok(Json(user))
}

/// Save a new product
#[utoipa::path(
    post,
    path = "/save/product",
    tag = "Catalog",
    request_body = SaveProductRequest,
    responses(
        (status = 200, description = "Product saved with a store-assigned id", body = Product),
        (status = 400, description = "Malformed body or negative price")
    )
)]
pub async fn save_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveProductRequest>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.save_product(payload.into()).await?;
    Ok(Json(product))
}
