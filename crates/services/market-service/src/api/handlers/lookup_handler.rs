//! Product lookup handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Product, ProductLookup};

use crate::api::state::AppState;

/// Create lookup routes
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/get/products/:user_id", get(get_products_for_user))
        .route("/lookup/:user_id", get(lookup_products))
}

/// Products in the user's currency
///
/// An unknown user yields an empty list, same as a user without matches.
#[utoipa::path(
    get,
    path = "/get/products/{user_id}",
    tag = "Lookup",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Products sharing the user's currency (possibly empty)", body = Vec<Product>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_products_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.lookup.products_for_user(&user_id).await?;
    Ok(Json(products))
}

/// Products in the user's currency, reporting unknown users
#[utoipa::path(
    get,
    path = "/lookup/{user_id}",
    tag = "Lookup",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found: {\"status\":\"found\",\"products\":[...]}"),
        (status = 404, description = "No such user: {\"status\":\"user_not_found\"}"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn lookup_products(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<(StatusCode, Json<ProductLookup>)> {
    let lookup = state.lookup.lookup(&user_id).await?;
    let status = if lookup.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(lookup)))
}
