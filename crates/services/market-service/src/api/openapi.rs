//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::save_handler::{SaveProductRequest, SaveUserRequest};
use domain::{Product, User};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::save_handler::save_user,
        crate::api::handlers::save_handler::save_product,
        crate::api::handlers::lookup_handler::get_products_for_user,
        crate::api::handlers::lookup_handler::lookup_products,
    ),
    components(
        schemas(
            SaveUserRequest,
            SaveProductRequest,
            User,
            Product,
        )
    ),
    tags(
        (name = "Catalog", description = "Saving users and products"),
        (name = "Lookup", description = "Products matching a user's currency"),
    )
)]
pub struct ApiDoc;
