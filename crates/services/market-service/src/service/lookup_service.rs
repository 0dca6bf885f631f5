//! Lookup service - Resolves a user, then the products in its currency.
//!
//! The two stages run strictly in order: the currency filter is only known
//! once the user has been resolved. Either stage failing fails the whole
//! lookup; products are never returned partially.

use async_trait::async_trait;
use futures::TryStreamExt;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Product, ProductLookup};

use crate::repository::{ProductRepository, UserRepository};

/// Lookup service trait for dependency injection.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Resolve the user and its currency-matched products, keeping
    /// "unknown user" distinguishable.
    async fn lookup(&self, user_id: &str) -> AppResult<ProductLookup>;

    /// Products whose currency equals the user's; empty for an unknown user.
    async fn products_for_user(&self, user_id: &str) -> AppResult<Vec<Product>> {
        Ok(self.lookup(user_id).await?.into_products())
    }
}

/// Composes the user and product repositories into the lookup pipeline.
pub struct LookupComposer {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
}

impl LookupComposer {
    pub fn new(users: Arc<dyn UserRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { users, products }
    }
}

fn log_stage_failure(stage: &str, err: &AppError) {
    if err.is_store_failure() {
        warn!(stage, "Store failed during product lookup");
    }
}

#[async_trait]
impl LookupService for LookupComposer {
    async fn lookup(&self, user_id: &str) -> AppResult<ProductLookup> {
        // A malformed identifier cannot name a stored user
        let Ok(id) = Uuid::parse_str(user_id) else {
            debug!(user_id, "Malformed user id, treating as unknown user");
            return Ok(ProductLookup::UserNotFound);
        };

        let user = self
            .users
            .find_by_id(id)
            .await
            .inspect_err(|e| log_stage_failure("resolve_user", e))?;

        let Some(user) = user else {
            debug!(%id, "User not found");
            return Ok(ProductLookup::UserNotFound);
        };

        let products: Vec<Product> = self
            .products
            .find_by_currency(&user.currency)
            .try_collect()
            .await
            .inspect_err(|e| log_stage_failure("find_products", e))?;

        debug!(%id, currency = %user.currency, count = products.len(), "Products resolved");
        Ok(ProductLookup::Found { products })
    }
}
