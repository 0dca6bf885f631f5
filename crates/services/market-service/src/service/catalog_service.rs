//! Catalog service - Handles saving users and products.
//!
//! SOLID (SRP): Write path only; never part of a lookup.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::AppResult;
use domain::{NewProduct, NewUser, Product, User};

use crate::repository::{ProductRepository, UserRepository};

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Save a user; the store assigns its identifier
    async fn save_user(&self, user: NewUser) -> AppResult<User>;

    /// Save a product; the store assigns its identifier
    async fn save_product(&self, product: NewProduct) -> AppResult<Product>;
}

/// Concrete implementation of CatalogService using repositories.
pub struct CatalogManager {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CatalogManager {
    pub fn new(users: Arc<dyn UserRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { users, products }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn save_user(&self, user: NewUser) -> AppResult<User> {
        let user = self.users.save(user).await?;
        info!(user_id = %user.id, currency = %user.currency, "User saved");
        Ok(user)
    }

    async fn save_product(&self, product: NewProduct) -> AppResult<Product> {
        let product = self.products.save(product).await?;
        info!(product_id = %product.id, currency = %product.currency, "Product saved");
        Ok(product)
    }
}
