//! Repository layer for data access.
//!
//! The record store is split per entity: [`UserRepository`] and
//! [`ProductRepository`]. Identifiers are always assigned by the store.

pub mod entities;
mod memory;
mod product_repository;
mod user_repository;

use async_trait::async_trait;

use common::AppResult;

pub use memory::InMemoryStore;
pub use product_repository::{ProductRepository, ProductStore, ProductStream};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Liveness check for whatever backs the repositories.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}
