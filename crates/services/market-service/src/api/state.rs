//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{
    InMemoryStore, ProductRepository, ProductStore, StoreHealth, UserRepository, UserStore,
};
use crate::service::{CatalogManager, CatalogService, LookupComposer, LookupService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub lookup: Arc<dyn LookupService>,
    pub health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Create new app state from already built services.
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        lookup: Arc<dyn LookupService>,
        health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            catalog,
            lookup,
            health,
        }
    }

    /// Wire services over repositories.
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        health: Arc<dyn StoreHealth>,
    ) -> Self {
        let catalog = Arc::new(CatalogManager::new(users.clone(), products.clone()));
        let lookup = Arc::new(LookupComposer::new(users, products));
        Self::new(catalog, lookup, health)
    }

    /// Wire services over the SeaORM stores.
    pub fn from_database(database: Database, product_page_size: u64) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let products = Arc::new(ProductStore::with_page_size(
            database.get_connection(),
            product_page_size,
        ));
        Self::from_repositories(users, products, Arc::new(database))
    }

    /// Wire services over a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::from_repositories(store.clone(), store.clone(), store)
    }
}
