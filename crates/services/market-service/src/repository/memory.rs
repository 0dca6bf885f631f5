//! Arena-style in-memory record store.
//!
//! Implements both repositories over one shared arena. Products keep their
//! insertion order. Used for local runs and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;
use uuid::Uuid;

use common::AppResult;
use domain::{NewProduct, NewUser, Product, User};

use super::{ProductRepository, ProductStream, StoreHealth, UserRepository};

#[derive(Debug, Default)]
struct Arena {
    users: HashMap<Uuid, User>,
    products: HashMap<Uuid, Product>,
    /// Product keys in insertion order
    product_order: Vec<Uuid>,
}

impl Arena {
    /// Fresh key not used by any stored user or product.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.users.contains_key(&id) && !self.products.contains_key(&id) {
                return id;
            }
        }
    }
}

/// In-memory store; clones share the same arena.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    arena: Arc<RwLock<Arena>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn counts(&self) -> (usize, usize) {
        let arena = self.arena.read().await;
        (arena.users.len(), arena.product_order.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn save(&self, user: NewUser) -> AppResult<User> {
        let mut arena = self.arena.write().await;
        let id = arena.fresh_id();

        let user = User::from_new(id, user);
        arena.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.arena.read().await.users.get(&id).cloned())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn save(&self, product: NewProduct) -> AppResult<Product> {
        let mut arena = self.arena.write().await;
        let id = arena.fresh_id();

        let product = Product::from_new(id, product);
        arena.products.insert(id, product.clone());
        arena.product_order.push(id);
        Ok(product)
    }

    fn find_by_currency(&self, currency: &str) -> ProductStream {
        let arena = Arc::clone(&self.arena);
        let currency = currency.to_string();

        // The snapshot is taken on first poll, not when the stream is built
        stream::once(async move {
            let arena = arena.read().await;
            let matching: Vec<AppResult<Product>> = arena
                .product_order
                .iter()
                .filter_map(|id| arena.products.get(id))
                .filter(|p| p.currency == currency)
                .cloned()
                .map(Ok)
                .collect();
            matching
        })
        .flat_map(stream::iter)
        .boxed()
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
