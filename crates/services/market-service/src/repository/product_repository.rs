//! Product repository implementation.
//!
//! Currency lookups are streamed: rows are fetched one page at a time as the
//! consumer polls. Pages are keyed on the last ID seen rather than an offset,
//! so rows inserted mid-stream never shift a later page onto earlier rows.

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use common::{AppError, AppResult};
use domain::{NewProduct, Product, DEFAULT_PRODUCT_PAGE_SIZE};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lazy, finite sequence of products.
pub type ProductStream = BoxStream<'static, AppResult<Product>>;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product under a freshly assigned identifier
    async fn save(&self, product: NewProduct) -> AppResult<Product>;

    /// Stream every product whose currency equals `currency` exactly.
    ///
    /// Nothing is read until the stream is polled. An unknown or empty
    /// currency yields an empty stream.
    fn find_by_currency(&self, currency: &str) -> ProductStream;
}

/// Concrete implementation of ProductRepository backed by SeaORM
pub struct ProductStore {
    db: DatabaseConnection,
    page_size: u64,
}

impl ProductStore {
    /// Create new repository instance with the default page size
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_page_size(db, DEFAULT_PRODUCT_PAGE_SIZE)
    }

    /// Create new repository instance fetching `page_size` rows per query
    pub fn with_page_size(db: DatabaseConnection, page_size: u64) -> Self {
        Self {
            db,
            page_size: page_size.max(1),
        }
    }
}

/// Position of a currency stream between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageCursor {
    Start,
    After(Uuid),
    Done,
}

/// Fetch the page following `cursor`, ordered by ID.
async fn next_page(
    db: DatabaseConnection,
    currency: String,
    page_size: u64,
    cursor: PageCursor,
) -> AppResult<Option<(Vec<product::Model>, PageCursor)>> {
    let mut query = ProductEntity::find().filter(product::Column::Currency.eq(currency));
    match cursor {
        PageCursor::Start => {}
        PageCursor::After(last_id) => query = query.filter(product::Column::Id.gt(last_id)),
        PageCursor::Done => return Ok(None),
    }

    let models = query
        .order_by_asc(product::Column::Id)
        .limit(page_size)
        .all(&db)
        .await
        .map_err(AppError::from)?;

    let Some(last) = models.last() else {
        return Ok(None);
    };

    // A short page is the last one
    let next = if models.len() as u64 == page_size {
        PageCursor::After(last.id)
    } else {
        PageCursor::Done
    };
    Ok(Some((models, next)))
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn save(&self, product: NewProduct) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(product.name),
            price: Set(product.price),
            currency: Set(product.currency),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    fn find_by_currency(&self, currency: &str) -> ProductStream {
        let db = self.db.clone();
        let currency = currency.to_string();
        let page_size = self.page_size;

        stream::try_unfold(PageCursor::Start, move |cursor| {
            next_page(db.clone(), currency.clone(), page_size, cursor)
        })
        .map_ok(|models| stream::iter(models.into_iter().map(|m| Ok(Product::from(m)))))
        .try_flatten()
        .boxed()
    }
}
