//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user under a freshly assigned identifier
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// Find user by ID; an unknown ID is `Ok(None)`
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            currency: Set(user.currency),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}
