//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity.
///
/// Only exists once persisted: the identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Maxim"))]
    pub name: String,
    /// Preferred currency code
    #[cfg_attr(feature = "openapi", schema(example = "ruble"))]
    pub currency: String,
}

impl User {
    /// Attach a store-assigned identifier to user data
    pub fn from_new(id: Uuid, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            currency: new_user.currency,
        }
    }
}

/// User data in transit to the store (no identifier yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewUser {
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Maxim"))]
    pub name: String,
    /// Preferred currency code
    #[cfg_attr(feature = "openapi", schema(example = "ruble"))]
    pub currency: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_new_keeps_fields() {
        let id = Uuid::new_v4();
        let user = User::from_new(id, NewUser::new("Maxim", "ruble"));

        assert_eq!(user.id, id);
        assert_eq!(user.name, "Maxim");
        assert_eq!(user.currency, "ruble");
    }

    #[test]
    fn new_user_ignores_client_id() {
        let json = r#"{"id":"ignored","name":"Maxim","currency":"ruble"}"#;
        let new_user: NewUser = serde_json::from_str(json).unwrap();

        assert_eq!(new_user, NewUser::new("Maxim", "ruble"));
    }
}
