//! Domain layer - Core market entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Users and products are linked only through their currency code, which is
//! compared at query time and never stored as a relation.

pub mod constants;
pub mod lookup;
pub mod product;
pub mod user;

pub use constants::*;
pub use lookup::ProductLookup;
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
