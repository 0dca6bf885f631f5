//! SeaORM entities.

pub mod product;
pub mod user;
