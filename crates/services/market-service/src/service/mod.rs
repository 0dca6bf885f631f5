//! Service layer - market use cases.

mod catalog_service;
mod lookup_service;

pub use catalog_service::{CatalogManager, CatalogService};
pub use lookup_service::{LookupComposer, LookupService};
