//! HTTP request handlers.

pub mod health_handler;
pub mod lookup_handler;
pub mod save_handler;

pub use health_handler::health_routes;
pub use lookup_handler::lookup_routes;
pub use save_handler::save_routes;
