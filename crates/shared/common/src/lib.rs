//! Common utilities shared across the market services.
//!
//! This crate provides:
//! - Unified error handling for HTTP responses
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
