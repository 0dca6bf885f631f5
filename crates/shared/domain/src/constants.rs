//! Domain-level constants.

// =============================================================================
// Store
// =============================================================================

/// Default number of products fetched per page when streaming by currency
pub const DEFAULT_PRODUCT_PAGE_SIZE: u64 = 100;
