//! API layer for the SMM storefront
//!
//! HTTP handlers that expose the pricing engine to the storefront pages.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod dto;
pub mod handlers;
pub mod state;

// Re-export DTOs (common types)
pub use dto::{ApiResponse, QuoteOptionsRequest, QuoteRequest, QuoteResponse};

// Re-export route configuration
pub use handlers::{configure, configure_quotes, health_check};
pub use state::PricingState;
