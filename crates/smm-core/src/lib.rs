//! SMM Storefront Core Library
//!
//! This crate provides the foundational types and error handling for the
//! storefront pricing workspace. It includes:
//!
//! - Pricing models (PriceTable, Coupon, PricingResult)
//! - Upstream record shapes and their mapping into pricing inputs
//! - Lenient numeric coercion for price fields
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod coerce;
pub mod config;
pub mod error;
pub mod models;

pub use coerce::coerce_to_number;
pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
