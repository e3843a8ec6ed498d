//! Pricing engine for the SMM storefront
//!
//! This crate holds the one piece of business arithmetic the storefront
//! shares between its catalog, product detail and order pages: turning a
//! product's duration price table and an optional coupon into a rounded quote.
//!
//! # Rules
//!
//! - An explicit tier price wins for its duration; other durations are priced
//!   linearly from the 1-day base price
//! - The reference price is always the linear one; the discount rate compares
//!   the two and is zero for the 1-day duration
//! - Coupon discounts are capped, rounded down and never exceed the charged
//!   price
//!
//! All functions are pure and never fail. `PricingEngine` is `Copy` and can
//! be shared across workers without synchronization.

pub mod engine;
pub mod money;

pub use engine::{
    compute_charged_price, compute_coupon_discount, compute_discount_rate, compute_final_price,
    compute_original_price, quote, PricingEngine, PricingPolicy,
};

/// Pricing constants
pub mod constants {
    pub use smm_core::config::{DEFAULT_MAX_DISCOUNT, DEFAULT_OFFERED_DURATIONS};

    /// Duration whose price is the reference rate and never discounted
    pub const BASE_DURATION: u32 = 1;

    /// Upper bound of a discount rate, in percent
    pub const MAX_DISCOUNT_RATE: i64 = 100;
}
