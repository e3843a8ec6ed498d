//! Domain models for the storefront pricing workspace
//!
//! Engine inputs and outputs plus the upstream record shapes they are built from.

pub mod coupon;
pub mod pricing;
pub mod product;

pub use coupon::CouponRecord;
pub use pricing::{Coupon, DiscountType, DurationQuote, PriceTable, PricingResult};
pub use product::ProductRecord;
