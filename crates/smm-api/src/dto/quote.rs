//! Quote DTOs
//!
//! Request and response types for the quote endpoints.

use serde::{Deserialize, Serialize};
use smm_core::models::{Coupon, CouponRecord, DurationQuote, PricingResult, ProductRecord};
use tracing::warn;
use validator::Validate;

use super::common::{deserialize_duration, deserialize_durations};

/// Single quote request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Product record as fetched from the catalog API
    pub product: ProductRecord,

    /// Selected duration in days
    #[serde(deserialize_with = "deserialize_duration")]
    #[validate(range(min = 1, message = "Duration must be at least one day"))]
    pub duration: u32,

    /// Coupon selected from the user's coupon list
    #[serde(default)]
    pub coupon: Option<CouponRecord>,
}

impl QuoteRequest {
    /// Coupon usable by the engine, if one was sent and is understood
    pub fn coupon(&self) -> Option<Coupon> {
        resolve_coupon(self.coupon.as_ref())
    }
}

/// Duration selector request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOptionsRequest {
    /// Product record as fetched from the catalog API
    pub product: ProductRecord,

    /// Durations to quote; the configured offer list is used when absent
    #[serde(default, deserialize_with = "deserialize_durations")]
    #[validate(length(min = 1, max = 32, message = "Between 1 and 32 durations can be quoted"))]
    pub durations: Option<Vec<u32>>,

    /// Coupon selected from the user's coupon list
    #[serde(default)]
    pub coupon: Option<CouponRecord>,
}

impl QuoteOptionsRequest {
    /// Coupon usable by the engine, if one was sent and is understood
    pub fn coupon(&self) -> Option<Coupon> {
        resolve_coupon(self.coupon.as_ref())
    }
}

fn resolve_coupon(record: Option<&CouponRecord>) -> Option<Coupon> {
    let record = record?;
    let coupon = record.to_coupon();
    if coupon.is_none() {
        warn!(
            discount_type = ?record.discount_type,
            "Ignoring coupon with unknown discount type"
        );
    }
    coupon
}

/// Quote response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Quoted duration in days
    pub duration: u32,

    /// Rounded price breakdown
    #[serde(flatten)]
    pub result: PricingResult,

    /// Whether the coupon reduced the price
    pub coupon_applied: bool,
}

impl QuoteResponse {
    /// Build a response for one duration
    pub fn new(duration: u32, result: PricingResult) -> Self {
        Self {
            duration,
            result,
            coupon_applied: result.coupon_applied(),
        }
    }
}

impl From<DurationQuote> for QuoteResponse {
    fn from(quote: DurationQuote) -> Self {
        Self::new(quote.duration, quote.result)
    }
}
