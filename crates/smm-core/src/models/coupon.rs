//! Coupon record
//!
//! A coupon as listed in the user's coupon wallet. Only the fields that
//! affect pricing are interpreted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Coupon, DiscountType};
use crate::coerce::lenient;

/// Coupon entry from the user's coupon list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRecord {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub name: Option<String>,

    /// `percentage` or `fixed` (case-insensitive)
    #[serde(default)]
    pub discount_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::decimal")]
    pub discount_value: Decimal,

    #[serde(default, deserialize_with = "lenient::option_decimal")]
    pub max_discount: Option<Decimal>,
}

impl CouponRecord {
    /// Convert into the engine's coupon
    ///
    /// Returns `None` for an unknown discount type, in which case the quote
    /// is computed without a coupon.
    pub fn to_coupon(&self) -> Option<Coupon> {
        let discount_type = DiscountType::from_str(self.discount_type.as_deref()?)?;

        Some(Coupon {
            discount_type,
            discount_value: self.discount_value,
            max_discount: self.max_discount,
        })
    }
}
