//! Pricing model
//!
//! Inputs and outputs of the pricing engine: a product's tiered price table,
//! an optional coupon, and the rounded quote produced from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-product price table
///
/// `base_price` is the price of a single day. `tier_prices` holds explicit
/// overrides for specific durations; any duration without an override is
/// priced linearly from the base price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    /// Price for a 1-day duration
    #[serde(default)]
    pub base_price: Decimal,

    /// Explicit price overrides keyed by duration in days
    #[serde(default)]
    pub tier_prices: BTreeMap<u32, Decimal>,
}

impl PriceTable {
    /// Create a table with only a base price
    pub fn new(base_price: Decimal) -> Self {
        Self {
            base_price,
            tier_prices: BTreeMap::new(),
        }
    }

    /// Add an explicit price for a duration
    pub fn with_tier(mut self, duration: u32, price: Decimal) -> Self {
        self.tier_prices.insert(duration, price);
        self
    }

    /// Explicit override for a duration, if any
    #[inline]
    pub fn tier_price(&self, duration: u32) -> Option<Decimal> {
        self.tier_prices.get(&duration).copied()
    }

    /// Linear price at the base rate, before rounding (saturates on overflow)
    #[inline]
    pub fn linear_price(&self, duration: u32) -> Decimal {
        self.base_price.saturating_mul(Decimal::from(duration))
    }
}

/// Coupon discount type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is a percentage of the charged price
    Percentage,
    /// `discount_value` is an absolute amount
    Fixed,
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountType::Percentage => write!(f, "percentage"),
            DiscountType::Fixed => write!(f, "fixed"),
        }
    }
}

impl DiscountType {
    /// Parse from string (case-insensitive)
    ///
    /// Accepts the short labels `percent` and `amount` used by older coupon
    /// records.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "percentage" | "percent" => Some(DiscountType::Percentage),
            "fixed" | "amount" => Some(DiscountType::Fixed),
            _ => None,
        }
    }
}

/// Coupon applied to a single quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub discount_type: DiscountType,

    /// Percentage (0-100) or fixed amount, depending on `discount_type`
    pub discount_value: Decimal,

    /// Cap on the absolute discount; the pricing policy default applies when absent
    #[serde(default)]
    pub max_discount: Option<Decimal>,
}

impl Coupon {
    /// Percentage coupon without an explicit cap
    pub fn percentage(value: Decimal) -> Self {
        Self {
            discount_type: DiscountType::Percentage,
            discount_value: value,
            max_discount: None,
        }
    }

    /// Fixed-amount coupon without an explicit cap
    pub fn fixed(value: Decimal) -> Self {
        Self {
            discount_type: DiscountType::Fixed,
            discount_value: value,
            max_discount: None,
        }
    }

    /// Set the discount cap
    pub fn with_max_discount(mut self, cap: Decimal) -> Self {
        self.max_discount = Some(cap);
        self
    }
}

/// Rounded quote for one product, duration and coupon
///
/// All amounts are whole currency units and never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Price for the selected duration before the coupon
    pub charged_price: i64,

    /// Linear base-rate price for the same duration (struck-through price)
    pub original_price: i64,

    /// Percentage saved against `original_price`, 0-100
    pub discount_rate: i64,

    /// Amount deducted by the coupon
    pub coupon_discount: i64,

    /// Amount payable
    pub final_price: i64,
}

impl PricingResult {
    /// Whether a coupon actually reduced the price
    #[inline]
    pub fn coupon_applied(&self) -> bool {
        self.coupon_discount > 0
    }
}

/// Quote for one entry of a duration selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationQuote {
    pub duration: u32,

    #[serde(flatten)]
    pub result: PricingResult,
}
