//! Pricing engine
//!
//! Computes the quote shown on catalog cards, the product detail page and the
//! order summary. Every computation is pure and total: malformed input
//! degrades to zero instead of failing.

use rust_decimal::Decimal;
use smm_core::config::{PricingConfig, DEFAULT_MAX_DISCOUNT};
use smm_core::models::{Coupon, DiscountType, DurationQuote, PriceTable, PricingResult};
use tracing::trace;

use crate::constants::{BASE_DURATION, MAX_DISCOUNT_RATE};
use crate::money::{floor_to_unit, round_to_unit};

/// Tunable parts of the pricing rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Cap used for coupons that carry no `max_discount`
    pub default_max_discount: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            default_max_discount: Decimal::from(DEFAULT_MAX_DISCOUNT),
        }
    }
}

impl From<&PricingConfig> for PricingPolicy {
    fn from(config: &PricingConfig) -> Self {
        Self {
            default_max_discount: config.default_max_discount,
        }
    }
}

/// Stateless pricing engine
///
/// Holds only its policy, so a single instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Create an engine with the given policy
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// Policy in effect
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Price for `duration` before any coupon
    ///
    /// An explicit tier price wins; otherwise the base price is scaled
    /// linearly.
    pub fn charged_price(&self, table: &PriceTable, duration: u32) -> i64 {
        match table.tier_price(duration) {
            Some(tier) => round_to_unit(tier),
            None => round_to_unit(table.linear_price(duration)),
        }
    }

    /// Struck-through reference price at the linear base rate
    pub fn original_price(&self, table: &PriceTable, duration: u32) -> i64 {
        if table.base_price <= Decimal::ZERO {
            return 0;
        }
        round_to_unit(table.linear_price(duration))
    }

    /// Percentage saved by the tier price against the linear price
    pub fn discount_rate(&self, table: &PriceTable, duration: u32) -> i64 {
        if duration == BASE_DURATION {
            return 0;
        }

        let original = self.original_price(table, duration);
        if original == 0 {
            return 0;
        }

        let charged = self.charged_price(table, duration);
        let saved = Decimal::from(original) - Decimal::from(charged);
        let rate = saved * Decimal::ONE_HUNDRED / Decimal::from(original);

        // A tier priced above the linear rate rounds to a clamped zero
        round_to_unit(rate).min(MAX_DISCOUNT_RATE)
    }

    /// Amount a coupon takes off `charged_price`
    ///
    /// The raw discount is capped by the coupon's `max_discount` (or the
    /// policy default), rounded down, and never exceeds the charged price.
    pub fn coupon_discount(&self, charged_price: i64, coupon: Option<&Coupon>) -> i64 {
        let Some(coupon) = coupon else {
            return 0;
        };

        let charged_price = charged_price.max(0);
        let charged = Decimal::from(charged_price);

        let raw = match coupon.discount_type {
            DiscountType::Percentage => {
                charged.saturating_mul(coupon.discount_value) / Decimal::ONE_HUNDRED
            }
            DiscountType::Fixed => coupon.discount_value,
        };

        let cap = coupon
            .max_discount
            .unwrap_or(self.policy.default_max_discount);
        let discount = floor_to_unit(raw.min(cap));

        if discount > charged_price {
            trace!(
                discount,
                charged_price,
                "Coupon discount exceeds charged price, clamping"
            );
            return charged_price;
        }

        discount
    }

    /// Amount payable after the coupon
    #[inline]
    pub fn final_price(&self, charged_price: i64, coupon_discount: i64) -> i64 {
        charged_price.saturating_sub(coupon_discount).max(0)
    }

    /// Full quote for one duration
    pub fn quote(&self, table: &PriceTable, duration: u32, coupon: Option<&Coupon>) -> PricingResult {
        let charged_price = self.charged_price(table, duration);
        let original_price = self.original_price(table, duration);
        let discount_rate = self.discount_rate(table, duration);
        let coupon_discount = self.coupon_discount(charged_price, coupon);
        let final_price = self.final_price(charged_price, coupon_discount);

        PricingResult {
            charged_price,
            original_price,
            discount_rate,
            coupon_discount,
            final_price,
        }
    }

    /// Quotes for each offered duration, in the given order
    ///
    /// Zero and repeated durations are skipped.
    pub fn quote_options(
        &self,
        table: &PriceTable,
        durations: &[u32],
        coupon: Option<&Coupon>,
    ) -> Vec<DurationQuote> {
        let mut quotes: Vec<DurationQuote> = Vec::with_capacity(durations.len());

        for &duration in durations {
            if duration == 0 || quotes.iter().any(|q| q.duration == duration) {
                continue;
            }
            quotes.push(DurationQuote {
                duration,
                result: self.quote(table, duration, coupon),
            });
        }

        quotes
    }
}

// ==================== Default-policy shortcuts ====================

/// Price for `duration` before any coupon
pub fn compute_charged_price(table: &PriceTable, duration: u32) -> i64 {
    PricingEngine::default().charged_price(table, duration)
}

/// Linear reference price for `duration`
pub fn compute_original_price(table: &PriceTable, duration: u32) -> i64 {
    PricingEngine::default().original_price(table, duration)
}

/// Tier discount percentage for `duration`
pub fn compute_discount_rate(table: &PriceTable, duration: u32) -> i64 {
    PricingEngine::default().discount_rate(table, duration)
}

/// Coupon discount under the default policy
pub fn compute_coupon_discount(charged_price: i64, coupon: Option<&Coupon>) -> i64 {
    PricingEngine::default().coupon_discount(charged_price, coupon)
}

/// Amount payable after the coupon
pub fn compute_final_price(charged_price: i64, coupon_discount: i64) -> i64 {
    PricingEngine::default().final_price(charged_price, coupon_discount)
}

/// Full quote under the default policy
pub fn quote(table: &PriceTable, duration: u32, coupon: Option<&Coupon>) -> PricingResult {
    PricingEngine::default().quote(table, duration, coupon)
}
