//! Product record
//!
//! The product shape served by the catalog API. Price fields may be numbers,
//! numeric strings or null; they are coerced when the record is read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PriceTable;
use crate::coerce::lenient;

/// Durations carried as dedicated price columns on a product record
pub const DAY_1: u32 = 1;
pub const DAYS_7: u32 = 7;
pub const DAYS_30: u32 = 30;

/// Product as returned by `GET /api/products/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product identifier (numeric or string, depending on the backend)
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub name: Option<String>,

    /// Legacy single price, used when `price1Day` is absent
    #[serde(default, deserialize_with = "lenient::option_decimal")]
    pub price: Option<Decimal>,

    #[serde(default, rename = "price1Day", deserialize_with = "lenient::option_decimal")]
    pub price_1_day: Option<Decimal>,

    #[serde(default, rename = "price7Days", deserialize_with = "lenient::option_decimal")]
    pub price_7_days: Option<Decimal>,

    #[serde(default, rename = "price30Days", deserialize_with = "lenient::option_decimal")]
    pub price_30_days: Option<Decimal>,
}

impl ProductRecord {
    /// Build the engine's price table from this record
    ///
    /// The base price is `price1Day`, falling back to `price` only when the
    /// former is null or missing. Tier overrides are the non-null duration
    /// columns.
    pub fn price_table(&self) -> PriceTable {
        let base_price = self
            .price_1_day
            .or(self.price)
            .unwrap_or(Decimal::ZERO);

        let mut table = PriceTable::new(base_price);
        for (duration, price) in [
            (DAY_1, self.price_1_day),
            (DAYS_7, self.price_7_days),
            (DAYS_30, self.price_30_days),
        ] {
            if let Some(price) = price {
                table = table.with_tier(duration, price);
            }
        }

        table
    }

    /// Identifier rendered for logs
    pub fn display_id(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_full_record_maps_all_tiers() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": 12,
            "name": "Instagram followers",
            "price": 4500,
            "price1Day": 5000,
            "price7Days": "30000",
            "price30Days": 120000
        }))
        .unwrap();

        let table = record.price_table();
        assert_eq!(table.base_price, dec!(5000));
        assert_eq!(table.tier_price(1), Some(dec!(5000)));
        assert_eq!(table.tier_price(7), Some(dec!(30000)));
        assert_eq!(table.tier_price(30), Some(dec!(120000)));
        assert_eq!(record.display_id(), "12");
    }

    #[test]
    fn test_base_price_falls_back_to_price() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": "p-1",
            "price": "5000",
            "price1Day": null
        }))
        .unwrap();

        let table = record.price_table();
        assert_eq!(table.base_price, dec!(5000));
        assert!(table.tier_prices.is_empty());
        assert_eq!(record.display_id(), "p-1");
    }

    #[test]
    fn test_unparsable_day_price_does_not_fall_back() {
        // A present but unreadable price1Day still shadows `price`
        let record: ProductRecord = serde_json::from_value(json!({
            "price": 5000,
            "price1Day": "call us"
        }))
        .unwrap();

        let table = record.price_table();
        assert_eq!(table.base_price, Decimal::ZERO);
        assert_eq!(table.tier_price(1), Some(Decimal::ZERO));
    }

    #[test]
    fn test_empty_record() {
        let record: ProductRecord = serde_json::from_value(json!({})).unwrap();
        let table = record.price_table();
        assert_eq!(table, PriceTable::default());
        assert_eq!(record.display_id(), "-");
    }
}
