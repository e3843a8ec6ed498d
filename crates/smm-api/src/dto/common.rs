//! Common DTOs used across the API

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

/// Deserialize a duration from either a number or a numeric string
///
/// Duration selectors post their value as a string.
pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct DurationVisitor;

    impl<'de> Visitor<'de> for DurationVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string containing one")
        }

        fn visit_i64<E>(self, value: i64) -> Result<u32, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(|_| E::custom(format!("duration out of range: {value}")))
        }

        fn visit_u64<E>(self, value: u64) -> Result<u32, E>
        where
            E: de::Error,
        {
            u32::try_from(value).map_err(|_| E::custom(format!("duration out of range: {value}")))
        }

        fn visit_str<E>(self, value: &str) -> Result<u32, E>
        where
            E: de::Error,
        {
            value.trim().parse::<u32>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(DurationVisitor)
}

#[derive(Deserialize)]
struct DurationItem(#[serde(deserialize_with = "deserialize_duration")] u32);

/// Deserialize an optional list of durations, each a number or a numeric string
///
/// Combine with `#[serde(default)]` so that a missing list is `None`.
pub fn deserialize_durations<'de, D>(deserializer: D) -> Result<Option<Vec<u32>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items = Option::<Vec<DurationItem>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(|DurationItem(d)| d).collect()))
}
