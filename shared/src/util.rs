//! Lenient decimal parsing and display rounding
//!
//! Every numeric field an attendant can type follows the same policy:
//! missing or unparseable text is treated as zero so a half-filled form
//! keeps producing a running total. Rounding matches the legacy display
//! behavior (midpoint away from zero, like `toFixed`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Parse a raw entry field, coercing missing/invalid input to zero.
pub fn parse_decimal_lenient(raw: Option<&str>) -> Decimal {
    raw.and_then(|s| s.trim().parse::<Decimal>().ok())
        .unwrap_or(Decimal::ZERO)
}

/// Parse a raw entry field, keeping "nothing entered" distinct from zero.
///
/// Used by submission validation, where an absent reading must not be
/// compared at all.
pub fn parse_decimal_opt(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|s| s.trim().parse::<Decimal>().ok())
}

/// Round to 2 decimal places for line-item display.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest whole currency unit for cash-facing totals.
pub fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Serde adapter for backend decimal fields.
///
/// The backend emits JSON numbers, but older deployments returned
/// numeric strings; anything unreadable becomes zero (same fail-soft
/// policy as attendant input).
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(from_value(&value))
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub(super) fn from_value(value: &serde_json::Value) -> Decimal {
        match value {
            serde_json::Value::Number(n) => n.to_string().parse().unwrap_or(Decimal::ZERO),
            serde_json::Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }
}

/// Optional variant of [`lenient_decimal`] for fields the backend only
/// sends on some responses (e.g. per-section opening readings).
pub mod lenient_decimal_opt {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(value
            .filter(|v| !v.is_null())
            .map(|v| super::lenient_decimal::from_value(&v)))
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => rust_decimal::serde::float::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_lenient_defaults_to_zero() {
        assert_eq!(parse_decimal_lenient(None), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient(Some("")), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient(Some("abc")), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient(Some(" 12.50 ")), d("12.50"));
    }

    #[test]
    fn test_parse_opt_keeps_absence() {
        assert_eq!(parse_decimal_opt(None), None);
        assert_eq!(parse_decimal_opt(Some("x")), None);
        assert_eq!(parse_decimal_opt(Some("7")), Some(d("7")));
    }

    #[test]
    fn test_round_unit_midpoint_away_from_zero() {
        assert_eq!(round_unit(d("410.40")), d("410"));
        assert_eq!(round_unit(d("410.50")), d("411"));
        assert_eq!(round_unit(d("410.49")), d("410"));
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(d("1.005")), d("1.01"));
        assert_eq!(round_money(d("12.3456")), d("12.35"));
    }

    #[test]
    fn test_lenient_decimal_accepts_numbers_and_strings() {
        assert_eq!(
            lenient_decimal::from_value(&serde_json::json!(410.4)),
            d("410.4")
        );
        assert_eq!(
            lenient_decimal::from_value(&serde_json::json!("500.00")),
            d("500.00")
        );
        assert_eq!(
            lenient_decimal::from_value(&serde_json::json!("n/a")),
            Decimal::ZERO
        );
        assert_eq!(
            lenient_decimal::from_value(&serde_json::Value::Null),
            Decimal::ZERO
        );
    }
}
