//! Lenient-in-shape, strict-in-value price decoding.
//!
//! The backend is inconsistent about price encoding: `2500`, `2500.0` and
//! `"2500"` all appear. Amounts are whole francs CFA.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative amount as a number or numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        if v.is_finite() && v >= 0.0 && v <= u64::MAX as f64 {
            Ok(v.round() as u64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        let compact: String = v.chars().filter(|c| !c.is_whitespace()).collect();
        if let Ok(whole) = compact.parse::<u64>() {
            return Ok(whole);
        }
        match compact.parse::<f64>() {
            Ok(f) => self.visit_f64(f),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

/// Deserialize a required price.
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(PriceVisitor)
}

/// Deserialize an optional price; `null` and a missing field both map to `None`.
pub fn deserialize_optional_price<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalPrice;

    impl<'de> Visitor<'de> for OptionalPrice {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an optional price")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(PriceVisitor).map(Some)
        }
    }

    deserializer.deserialize_option(OptionalPrice)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "super::deserialize_price")]
        price: u64,
        #[serde(default, deserialize_with = "super::deserialize_optional_price")]
        promo: Option<u64>,
    }

    fn parse(json: &str) -> Result<Priced, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn accepts_number_and_string() {
        assert_eq!(parse(r#"{"price": 2500}"#).unwrap().price, 2500);
        assert_eq!(parse(r#"{"price": "2500"}"#).unwrap().price, 2500);
        assert_eq!(parse(r#"{"price": "2 500"}"#).unwrap().price, 2500);
        assert_eq!(parse(r#"{"price": 2500.4}"#).unwrap().price, 2500);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(parse(r#"{"price": -1}"#).is_err());
        assert!(parse(r#"{"price": "gratuit"}"#).is_err());
        assert!(parse(r#"{"price": null}"#).is_err());
    }

    #[test]
    fn optional_price_handles_null_and_missing() {
        assert_eq!(parse(r#"{"price": 1, "promo": null}"#).unwrap().promo, None);
        assert_eq!(parse(r#"{"price": 1}"#).unwrap().promo, None);
        assert_eq!(parse(r#"{"price": 1, "promo": "900"}"#).unwrap().promo, Some(900));
    }
}
