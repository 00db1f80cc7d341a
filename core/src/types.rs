//! Domain DTOs for the item API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. `ItemDto` is
//! deliberately not `Deserialize`: it is only ever built by the explicit
//! field extraction in `decode.rs`.

use std::fmt;

use serde::Serialize;

/// Username/password pair sent as the JSON body of the POST calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Numeric price of an item, as found in the JSON.
///
/// Integers stay exact: `Integer` when they fit an `i64`, `Unsigned` for
/// larger non-negative values. Anything with a fraction or exponent is
/// `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Integer(i64),
    Unsigned(u64),
    Decimal(f64),
}

impl Price {
    pub fn as_f64(self) -> f64 {
        match self {
            Price::Integer(v) => v as f64,
            Price::Unsigned(v) => v as f64,
            Price::Decimal(v) => v,
        }
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price::Integer(value)
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Price::Unsigned(value), Price::Integer)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Decimal(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Integer(v) => write!(f, "{v}"),
            Price::Unsigned(v) => write!(f, "{v}"),
            Price::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// A single item returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDto {
    pub title: String,
    pub price: Price,
}

impl ItemDto {
    pub fn new(title: impl Into<String>, price: Price) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_with_field_names() {
        let json = serde_json::to_value(Credentials::new("Robbie", "1234")).unwrap();
        assert_eq!(json, serde_json::json!({"username": "Robbie", "password": "1234"}));
    }

    #[test]
    fn price_display_keeps_integer_form() {
        assert_eq!(Price::Integer(3888000).to_string(), "3888000");
        assert_eq!(Price::Decimal(12.5).to_string(), "12.5");
    }

    #[test]
    fn small_u64_becomes_integer() {
        assert_eq!(Price::from(42u64), Price::Integer(42));
        assert_eq!(Price::from(u64::MAX), Price::Unsigned(u64::MAX));
    }

    #[test]
    fn integer_price_converts_to_f64() {
        assert_eq!(Price::Integer(450000).as_f64(), 450000.0);
    }
}
