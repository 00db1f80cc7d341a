//! Explicit JSON-to-`ItemDto` mapping.
//!
//! List responses look like:
//!
//! ```json
//! {"items":[{"title":"Mac","price":3888000},{"title":"iPad","price":1230000}]}
//! ```
//!
//! Each field is read by hand so a malformed body fails with a `DecodeError`
//! naming the exact path, instead of a generic deserializer message. Unknown
//! fields are ignored.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::{ItemDto, Price};

/// Decode a body of the form `{"items":[...]}`, keeping the array order.
pub fn decode_items(body: &str) -> Result<Vec<ItemDto>, DecodeError> {
    let root: Value = serde_json::from_str(body)?;
    let object = as_object(&root, "$")?;

    let items = object
        .get("items")
        .ok_or_else(|| DecodeError::MissingField {
            path: "items".to_string(),
        })?
        .as_array()
        .ok_or_else(|| DecodeError::WrongType {
            path: "items".to_string(),
            expected: "an array",
        })?;

    items
        .iter()
        .enumerate()
        .map(|(index, value)| item_from_value(value, &format!("items[{index}]")))
        .collect()
}

/// Decode a body holding a single item object.
pub fn decode_item(body: &str) -> Result<ItemDto, DecodeError> {
    let root: Value = serde_json::from_str(body)?;
    item_from_value(&root, "$")
}

fn item_from_value(value: &Value, path: &str) -> Result<ItemDto, DecodeError> {
    let object = as_object(value, path)?;

    let title = field(object, path, "title")?
        .as_str()
        .ok_or_else(|| DecodeError::WrongType {
            path: join(path, "title"),
            expected: "a string",
        })?
        .to_string();

    let price = match field(object, path, "price")? {
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(v), _) => Price::Integer(v),
            (None, Some(v)) => Price::Unsigned(v),
            _ => Price::Decimal(n.as_f64().unwrap_or(f64::NAN)),
        },
        _ => {
            return Err(DecodeError::WrongType {
                path: join(path, "price"),
                expected: "a number",
            })
        }
    };

    Ok(ItemDto { title, price })
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::NotAnObject {
        path: path.to_string(),
    })
}

fn field<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    name: &str,
) -> Result<&'a Value, DecodeError> {
    object.get(name).ok_or_else(|| DecodeError::MissingField {
        path: join(path, name),
    })
}

fn join(path: &str, name: &str) -> String {
    if path == "$" {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_element_list() {
        let items = decode_items(r#"{"items":[{"title":"Mac","price":3888000}]}"#).unwrap();
        assert_eq!(items, vec![ItemDto::new("Mac", Price::Integer(3888000))]);
    }

    #[test]
    fn empty_array_is_empty_vec() {
        let items = decode_items(r#"{"items":[]}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let body = r#"{"items":[
            {"title":"Watch","price":450000},
            {"title":"Mac","price":3888000},
            {"title":"AirPods","price":350000}
        ]}"#;
        let titles: Vec<String> = decode_items(body)
            .unwrap()
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, ["Watch", "Mac", "AirPods"]);
    }

    #[test]
    fn missing_items_field() {
        let err = decode_items(r#"{"things":[]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { ref path } if path == "items"));
    }

    #[test]
    fn items_not_an_array() {
        let err = decode_items(r#"{"items":{"title":"Mac","price":1}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::WrongType { expected: "an array", .. }));
    }

    #[test]
    fn not_json() {
        let err = decode_items("not json").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = decode_items(r#"[{"title":"Mac","price":1}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { ref path } if path == "$"));
    }

    #[test]
    fn element_missing_price_reports_path() {
        let body = r#"{"items":[{"title":"Mac","price":1},{"title":"iPad"}]}"#;
        let err = decode_items(body).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { ref path } if path == "items[1].price"));
    }

    #[test]
    fn element_with_string_price_is_rejected() {
        let body = r#"{"items":[{"title":"Mac","price":"3888000"}]}"#;
        let err = decode_items(body).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::WrongType { ref path, expected: "a number" } if path == "items[0].price"
        ));
    }

    #[test]
    fn element_not_an_object() {
        let err = decode_items(r#"{"items":[42]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject { ref path } if path == "items[0]"));
    }

    #[test]
    fn decimal_price() {
        let items = decode_items(r#"{"items":[{"title":"Cable","price":19.99}]}"#).unwrap();
        assert_eq!(items[0].price, Price::Decimal(19.99));
    }

    #[test]
    fn integer_above_i64_max_stays_exact() {
        let item = decode_item(r#"{"title":"Mac","price":18446744073709551615}"#).unwrap();
        assert_eq!(item.price, Price::Unsigned(u64::MAX));
        assert_eq!(item.price.to_string(), "18446744073709551615");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let item = decode_item(r#"{"title":"iPad","price":1230000,"stock":3}"#).unwrap();
        assert_eq!(item, ItemDto::new("iPad", Price::Integer(1230000)));
    }

    #[test]
    fn single_item_missing_title() {
        let err = decode_item(r#"{"price":1}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { ref path } if path == "title"));
    }
}
