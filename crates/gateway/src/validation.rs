//! # Request Validation
//!
//! Turns raw request bodies into validated values. Two tiers of failure are kept apart:
//!
//! - [`ValidationError::Malformed`]: the body is not JSON at all.
//! - [`ValidationError::Schema`]: the body is JSON but fields are missing or mistyped. Every
//!   offending field is reported, not just the first.
//!
//! Field paths use dots for nesting (`order_details.1.price`); errors about the shape of
//! the whole body are reported under `_schema`. Unknown fields are ignored.
//!
//! Validation is a pure function of the input bytes.

use crate::model::{CreateOrderRequest, LineItem, Product};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

const MISSING: &str = "Missing data for required field.";
const NULL: &str = "Field may not be null.";
const INVALID_INPUT: &str = "Invalid input type.";

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Why a request body was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The body could not be parsed as JSON. Carries the parser's message.
    #[error("Invalid json: {0}")]
    Malformed(String),

    /// The body parsed but violated field constraints.
    #[error("Invalid request: {} field error(s)", .0.len())]
    Schema(Vec<FieldError>),
}

/// Parses and validates a [`Product`] body.
///
/// All five fields are required. `id` must be a non-empty string.
pub fn parse_product(body: &[u8]) -> Result<Product, ValidationError> {
    let value = parse_json(body)?;
    let mut checker = Checker::default();

    let product = match value.as_object() {
        None => checker.reject("_schema", INVALID_INPUT),
        Some(object) => {
            let id = checker.string(object, "", "id");
            let title = checker.string(object, "", "title");
            let passenger_capacity = checker.integer(object, "", "passenger_capacity");
            let maximum_speed = checker.number(object, "", "maximum_speed");
            let in_stock = checker.integer(object, "", "in_stock");

            if id.as_deref() == Some("") {
                checker.push("id", "Shorter than minimum length 1.");
            }

            match (id, title, passenger_capacity, maximum_speed, in_stock) {
                (Some(id), Some(title), Some(capacity), Some(speed), Some(stock)) => {
                    Some(Product::new(id, title, capacity, speed, stock))
                }
                _ => None,
            }
        }
    };

    checker.finish(product)
}

/// Parses and validates a `POST /orders` body.
///
/// `order_details` must be a list; it may be empty. Each item needs a string
/// `product_id`, a decimal `price` (string or number) and an integer `quantity` ≥ 1.
pub fn parse_create_order(body: &[u8]) -> Result<CreateOrderRequest, ValidationError> {
    let value = parse_json(body)?;
    let mut checker = Checker::default();

    let order_details = match value.as_object() {
        None => checker.reject("_schema", INVALID_INPUT),
        Some(object) => checker.line_items(object, "order_details"),
    };

    checker.finish(order_details.map(|order_details| CreateOrderRequest { order_details }))
}

fn parse_json(body: &[u8]) -> Result<Value, ValidationError> {
    serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))
}

/// Collects field errors while reading values out of JSON objects.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn push(&mut self, field: impl Into<String>, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    fn reject<T>(&mut self, field: impl Into<String>, message: &str) -> Option<T> {
        self.push(field, message);
        None
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationError::Schema(self.errors)),
        }
    }

    fn required<'v>(
        &mut self,
        object: &'v Map<String, Value>,
        path: &str,
        name: &str,
    ) -> Option<&'v Value> {
        match object.get(name) {
            None => self.reject(format!("{path}{name}"), MISSING),
            Some(Value::Null) => self.reject(format!("{path}{name}"), NULL),
            Some(value) => Some(value),
        }
    }

    fn string(&mut self, object: &Map<String, Value>, path: &str, name: &str) -> Option<String> {
        match self.required(object, path, name)? {
            Value::String(s) => Some(s.clone()),
            _ => self.reject(format!("{path}{name}"), "Not a valid string."),
        }
    }

    fn integer(&mut self, object: &Map<String, Value>, path: &str, name: &str) -> Option<i64> {
        match self.required(object, path, name)?.as_i64() {
            Some(n) => Some(n),
            None => self.reject(format!("{path}{name}"), "Not a valid integer."),
        }
    }

    fn number(&mut self, object: &Map<String, Value>, path: &str, name: &str) -> Option<f64> {
        match self.required(object, path, name)? {
            Value::Number(n) => n.as_f64(),
            _ => self.reject(format!("{path}{name}"), "Not a valid number."),
        }
    }

    fn decimal(&mut self, object: &Map<String, Value>, path: &str, name: &str) -> Option<Decimal> {
        let parsed = match self.required(object, path, name)? {
            Value::String(s) => parse_decimal(s.trim()),
            Value::Number(n) => parse_decimal(&n.to_string()),
            _ => None,
        };
        match parsed {
            Some(d) => Some(d),
            None => self.reject(format!("{path}{name}"), "Not a valid decimal."),
        }
    }

    fn quantity(&mut self, object: &Map<String, Value>, path: &str, name: &str) -> Option<u32> {
        let n = self.integer(object, path, name)?;
        if n < 1 {
            return self.reject(format!("{path}{name}"), "Must be at least 1.");
        }
        match u32::try_from(n) {
            Ok(n) => Some(n),
            Err(_) => self.reject(format!("{path}{name}"), "Number too large."),
        }
    }

    fn line_items(&mut self, object: &Map<String, Value>, name: &str) -> Option<Vec<LineItem>> {
        let Value::Array(items) = self.required(object, "", name)? else {
            return self.reject(name, "Not a valid list.");
        };

        let mut parsed = Vec::with_capacity(items.len());
        let mut complete = true;
        for (index, item) in items.iter().enumerate() {
            let Some(item) = item.as_object() else {
                self.push(format!("{name}.{index}"), INVALID_INPUT);
                complete = false;
                continue;
            };

            let path = format!("{name}.{index}.");
            let product_id = self.string(item, &path, "product_id");
            let price = self.decimal(item, &path, "price");
            let quantity = self.quantity(item, &path, "quantity");

            match (product_id, price, quantity) {
                (Some(product_id), Some(price), Some(quantity)) => {
                    parsed.push(LineItem::new(product_id, price, quantity));
                }
                _ => complete = false,
            }
        }

        complete.then_some(parsed)
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use rstest::rstest;

    fn schema_fields(result: Result<impl std::fmt::Debug, ValidationError>) -> Vec<(String, String)> {
        match result {
            Err(ValidationError::Schema(errors)) => errors
                .into_iter()
                .map(|e| (e.field, e.message))
                .collect(),
            other => panic!("expected schema violation, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_product() {
        let body = br#"{
            "id": "the_odyssey",
            "title": "The Odyssey",
            "passenger_capacity": 101,
            "maximum_speed": 5,
            "in_stock": 10
        }"#;

        let product = parse_product(body).unwrap();
        assert_eq!(product.id, ProductId::from("the_odyssey"));
        assert_eq!(product.title, "The Odyssey");
        assert_eq!(product.passenger_capacity, 101);
        assert_eq!(product.maximum_speed, 5.0);
        assert_eq!(product.in_stock, 10);
    }

    #[rstest]
    #[case::not_json(b"{ invalid json }".as_slice())]
    #[case::empty_body(b"".as_slice())]
    #[case::truncated(br#"{"id": "a""#.as_slice())]
    fn test_malformed_product_body(#[case] body: &[u8]) {
        let result = parse_product(body);
        assert!(matches!(result, Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn test_product_reports_every_bad_field() {
        let body = br#"{"id": 7, "passenger_capacity": "many", "maximum_speed": 5.5}"#;

        let fields = schema_fields(parse_product(body));
        assert_eq!(
            fields,
            vec![
                ("id".to_string(), "Not a valid string.".to_string()),
                ("title".to_string(), MISSING.to_string()),
                ("passenger_capacity".to_string(), "Not a valid integer.".to_string()),
                ("in_stock".to_string(), MISSING.to_string()),
            ]
        );
    }

    #[rstest]
    #[case::array(br#"[1, 2]"#.as_slice())]
    #[case::string(br#""product""#.as_slice())]
    #[case::number(b"42".as_slice())]
    fn test_non_object_body_is_schema_violation(#[case] body: &[u8]) {
        let fields = schema_fields(parse_product(body));
        assert_eq!(fields, vec![("_schema".to_string(), INVALID_INPUT.to_string())]);
    }

    #[test]
    fn test_empty_product_id_is_rejected() {
        let body = br#"{"id": "", "title": "t", "passenger_capacity": 1, "maximum_speed": 1, "in_stock": 1}"#;
        let fields = schema_fields(parse_product(body));
        assert_eq!(fields[0].0, "id");
    }

    #[test]
    fn test_null_field_is_rejected() {
        let body = br#"{"id": "a", "title": null, "passenger_capacity": 1, "maximum_speed": 1, "in_stock": 1}"#;
        let fields = schema_fields(parse_product(body));
        assert_eq!(fields, vec![("title".to_string(), NULL.to_string())]);
    }

    #[test]
    fn test_valid_create_order() {
        let body = br#"{
            "order_details": [
                {"product_id": "the_odyssey", "price": "99.99", "quantity": 1},
                {"price": 5.99, "product_id": "the_enigma", "quantity": 2}
            ]
        }"#;

        let request = parse_create_order(body).unwrap();
        assert_eq!(
            request.order_details,
            vec![
                LineItem::new("the_odyssey", Decimal::new(9999, 2), 1),
                LineItem::new("the_enigma", Decimal::new(599, 2), 2),
            ]
        );
    }

    #[test]
    fn test_empty_order_details_are_accepted() {
        let request = parse_create_order(br#"{"order_details": []}"#).unwrap();
        assert!(request.order_details.is_empty());
    }

    #[rstest]
    #[case::missing_list(br#"{}"#.as_slice(), "order_details", MISSING)]
    #[case::not_a_list(br#"{"order_details": {"a": 1}}"#.as_slice(), "order_details", "Not a valid list.")]
    #[case::item_not_object(br#"{"order_details": [3]}"#.as_slice(), "order_details.0", INVALID_INPUT)]
    #[case::bad_price(
        br#"{"order_details": [{"product_id": "a", "price": "cheap", "quantity": 1}]}"#.as_slice(),
        "order_details.0.price",
        "Not a valid decimal."
    )]
    #[case::zero_quantity(
        br#"{"order_details": [{"product_id": "a", "price": "1.00", "quantity": 0}]}"#.as_slice(),
        "order_details.0.quantity",
        "Must be at least 1."
    )]
    #[case::missing_product_id(
        br#"{"order_details": [{"price": "1.00", "quantity": 1}]}"#.as_slice(),
        "order_details.0.product_id",
        MISSING
    )]
    fn test_create_order_field_errors(
        #[case] body: &[u8],
        #[case] field: &str,
        #[case] message: &str,
    ) {
        let fields = schema_fields(parse_create_order(body));
        assert_eq!(fields, vec![(field.to_string(), message.to_string())]);
    }

    #[test]
    fn test_errors_in_later_items_are_still_reported() {
        let body = br#"{
            "order_details": [
                {"product_id": "a", "price": "1.00", "quantity": "one"},
                {"product_id": "b", "price": "2.00", "quantity": 1},
                {"product_id": 3, "price": "3.00", "quantity": 1}
            ]
        }"#;

        let fields: Vec<String> = schema_fields(parse_create_order(body))
            .into_iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(
            fields,
            vec!["order_details.0.quantity", "order_details.2.product_id"]
        );
    }

    #[test]
    fn test_malformed_order_body() {
        let result = parse_create_order(b"not json");
        assert!(matches!(result, Err(ValidationError::Malformed(msg)) if !msg.is_empty()));
    }
}
