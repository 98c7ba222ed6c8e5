//! Wire shapes: request DTOs, the validated create command and the response
//! structures returned by the HTTP surface.

use crate::domain::OrderStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create-order request body as received on the wire.
///
/// Every field deserializes as optional so that missing values surface as
/// structured field errors from [`crate::validation::validate_create_order`]
/// instead of opaque body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "customerEmail", default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<CreateOrderItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderItem {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Validated create-order input handed to the service. Unlike
/// [`CreateOrderRequest`], all fields are concrete.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub customer_email: String,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Body of a successful `POST /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub id: Uuid,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Full order representation returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_email: String,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

/// Body of `GET /api/orders/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub status: OrderStatus,
}

/// ISO-8601 with offset at seconds precision, e.g.
/// `2025-03-29T16:31:04+00:00`.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn create_request_accepts_camel_case_email_key() {
        let request: CreateOrderRequest = serde_json::from_str(
            r#"{"customerEmail":"user@example.com","items":[{"product_name":"Keyboard","unit_price":45.6,"quantity":2}]}"#,
        )
        .expect("deserialize request");

        assert_eq!(request.customer_email.as_deref(), Some("user@example.com"));
        let items = request.items.expect("items present");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name.as_deref(), Some("Keyboard"));
        assert_eq!(items[0].unit_price, Some("45.6".parse().expect("decimal")));
        assert_eq!(items[0].quantity, Some(2));
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let request: CreateOrderRequest = serde_json::from_str("{}").expect("deserialize request");
        assert!(request.customer_email.is_none());
        assert!(request.items.is_none());
    }

    #[test]
    fn created_at_serializes_with_offset_at_seconds_precision() {
        let created_at = Utc
            .with_ymd_and_hms(2025, 3, 29, 16, 31, 4)
            .single()
            .expect("valid timestamp");
        let response = OrderResponse {
            id: Uuid::nil(),
            customer_email: "user@example.com".to_string(),
            status: OrderStatus::New,
            total_price: "91.2".parse().expect("decimal"),
            created_at,
            items: vec![],
        };

        let value = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(value["created_at"], "2025-03-29T16:31:04+00:00");
        assert_eq!(value["total_price"], 91.2);
        assert_eq!(value["status"], "NEW");
    }

    #[test]
    fn order_response_round_trips_through_json() {
        let created_at = Utc
            .with_ymd_and_hms(2025, 3, 29, 16, 31, 4)
            .single()
            .expect("valid timestamp");
        let response = OrderResponse {
            id: Uuid::new_v4(),
            customer_email: "user@example.com".to_string(),
            status: OrderStatus::New,
            total_price: "91.2".parse().expect("decimal"),
            created_at,
            items: vec![OrderItemResponse {
                product_name: "Keyboard".to_string(),
                unit_price: "45.6".parse().expect("decimal"),
                quantity: 2,
            }],
        };

        let json = serde_json::to_string(&response).expect("serialize");
        let parsed: OrderResponse = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, response);
    }
}
