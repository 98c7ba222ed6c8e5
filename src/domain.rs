//! The order aggregate: an order and its line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an order.
///
/// Creation is the only modeled transition, so every persisted order is
/// `New`. The wire value is the upper-case name (`"NEW"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One product line within an order.
///
/// Items are created alongside their parent order and never persisted or
/// mutated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Aggregate root representing a customer purchase request.
///
/// Prices are fixed-point decimals to keep totals free of floating-point
/// drift; they serialize as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_email: String,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Creates an empty order with a fresh random id, status `New` and the
    /// current time as its immutable creation timestamp.
    pub fn new(customer_email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_email: customer_email.into(),
            status: OrderStatus::New,
            total_price: Decimal::ZERO,
            created_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Recomputes the total as the sum of unit price times quantity over all
    /// items, rounded to two decimal places (banker's rounding).
    ///
    /// The total is a snapshot taken at call time; it does not track later
    /// item changes.
    pub fn calculate_total(&mut self) {
        self.total_price = self
            .items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.quantity))
            .sum::<Decimal>()
            .round_dp(2);
    }
}
