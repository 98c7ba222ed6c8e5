//! Order orchestration: creation over the repository and read formatting.

use crate::domain::{Order, OrderItem};
use crate::model::{CreateOrderCommand, OrderItemResponse, OrderResponse};
use crate::repository::OrderRepository;
use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Builds the aggregate from a validated command, computes the total and
    /// persists it once. Returns the persisted order with its generated id
    /// and computed total.
    pub async fn create_order(&self, command: CreateOrderCommand) -> Result<Order> {
        let mut order = Order::new(command.customer_email);
        for item in command.items {
            order.add_item(OrderItem {
                product_name: item.product_name,
                unit_price: item.unit_price,
                quantity: item.quantity,
            });
        }
        order.calculate_total();

        self.repo.insert(order.clone()).await?;
        tracing::info!(
            order_id = %order.id,
            item_count = order.items.len(),
            total_price = %order.total_price,
            "order created"
        );
        Ok(order)
    }

    /// Looks up an order by id. `None` means no such order; the HTTP layer
    /// maps that to 404.
    pub async fn get_order(&self, id: Uuid) -> Result<Option<Order>> {
        self.repo.find(id).await
    }

    /// All orders, each pre-formatted to the response shape. No pagination
    /// or filtering; the store's insertion order is kept.
    pub async fn list_orders(&self) -> Result<Vec<OrderResponse>> {
        let orders = self.repo.find_all().await?;
        Ok(orders.iter().map(Self::format_order).collect())
    }

    /// Pure mapping from the aggregate to the wire shape.
    pub fn format_order(order: &Order) -> OrderResponse {
        OrderResponse {
            id: order.id,
            customer_email: order.customer_email.clone(),
            status: order.status,
            total_price: order.total_price,
            created_at: order.created_at,
            items: order
                .items
                .iter()
                .map(|item| OrderItemResponse {
                    product_name: item.product_name.clone(),
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
