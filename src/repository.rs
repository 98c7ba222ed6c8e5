//! Persistence boundary for order aggregates.

use crate::domain::Order;
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

/// Store for order aggregates.
///
/// Absence is a valid outcome: `find` returns `None` for unknown ids rather
/// than an error. Errors are reserved for the store itself failing.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and its items as one atomic unit.
    async fn insert(&self, order: Order) -> Result<()>;
    async fn find(&self, id: Uuid) -> Result<Option<Order>>;
    /// All persisted orders, in insertion order.
    async fn find_all(&self) -> Result<Vec<Order>>;
}

/// In-memory store.
///
/// The whole aggregate is a single value behind one write lock, so an insert
/// is all-or-nothing and concurrent readers never observe a partially
/// written order.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<IndexMap<Uuid, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(&self, order: Order) -> Result<()> {
        self.orders.write().insert(order.id, order);
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.read().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find_returns_the_order() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new("user@example.com");
        let id = order.id;

        repo.insert(order.clone()).await.expect("insert");
        let found = repo.find(id).await.expect("find");
        assert_eq!(found, Some(order));
    }

    #[tokio::test]
    async fn find_unknown_id_is_none() {
        let repo = InMemoryOrderRepository::new();
        let found = repo.find(Uuid::new_v4()).await.expect("find");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = InMemoryOrderRepository::new();
        let first = Order::new("first@example.com");
        let second = Order::new("second@example.com");
        let third = Order::new("third@example.com");

        for order in [&first, &second, &third] {
            repo.insert(order.clone()).await.expect("insert");
        }

        let all = repo.find_all().await.expect("find_all");
        let emails: Vec<_> = all.iter().map(|o| o.customer_email.as_str()).collect();
        assert_eq!(
            emails,
            vec![
                "first@example.com",
                "second@example.com",
                "third@example.com"
            ]
        );
    }
}
