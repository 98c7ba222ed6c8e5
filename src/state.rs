use crate::config::ServerConfig;
use crate::repository::InMemoryOrderRepository;
use crate::service::OrderService;
use std::sync::Arc;

/// Shared application state handed to the HTTP handlers.
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub orders: OrderService,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let repo = Arc::new(InMemoryOrderRepository::new());
        Self {
            config,
            orders: OrderService::new(repo),
        }
    }
}
