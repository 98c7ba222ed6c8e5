//! HTTP surface: route table and handlers translating requests into service
//! calls and wire responses.

use crate::domain::Order;
use crate::error::ApiError;
use crate::model::{
    CreateOrderRequest, OrderCreatedResponse, OrderResponse, OrderStatusResponse,
};
use crate::service::OrderService;
use crate::state::AppState;
use crate::validation::validate_create_order;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", get(order_status))
        .route("/health", get(health))
        .with_state(state)
}

async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let command = validate_create_order(request).map_err(ApiError::Validation)?;
    let order = state.orders.create_order(command).await?;
    Ok(Json(OrderCreatedResponse {
        id: order.id,
        status: order.status,
    }))
}

async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = lookup(&state, &id).await?;
    Ok(Json(OrderService::format_order(&order)))
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    Ok(Json(state.orders.list_orders().await?))
}

async fn order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderStatusResponse>, ApiError> {
    let order = lookup(&state, &id).await?;
    Ok(Json(OrderStatusResponse {
        status: order.status,
    }))
}

// An id that does not parse as a UUID cannot name an order, so it maps to
// 404 rather than 400.
async fn lookup(state: &AppState, id: &str) -> Result<Order, ApiError> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Err(ApiError::NotFound);
    };
    state.orders.get_order(id).await?.ok_or(ApiError::NotFound)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

/// Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
