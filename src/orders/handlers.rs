//! Order HTTP handlers
//!
//! The five CRUD operations behind the bearer-token middleware. The
//! authenticated identity arrives through the [`AuthUser`] extractor and
//! the owner written to the store is always that identity, never client
//! input. A request for an order owned by someone else is answered with
//! 404, not 403, so order ids cannot be probed across accounts.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde::Serialize;

use crate::error::{json_body, ApiError};
use crate::middleware::auth::AuthUser;
use crate::orders::db::{OrderRecord, OrderStore};
use crate::orders::model::{Order, OrderRequest};

/// Confirmation for a placed order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: i64,
}

/// Confirmation for a deleted order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrderResponse {
    pub message: String,
    pub order_id: i64,
}

fn to_record(request: &OrderRequest) -> OrderRecord {
    OrderRecord {
        product_name: request.product_name.clone(),
        quantity: request.quantity,
        unit_price: request.unit_price,
        total_amount: request.total_amount(),
    }
}

/// POST /api/orders/place
pub async fn place_order(
    AuthUser(user): AuthUser,
    State(orders): State<Arc<dyn OrderStore>>,
    body: Result<Json<Option<OrderRequest>>, JsonRejection>,
) -> Result<Json<PlaceOrderResponse>, ApiError> {
    let request = json_body(body, "Order is null.")?;
    request.validate()?;

    let order = orders.create(&user.username, to_record(&request)).await?;
    tracing::info!("Order {} placed by {}", order.id, user.username);

    Ok(Json(PlaceOrderResponse {
        message: "Order placed successfully".to_string(),
        order_id: order.id,
    }))
}

/// GET /api/orders/all
pub async fn get_all_orders(
    AuthUser(user): AuthUser,
    State(orders): State<Arc<dyn OrderStore>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = orders.list_by_owner(&user.username).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id}
pub async fn get_order(
    AuthUser(user): AuthUser,
    State(orders): State<Arc<dyn OrderStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, ApiError> {
    let order = orders
        .find_by_id_and_owner(id, &user.username)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(order))
}

/// PUT /api/orders/{id}
///
/// Overwrites product name, quantity, and unit price; the total is
/// recomputed from the supplied values, never carried over.
pub async fn update_order(
    AuthUser(user): AuthUser,
    State(orders): State<Arc<dyn OrderStore>>,
    Path(id): Path<i64>,
    body: Result<Json<Option<OrderRequest>>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let request = json_body(body, "Invalid order data.")?;
    request.validate()?;

    let order = orders
        .update(id, &user.username, to_record(&request))
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Order {} updated by {}", order.id, user.username);

    Ok(Json(order))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    AuthUser(user): AuthUser,
    State(orders): State<Arc<dyn OrderStore>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteOrderResponse>, ApiError> {
    if !orders.delete(id, &user.username).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!("Order {} deleted by {}", id, user.username);

    Ok(Json(DeleteOrderResponse {
        message: "Order deleted successfully".to_string(),
        order_id: id,
    }))
}
