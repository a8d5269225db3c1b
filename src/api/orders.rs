use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::order::OrderDraft;

use super::{ApiError, AppState};

// ============================================================================
// Order Routes
// ============================================================================

pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<OrderDraft>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["create_order"])
        .inc();

    let order = state.orders.create(body.into_inner()).await?;
    state.metrics.orders_placed.inc();

    Ok(HttpResponse::Created().json(json!({
        "message": "New order placed",
        "order": order
    })))
}

pub async fn add_product(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["add_product_to_order"])
        .inc();

    let (order_id, product_id) = path.into_inner();
    state.orders.add_product(order_id, product_id).await?;
    state.metrics.products_attached.inc();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully added item to order"
    })))
}

pub async fn remove_product(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["remove_product_from_order"])
        .inc();

    let (order_id, product_id) = path.into_inner();
    state.orders.remove_product(order_id, product_id).await?;
    state.metrics.products_detached.inc();

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Product {} removed from Order {}", product_id, order_id)
    })))
}

pub async fn list_products(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["list_products_for_order"])
        .inc();

    let products = state.orders.products_for_order(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(products))
}

pub async fn list_for_customer(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["list_orders_for_customer"])
        .inc();

    let orders = state.orders.orders_for_customer(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(orders))
}

// ============================================================================
// Unit Tests
// ============================================================================
