use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::customer::CustomerDraft;

use super::{ApiError, AppState};

// ============================================================================
// Customer Routes
// ============================================================================

pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["list_customers"])
        .inc();

    let customers = state.customers.list().await?;
    Ok(HttpResponse::Ok().json(customers))
}

pub async fn get(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["get_customer"])
        .inc();

    let customer = state.customers.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CustomerDraft>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["create_customer"])
        .inc();

    let customer = state.customers.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "New customer added successfully",
        "customer": customer
    })))
}

pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CustomerDraft>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["update_customer"])
        .inc();

    let customer = state
        .customers
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Customer details updated successfully",
        "customer": customer
    })))
}

pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["delete_customer"])
        .inc();

    let id = path.into_inner();
    state.customers.delete(id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Customer with ID {} has been deleted successfully", id)
    })))
}

// ============================================================================
// Unit Tests
// ============================================================================
