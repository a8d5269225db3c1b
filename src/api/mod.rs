use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use prometheus::{Encoder, TextEncoder};

use crate::domain::customer::CustomerService;
use crate::domain::order::OrderService;
use crate::domain::product::ProductService;
use crate::metrics::Metrics;
use crate::store::EntityStore;

mod customers;
mod error;
mod orders;
mod products;

pub use error::ApiError;

// ============================================================================
// JSON API
// ============================================================================
//
// Thin route layer: deserialize, delegate to the domain services, map the
// error taxonomy to HTTP statuses. No business logic lives here.
//
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub products: ProductService,
    pub orders: OrderService,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, metrics: Arc<Metrics>) -> Self {
        Self {
            customers: CustomerService::new(store.clone()),
            products: ProductService::new(store.clone()),
            orders: OrderService::new(store),
            metrics,
        }
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_handler))
        .route("/metrics", web::get().to(metrics_handler))
        // customers
        .route("/customers", web::get().to(customers::list))
        .route("/customers", web::post().to(customers::create))
        .route("/customers/{id}", web::get().to(customers::get))
        .route("/customers/{id}", web::put().to(customers::update))
        .route("/customers/{id}", web::delete().to(customers::delete))
        // products
        .route("/products", web::get().to(products::list))
        .route("/products", web::post().to(products::create))
        .route("/products/{id}", web::get().to(products::get))
        .route("/products/{id}", web::put().to(products::update))
        .route("/products/{id}", web::delete().to(products::delete))
        // orders and their product associations
        .route("/orders", web::post().to(orders::create))
        .route(
            "/orders/{order_id}/add_product/{product_id}",
            web::put().to(orders::add_product),
        )
        .route(
            "/orders/{order_id}/products/{product_id}",
            web::delete().to(orders::remove_product),
        )
        .route(
            "/orders/{order_id}/products",
            web::get().to(orders::list_products),
        )
        .route(
            "/orders/user/{customer_id}",
            web::get().to(orders::list_for_customer),
        );
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "commerce-api"
    }))
}

async fn metrics_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::internal(format!("metrics encoding failed: {}", e)))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}

// ============================================================================
// Test Support
// ============================================================================

#[cfg(test)]
pub fn test_state() -> AppState {
    use crate::store::MemoryStore;

    AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(Metrics::new().expect("metrics registry")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_metrics_endpoint_serves_prometheus_text() {
        let state = test_state();
        state.metrics.orders_placed.inc();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("orders_placed_total"));
    }
}
