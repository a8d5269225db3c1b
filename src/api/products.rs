use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::product::{ProductDraft, ProductPatch};

use super::{ApiError, AppState};

// ============================================================================
// Product Routes
// ============================================================================

pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["list_products"])
        .inc();

    let products = state.products.list().await?;
    Ok(HttpResponse::Ok().json(products))
}

pub async fn get(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["get_product"])
        .inc();

    let product = state.products.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<ProductDraft>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["create_product"])
        .inc();

    let product = state.products.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({
        "message": "New product added",
        "product": product
    })))
}

pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProductPatch>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["update_product"])
        .inc();

    let product = state
        .products
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Product updated successfully",
        "product": product
    })))
}

pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state
        .metrics
        .requests_total
        .with_label_values(&["delete_product"])
        .inc();

    state.products.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Product deleted successfully"
    })))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::api::{routes, test_state};

    #[actix_web::test]
    async fn test_create_and_get_product() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "Widget", "price": 9.99 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::get().uri("/products/1").to_request();
        let product: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(product["name"], "Widget");
        assert_eq!(product["price"], 9.99);
    }

    #[actix_web::test]
    async fn test_negative_price_is_rejected_with_field_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "Widget", "price": -2.5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["price"], "must be a non-negative number");
    }

    #[actix_web::test]
    async fn test_partial_update_keeps_missing_fields() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "Widget", "price": 9.99 }))
            .to_request();
        test::call_service(&app, req).await;

        // Only the price is supplied; the name must survive
        let req = test::TestRequest::put()
            .uri("/products/1")
            .set_json(json!({ "price": 19.99 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["product"]["name"], "Widget");
        assert_eq!(body["product"]["price"], 19.99);
    }

    #[actix_web::test]
    async fn test_update_missing_product_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/products/42")
            .set_json(json!({ "price": 1.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_delete_product() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({ "name": "Widget", "price": 9.99 }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/products/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get().uri("/products/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
