use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 STATE SALES DASHBOARD
        // ========================================
        .route(
            "/api/d400/filter_options",
            get(handlers::d400_state_sales::get_filter_options),
        )
        .route(
            "/api/d400/state_sales",
            get(handlers::d400_state_sales::get_state_sales),
        )
}
