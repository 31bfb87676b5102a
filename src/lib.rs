//src/lib.rs

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

// Monta o router completo. Fica aqui (e não no main) para os testes de
// ponta a ponta usarem exatamente as mesmas rotas.
pub fn build_router(app_state: AppState) -> Router {
    let payout_routes = Router::new()
        .route("/view", post(handlers::payouts::view_payouts));

    let inventory_routes = Router::new()
        .route("/view", post(handlers::inventory::view_inventory))
        .route("/stock-status", post(handlers::inventory::stock_status))
        .route("/reorder", post(handlers::inventory::reorder_suggestions));

    let analytics_routes = Router::new()
        .route("/breakdown", post(handlers::analytics::breakdown))
        .route("/rollup", post(handlers::analytics::rollup))
        .route("/top-products", post(handlers::analytics::top_products))
        .route("/summary", post(handlers::analytics::summary));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/payouts", payout_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/analytics", analytics_routes)
        .with_state(app_state)
}
