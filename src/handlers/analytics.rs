// src/handlers/analytics.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::analytics::{BreakdownTotals, BucketMap, BucketRow, RankedProduct, SaleRecord, TopProductEntry},
    models::dashboard::{DashboardSummary, DashboardSummaryView},
    models::modes::{parse_mode, BucketOrder, Timeframe},
    services::analytics_service,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub order: BucketOrder,
    pub rows: Vec<BucketRow>,
    pub totals: BreakdownTotals,
}

// ---
// Payload: BreakdownPayload
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownPayload {
    // Objeto label -> {count, total}; a ordem das chaves é preservada
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"2024-03": {"count": 5, "total": "100"}}))]
    pub buckets: BucketMap,

    // CHRONOLOGICAL (tabela mensal, padrão) | AS_SUPPLIED (gráfico, máx. 12)
    #[schema(example = "CHRONOLOGICAL")]
    pub order: Option<String>,
}

// POST /api/analytics/breakdown
#[utoipa::path(
    post,
    path = "/api/analytics/breakdown",
    tag = "Analytics",
    request_body = BreakdownPayload,
    responses(
        (status = 200, description = "Buckets ordenados com totais e médias", body = BreakdownResponse),
        (status = 400, description = "Política de ordem não suportada"),
        (status = 413, description = "Buckets demais numa única requisição")
    )
)]
pub async fn breakdown(
    State(app_state): State<AppState>,
    Json(payload): Json<BreakdownPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.check_page_size(payload.buckets.len())?;

    let order = parse_mode::<BucketOrder>(payload.order.as_deref())?;
    let rows = analytics_service::breakdown(&payload.buckets, order);
    let totals = analytics_service::totals(&rows);

    Ok((StatusCode::OK, Json(BreakdownResponse { order, rows, totals })))
}

// ---
// Payload: RollupPayload
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RollupPayload {
    #[serde(default)]
    pub sales: Vec<SaleRecord>,

    // DAILY | WEEKLY | MONTHLY (padrão: MONTHLY)
    #[schema(example = "MONTHLY")]
    pub timeframe: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RollupResponse {
    pub timeframe: Timeframe,
    pub rows: Vec<BucketRow>,
    pub totals: BreakdownTotals,
}

// POST /api/analytics/rollup
#[utoipa::path(
    post,
    path = "/api/analytics/rollup",
    tag = "Analytics",
    request_body = RollupPayload,
    responses(
        (status = 200, description = "Vendas agrupadas por dia, semana ou mês", body = RollupResponse),
        (status = 400, description = "Período não suportado"),
        (status = 413, description = "Registros demais numa única requisição")
    )
)]
pub async fn rollup(
    State(app_state): State<AppState>,
    Json(payload): Json<RollupPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.check_page_size(payload.sales.len())?;

    let timeframe = parse_mode::<Timeframe>(payload.timeframe.as_deref())?;
    let buckets = analytics_service::rollup(&payload.sales, timeframe);
    let rows = analytics_service::breakdown(&buckets, BucketOrder::Chronological);
    let totals = analytics_service::totals(&rows);

    Ok((StatusCode::OK, Json(RollupResponse { timeframe, rows, totals })))
}

// ---
// Payload: TopProductsPayload
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductsPayload {
    // Já ranqueados pela fonte (melhor primeiro)
    #[serde(default)]
    pub products: Vec<TopProductEntry>,

    // Sem `n`, usa TOP_PRODUCTS_LIMIT da configuração
    #[validate(range(min = 1, max = 100, message = "O 'n' deve estar entre 1 e 100."))]
    pub n: Option<usize>,
}

// POST /api/analytics/top-products
#[utoipa::path(
    post,
    path = "/api/analytics/top-products",
    tag = "Analytics",
    request_body = TopProductsPayload,
    responses(
        (status = 200, description = "Top N com rank posicional (1-based)", body = Vec<RankedProduct>),
        (status = 400, description = "N fora da faixa"),
        (status = 413, description = "Registros demais numa única requisição")
    )
)]
pub async fn top_products(
    State(app_state): State<AppState>,
    Json(payload): Json<TopProductsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    app_state.check_page_size(payload.products.len())?;

    let n = payload.n.unwrap_or(app_state.config.top_products_limit);
    let ranked = analytics_service::top_n(&payload.products, n);

    Ok((StatusCode::OK, Json(ranked)))
}

// POST /api/analytics/summary
#[utoipa::path(
    post,
    path = "/api/analytics/summary",
    tag = "Analytics",
    request_body = DashboardSummary,
    responses(
        (status = 200, description = "Resumo do painel com valores monetários formatados", body = DashboardSummaryView)
    )
)]
pub async fn summary(Json(raw): Json<DashboardSummary>) -> impl IntoResponse {
    (StatusCode::OK, Json(analytics_service::summary(&raw)))
}
