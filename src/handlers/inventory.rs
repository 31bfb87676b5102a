// src/handlers/inventory.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::inventory::InventoryItem,
    models::modes::{parse_mode, InventoryFilter, InventorySort},
    services::{inventory_service, stock_monitor},
    services::stock_monitor::{ReorderSuggestion, StockStatus},
};

// ---
// Payload: InventoryViewPayload
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryViewPayload {
    #[serde(default)]
    pub items: Vec<InventoryItem>,

    // ALL | LOW_STOCK | ACTIVE (padrão: ALL)
    #[schema(example = "LOW_STOCK")]
    pub filter: Option<String>,

    // NAME | STOCK_ASC | STOCK_DESC (padrão: NAME)
    #[schema(example = "NAME")]
    pub sort: Option<String>,

    // Busca livre no nome. Vazio = sem filtro.
    #[validate(length(max = 120, message = "A busca pode ter no máximo 120 caracteres."))]
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryViewResponse {
    pub filter: InventoryFilter,
    pub sort: InventorySort,
    pub count: usize,
    pub is_empty: bool,
    // Contado sobre a lista inteira recebida, não só a filtrada
    pub low_stock_count: usize,
    pub items: Vec<InventoryItem>,
}

// POST /api/inventory/view
#[utoipa::path(
    post,
    path = "/api/inventory/view",
    tag = "Inventory",
    request_body = InventoryViewPayload,
    responses(
        (status = 200, description = "Listagem de estoque filtrada e ordenada", body = InventoryViewResponse),
        (status = 400, description = "Modo inválido ou busca longa demais"),
        (status = 413, description = "Registros demais numa única requisição")
    )
)]
pub async fn view_inventory(
    State(app_state): State<AppState>,
    Json(payload): Json<InventoryViewPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    app_state.check_page_size(payload.items.len())?;

    let filter = parse_mode::<InventoryFilter>(payload.filter.as_deref())?;
    let sort = parse_mode::<InventorySort>(payload.sort.as_deref())?;

    let items = inventory_service::view(&payload.items, filter, sort, &payload.query);

    Ok((
        StatusCode::OK,
        Json(InventoryViewResponse {
            filter,
            sort,
            count: items.len(),
            is_empty: items.is_empty(),
            low_stock_count: inventory_service::low_stock_count(&payload.items),
            items,
        }),
    ))
}

// ---
// Payload: StockStatusPayload (consulta avulsa do monitor)
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockStatusPayload {
    #[serde(default, alias = "stock_level", deserialize_with = "crate::common::lenient::unsigned")]
    pub stock_level: u32,
    #[serde(default, alias = "minimum_stock", deserialize_with = "crate::common::lenient::unsigned")]
    pub minimum_stock: u32,
}

// POST /api/inventory/stock-status
#[utoipa::path(
    post,
    path = "/api/inventory/stock-status",
    tag = "Inventory",
    request_body = StockStatusPayload,
    responses(
        (status = 200, description = "Estoque baixo, déficit, proporção e sugestão de reposição", body = StockStatus)
    )
)]
pub async fn stock_status(Json(payload): Json<StockStatusPayload>) -> impl IntoResponse {
    let status = stock_monitor::status(payload.stock_level, payload.minimum_stock);
    (StatusCode::OK, Json(status))
}

// ---
// Payload: ReorderPayload
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPayload {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

// POST /api/inventory/reorder
#[utoipa::path(
    post,
    path = "/api/inventory/reorder",
    tag = "Inventory",
    request_body = ReorderPayload,
    responses(
        (status = 200, description = "Sugestões de reposição (quantidade = déficit)", body = Vec<ReorderSuggestion>),
        (status = 413, description = "Registros demais numa única requisição")
    )
)]
pub async fn reorder_suggestions(
    State(app_state): State<AppState>,
    Json(payload): Json<ReorderPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.check_page_size(payload.items.len())?;

    let suggestions = stock_monitor::reorder_suggestions(&payload.items);
    Ok((StatusCode::OK, Json(suggestions)))
}
