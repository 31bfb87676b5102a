// src/handlers/payouts.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    models::modes::{parse_mode, PayoutSort, PayoutStatusFilter},
    models::payout::Payout,
    services::payout_service,
};

// ---
// Payload: PayoutViewPayload
// ---
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayoutViewPayload {
    // Registros como vieram da fonte
    #[serde(default)]
    pub payouts: Vec<Payout>,

    // All | Pending | Completed | Failed (padrão: All)
    #[schema(example = "All")]
    pub status: Option<String>,

    // Recent | Oldest | Highest | Lowest (padrão: Recent)
    #[schema(example = "Recent")]
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayoutViewResponse {
    pub status: PayoutStatusFilter,
    pub sort: PayoutSort,
    pub count: usize,
    // Lista vazia é "estado vazio" para a tela, não erro
    pub is_empty: bool,
    pub payouts: Vec<Payout>,
}

// POST /api/payouts/view
#[utoipa::path(
    post,
    path = "/api/payouts/view",
    tag = "Payouts",
    request_body = PayoutViewPayload,
    responses(
        (status = 200, description = "Histórico de repasses filtrado e ordenado", body = PayoutViewResponse),
        (status = 400, description = "Modo de filtro/ordenação não suportado"),
        (status = 413, description = "Registros demais numa única requisição")
    )
)]
pub async fn view_payouts(
    State(app_state): State<AppState>,
    Json(payload): Json<PayoutViewPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state.check_page_size(payload.payouts.len())?;

    let status = parse_mode::<PayoutStatusFilter>(payload.status.as_deref())?;
    let sort = parse_mode::<PayoutSort>(payload.sort.as_deref())?;

    let payouts = payout_service::view(&payload.payouts, status, sort);

    Ok((
        StatusCode::OK,
        Json(PayoutViewResponse {
            status,
            sort,
            count: payouts.len(),
            is_empty: payouts.is_empty(),
            payouts,
        }),
    ))
}
