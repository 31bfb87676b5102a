// src/models/payout.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::common::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(ascii_case_insensitive)]
pub enum PayoutStatus {
    Pending,   // Aguardando
    Completed, // Pago
    Failed,    // Falhou
}

// --- Repasse (Payout) ---
// Foto imutável vinda da fonte: buscada, filtrada/ordenada para exibição e
// descartada no próximo refresh. Qualquer campo pode faltar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    // Ausente ou inválido -> 0
    #[serde(default, deserialize_with = "lenient::decimal")]
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,

    // Status desconhecido -> None (só aparece no filtro "All")
    #[serde(default, deserialize_with = "lenient::payout_status")]
    pub status: Option<PayoutStatus>,

    // Sem data -> None, ordena como o mais antigo
    #[serde(default, alias = "created_at", deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "payment_method", deserialize_with = "lenient::text")]
    #[schema(example = "PIX")]
    pub payment_method: String,

    #[serde(default, alias = "transaction_id", deserialize_with = "lenient::optional_text")]
    pub transaction_id: Option<String>,
}
