// src/models/dashboard.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::lenient;
use crate::models::money::RawAmount;

// 1. Resumo do painel, já agregado pelo servidor.
// O núcleo NÃO recalcula nada aqui: só repassa os inteiros e formata o dinheiro.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, alias = "total_orders", deserialize_with = "lenient::unsigned")]
    pub total_orders: u64,
    #[serde(default, alias = "completed_orders", deserialize_with = "lenient::unsigned")]
    pub completed_orders: u64,
    #[serde(default, alias = "pending_orders", deserialize_with = "lenient::unsigned")]
    pub pending_orders: u64,

    #[serde(default, alias = "total_revenue", deserialize_with = "lenient::raw_amount")]
    pub total_revenue: Option<RawAmount>,
    #[serde(default, alias = "avg_order_value", deserialize_with = "lenient::raw_amount")]
    pub avg_order_value: Option<RawAmount>,

    #[serde(default, alias = "total_products", deserialize_with = "lenient::unsigned")]
    pub total_products: u64,
    #[serde(default, alias = "active_products", deserialize_with = "lenient::unsigned")]
    pub active_products: u64,
}

// 2. O mesmo resumo, pronto para os cards do topo
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryView {
    pub total_orders: u64,
    pub completed_orders: u64,
    pub pending_orders: u64,
    #[schema(example = "1500.50")]
    pub total_revenue: String,
    #[schema(example = "75.03")]
    pub avg_order_value: String,
    pub total_products: u64,
    pub active_products: u64,
}
