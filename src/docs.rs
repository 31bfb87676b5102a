// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Payouts ---
        handlers::payouts::view_payouts,

        // --- INVENTORY ---
        handlers::inventory::view_inventory,
        handlers::inventory::stock_status,
        handlers::inventory::reorder_suggestions,

        // --- Analytics ---
        handlers::analytics::breakdown,
        handlers::analytics::rollup,
        handlers::analytics::top_products,
        handlers::analytics::summary,
    ),
    components(
        schemas(
            // --- Modos ---
            models::modes::PayoutStatusFilter,
            models::modes::PayoutSort,
            models::modes::InventoryFilter,
            models::modes::InventorySort,
            models::modes::Timeframe,
            models::modes::BucketOrder,

            // --- Registros da fonte ---
            models::money::RawAmount,
            models::payout::PayoutStatus,
            models::payout::Payout,
            models::inventory::InventoryItem,
            models::analytics::RawBucket,
            models::analytics::TopProductEntry,
            models::analytics::SaleRecord,
            models::dashboard::DashboardSummary,

            // --- Saídas ---
            models::analytics::BucketRow,
            models::analytics::BreakdownTotals,
            models::analytics::RankedProduct,
            models::dashboard::DashboardSummaryView,
            services::stock_monitor::StockStatus,
            services::stock_monitor::ReorderSuggestion,

            // --- Payloads ---
            handlers::payouts::PayoutViewPayload,
            handlers::payouts::PayoutViewResponse,
            handlers::inventory::InventoryViewPayload,
            handlers::inventory::InventoryViewResponse,
            handlers::inventory::StockStatusPayload,
            handlers::inventory::ReorderPayload,
            handlers::analytics::BreakdownPayload,
            handlers::analytics::BreakdownResponse,
            handlers::analytics::RollupPayload,
            handlers::analytics::RollupResponse,
            handlers::analytics::TopProductsPayload,
        )
    ),
    tags(
        (name = "Payouts", description = "Histórico de Repasses"),
        (name = "Inventory", description = "Listagem de Estoque e Reposição"),
        (name = "Analytics", description = "Quebras por Período, Top Produtos e Resumo do Painel")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/payouts/view",
            "/api/inventory/view",
            "/api/inventory/stock-status",
            "/api/inventory/reorder",
            "/api/analytics/breakdown",
            "/api/analytics/rollup",
            "/api/analytics/top-products",
            "/api/analytics/summary",
        ] {
            assert!(doc.paths.paths.contains_key(path), "rota sem documentação: {path}");
        }
    }
}
