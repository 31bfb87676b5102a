// src/services/analytics_service.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::{
    models::analytics::{
        BreakdownTotals, BucketMap, BucketRow, RankedProduct, RawBucket, SaleRecord, TopProductEntry,
    },
    models::dashboard::{DashboardSummary, DashboardSummaryView},
    models::modes::{BucketOrder, Timeframe},
    models::money::RawAmount,
    services::currency::{format_currency, format_decimal, parse_amount, saturating_sum},
};

// Quantos buckets o gráfico de tendência mostra (na ordem do servidor)
pub const CHART_BUCKET_CAP: usize = 12;

// Tamanho da barra do gráfico: clamp(count * 5, 10, 150).
// Política de apresentação; os números precisam ser reproduzíveis nos
// testes de regressão visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarScale {
    pub scale_factor: f64,
    pub min_bar_size: f64,
    pub max_bar_size: f64,
}

impl BarScale {
    pub const DEFAULT: BarScale = BarScale {
        scale_factor: 5.0,
        min_bar_size: 10.0,
        max_bar_size: 150.0,
    };

    pub fn size(&self, count: u64) -> f64 {
        (count as f64 * self.scale_factor).clamp(self.min_bar_size, self.max_bar_size)
    }
}

impl Default for BarScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn to_row(label: &str, bucket: &RawBucket) -> BucketRow {
    BucketRow {
        label: label.to_string(),
        count: bucket.count,
        total: bucket
            .total
            .as_ref()
            .map(RawAmount::as_text)
            .unwrap_or_else(|| "0".to_string()),
        total_display: format_currency(bucket.total.as_ref()),
        bar_size: BarScale::DEFAULT.size(bucket.count),
    }
}

/// Quebra por período.
///
/// - `Chronological`: ordena por label crescente (mais antigo primeiro).
///   Os labels são `YYYY-MM`, `YYYY-MM-DD` ou `YYYY-Www`, então ordem
///   lexical == ordem cronológica. Empates mantêm a ordem da fonte.
/// - `AsSupplied`: ordem da fonte, cortada nos primeiros `CHART_BUCKET_CAP`.
pub fn breakdown(buckets: &BucketMap, order: BucketOrder) -> Vec<BucketRow> {
    let rows: Vec<BucketRow> = match order {
        BucketOrder::Chronological => {
            let mut rows: Vec<BucketRow> =
                buckets.iter().map(|(label, bucket)| to_row(label, bucket)).collect();
            rows.sort_by(|a, b| a.label.cmp(&b.label));
            rows
        }
        BucketOrder::AsSupplied => buckets
            .iter()
            .take(CHART_BUCKET_CAP)
            .map(|(label, bucket)| to_row(label, bucket))
            .collect(),
    };

    tracing::debug!(received = buckets.len(), shown = rows.len(), %order, "Quebra por período montada");
    rows
}

/// Totais e médias de uma série de linhas. Denominador zero -> "0.00".
pub fn totals(rows: &[BucketRow]) -> BreakdownTotals {
    let total_orders = rows.iter().fold(0u64, |acc, row| acc.saturating_add(row.count));
    let total_revenue =
        saturating_sum(rows.iter().map(|row| parse_amount(&row.total).unwrap_or(Decimal::ZERO)));

    let avg_order_value = if total_orders > 0 {
        total_revenue / Decimal::from(total_orders)
    } else {
        Decimal::ZERO
    };
    let avg_revenue_per_bucket = if rows.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(rows.len() as u64)
    };

    BreakdownTotals {
        buckets: rows.len(),
        total_orders,
        total_revenue: format_decimal(total_revenue),
        avg_order_value: format_decimal(avg_order_value),
        avg_revenue_per_bucket: format_decimal(avg_revenue_per_bucket),
    }
}

/// Top N. A entrada já vem ranqueada pela fonte; o rank é só a posição
/// (1-based). Para ranquear por pedidos ou receita, ordene antes com o
/// motor de filtro/ordenação.
pub fn top_n(products: &[TopProductEntry], n: usize) -> Vec<RankedProduct> {
    products
        .iter()
        .take(n)
        .enumerate()
        .map(|(index, product)| RankedProduct {
            rank: index + 1,
            name: product.name.clone(),
            orders: product.orders,
            revenue: product
                .revenue
                .as_ref()
                .map(RawAmount::as_text)
                .unwrap_or_else(|| "0".to_string()),
            revenue_display: format_currency(product.revenue.as_ref()),
            stock: product.stock,
        })
        .collect()
}

/// Resumo do painel pronto para exibição. Inteiros passam direto; todo
/// campo monetário passa pelo formatador. A entrada não é alterada.
pub fn summary(raw: &DashboardSummary) -> DashboardSummaryView {
    DashboardSummaryView {
        total_orders: raw.total_orders,
        completed_orders: raw.completed_orders,
        pending_orders: raw.pending_orders,
        total_revenue: format_currency(raw.total_revenue.as_ref()),
        avg_order_value: format_currency(raw.avg_order_value.as_ref()),
        total_products: raw.total_products,
        active_products: raw.active_products,
    }
}

/// Label do bucket para um instante, conforme o período.
pub fn bucket_label(at: DateTime<Utc>, timeframe: Timeframe) -> String {
    match timeframe {
        Timeframe::Daily => at.format("%Y-%m-%d").to_string(),
        Timeframe::Weekly => {
            let week = at.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        Timeframe::Monthly => at.format("%Y-%m").to_string(),
    }
}

/// Agrupa vendas cruas em buckets (contagem + soma), em ordem cronológica.
/// Venda sem data não tem bucket e fica de fora.
pub fn rollup(sales: &[SaleRecord], timeframe: Timeframe) -> BucketMap {
    let mut grouped: BTreeMap<String, (u64, Vec<Decimal>)> = BTreeMap::new();
    let mut skipped = 0usize;

    for sale in sales {
        let Some(at) = sale.created_at else {
            skipped += 1;
            continue;
        };
        let entry = grouped.entry(bucket_label(at, timeframe)).or_default();
        entry.0 += 1;
        entry.1.push(sale.total);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Vendas sem data ignoradas no rollup");
    }

    grouped
        .into_iter()
        .map(|(label, (count, totals))| {
            let total = saturating_sum(totals);
            let bucket = RawBucket {
                count,
                total: Some(RawAmount::Text(total.normalize().to_string())),
            };
            (label, bucket)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bucket(count: u64, total: &str) -> RawBucket {
        RawBucket { count, total: Some(total.into()) }
    }

    fn labels(rows: &[BucketRow]) -> Vec<&str> {
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn monthly_breakdown_is_chronological() {
        let buckets: BucketMap =
            [("2024-03", bucket(5, "100")), ("2024-01", bucket(2, "40"))].into_iter().collect();
        let rows = breakdown(&buckets, BucketOrder::Chronological);
        assert_eq!(labels(&rows), ["2024-01", "2024-03"]);
        assert_eq!(rows[1].total, "100");
        assert_eq!(rows[1].total_display, "100.00");
    }

    #[test]
    fn chart_series_keeps_source_order_and_caps_at_twelve() {
        let buckets: BucketMap = (1..=15)
            .rev()
            .map(|m| (format!("b{m:02}"), bucket(m, "1")))
            .collect();
        let rows = breakdown(&buckets, BucketOrder::AsSupplied);
        assert_eq!(rows.len(), CHART_BUCKET_CAP);
        assert_eq!(rows[0].label, "b15");
        assert_eq!(rows[11].label, "b04");
    }

    #[test]
    fn missing_bucket_fields_default() {
        let buckets: BucketMap =
            serde_json::from_str(r#"{"2024-02": {}, "2024-01": null, "2024-03": {"count": "4", "total": 12.5}}"#)
                .unwrap();
        let rows = breakdown(&buckets, BucketOrder::Chronological);
        assert_eq!(labels(&rows), ["2024-01", "2024-02", "2024-03"]);
        assert_eq!(rows[0].count, 0);
        assert_eq!(rows[0].total, "0");
        assert_eq!(rows[0].total_display, "0.00");
        assert_eq!(rows[2].count, 4);
        assert_eq!(rows[2].total_display, "12.50");
    }

    #[test]
    fn source_key_order_survives_deserialization() {
        let buckets: BucketMap =
            serde_json::from_str(r#"{"2024-05": {"count": 1}, "2024-01": {"count": 2}, "2024-03": {"count": 3}}"#)
                .unwrap();
        let rows = breakdown(&buckets, BucketOrder::AsSupplied);
        assert_eq!(labels(&rows), ["2024-05", "2024-01", "2024-03"]);
    }

    #[test]
    fn bar_sizes_are_clamped() {
        let scale = BarScale::default();
        assert_eq!(scale.size(0), 10.0);
        assert_eq!(scale.size(1), 10.0);
        assert_eq!(scale.size(2), 10.0);
        assert_eq!(scale.size(3), 15.0);
        assert_eq!(scale.size(30), 150.0);
        assert_eq!(scale.size(1000), 150.0);
    }

    #[test]
    fn totals_and_averages() {
        let buckets: BucketMap =
            [("2024-01", bucket(2, "40")), ("2024-02", bucket(3, "60.5")), ("2024-03", bucket(0, "lixo"))]
                .into_iter()
                .collect();
        let t = totals(&breakdown(&buckets, BucketOrder::Chronological));
        assert_eq!(t.buckets, 3);
        assert_eq!(t.total_orders, 5);
        assert_eq!(t.total_revenue, "100.50");
        assert_eq!(t.avg_order_value, "20.10");
        assert_eq!(t.avg_revenue_per_bucket, "33.50");
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        let t = totals(&[]);
        assert_eq!(t.total_orders, 0);
        assert_eq!(t.avg_order_value, "0.00");
        assert_eq!(t.avg_revenue_per_bucket, "0.00");
    }

    #[test]
    fn top_n_rank_is_positional() {
        let products: Vec<TopProductEntry> = serde_json::from_str(
            r#"[
                {"name": "Pão", "orders": 3, "revenue": "900", "stock": 4},
                {"name": "Bolo", "orders": 10, "revenue": 120.5},
                {"name": "Café"}
            ]"#,
        )
        .unwrap();

        let ranked = top_n(&products, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!((ranked[0].rank, ranked[0].name.as_str()), (1, "Pão"));
        // Não reordena por pedidos: Bolo tem mais pedidos e continua em 2º
        assert_eq!((ranked[1].rank, ranked[1].name.as_str()), (2, "Bolo"));
        assert_eq!(ranked[1].revenue_display, "120.50");

        let all = top_n(&products, 10);
        assert_eq!(all[2].revenue, "0");
        assert_eq!(all[2].revenue_display, "0.00");
        assert!(top_n(&products, 0).is_empty());
    }

    #[test]
    fn summary_formats_money_and_passes_integers() {
        let raw: DashboardSummary = serde_json::from_str(
            r#"{"totalOrders": 12, "completed_orders": 9, "pendingOrders": "3",
                "totalRevenue": "1500.5", "avgOrderValue": null,
                "totalProducts": 40, "activeProducts": 38}"#,
        )
        .unwrap();
        let before = raw.clone();

        let view = summary(&raw);
        assert_eq!(view.total_orders, 12);
        assert_eq!(view.completed_orders, 9);
        assert_eq!(view.pending_orders, 3);
        assert_eq!(view.total_revenue, "1500.50");
        assert_eq!(view.avg_order_value, "0.00");
        assert_eq!(view.active_products, 38);
        assert_eq!(raw, before);
    }

    #[test]
    fn labels_per_timeframe() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
        assert_eq!(bucket_label(at, Timeframe::Daily), "2024-01-01");
        assert_eq!(bucket_label(at, Timeframe::Weekly), "2024-W01");
        assert_eq!(bucket_label(at, Timeframe::Monthly), "2024-01");

        // 31/12/2024 cai na semana 1 de 2025 (ISO)
        let new_year = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(bucket_label(new_year, Timeframe::Weekly), "2025-W01");
    }

    #[test]
    fn rollup_groups_and_orders_chronologically() {
        let sales: Vec<SaleRecord> = serde_json::from_str(
            r#"[
                {"createdAt": "2024-03-10T10:00:00Z", "total": "10.00"},
                {"createdAt": "2024-01-05T10:00:00Z", "total": 5},
                {"createdAt": "2024-03-02T09:00:00Z", "total": "2.50"},
                {"total": "999"}
            ]"#,
        )
        .unwrap();

        let rows = breakdown(&rollup(&sales, Timeframe::Monthly), BucketOrder::AsSupplied);
        assert_eq!(labels(&rows), ["2024-01", "2024-03"]);
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].count, 2);
        assert_eq!(rows[1].total, "12.5");
        assert_eq!(rows[1].total_display, "12.50");

        let daily = rollup(&sales, Timeframe::Daily);
        assert_eq!(daily.len(), 3);
    }

    #[test]
    fn totals_saturate_on_huge_revenue() {
        let max = Decimal::MAX.to_string();
        let buckets: BucketMap =
            [("2024-01", bucket(1, &max)), ("2024-02", bucket(1, &max))].into_iter().collect();

        let t = totals(&breakdown(&buckets, BucketOrder::Chronological));
        assert_eq!(t.total_orders, 2);
        assert_eq!(t.total_revenue, format!("{max}.00"));
    }

    #[test]
    fn total_orders_saturate() {
        let buckets: BucketMap =
            [("2024-01", bucket(u64::MAX, "0")), ("2024-02", bucket(1, "0"))].into_iter().collect();
        assert_eq!(totals(&breakdown(&buckets, BucketOrder::Chronological)).total_orders, u64::MAX);
    }

    #[test]
    fn rollup_saturates_on_huge_sales() {
        let max = Decimal::MAX.to_string();
        let sales = vec![
            SaleRecord { created_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()), total: Decimal::MAX },
            SaleRecord { created_at: Some(Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap()), total: Decimal::MAX },
        ];

        let rows = breakdown(&rollup(&sales, Timeframe::Monthly), BucketOrder::Chronological);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].total, max);
    }
}
