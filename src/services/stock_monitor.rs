// src/services/stock_monitor.rs

// Monitor de limite de estoque. Funções puras sobre (estoque atual, mínimo).

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::inventory::InventoryItem;

/// Estoque baixo sse `stock_level < minimum_stock`. Com mínimo zero, nunca.
pub fn is_low_stock(stock_level: u32, minimum_stock: u32) -> bool {
    minimum_stock > 0 && stock_level < minimum_stock
}

/// Quanto falta para chegar no mínimo. Nunca negativo.
pub fn deficit(stock_level: u32, minimum_stock: u32) -> u32 {
    minimum_stock.saturating_sub(stock_level)
}

/// Proporção estoque/mínimo em [0, 1], para a barrinha de nível.
/// Mínimo zero -> 0 (sem divisão por zero).
pub fn stock_ratio(stock_level: u32, minimum_stock: u32) -> f64 {
    if minimum_stock == 0 {
        return 0.0;
    }
    (f64::from(stock_level) / f64::from(minimum_stock)).clamp(0.0, 1.0)
}

/// Quantidade sugerida para reposição.
///
/// Política de exibição, não um ótimo calculado: sugerimos exatamente o
/// déficit. Se um dia entrar um algoritmo de ponto de pedido (lead time,
/// demanda média...), ele substitui esta função e a troca precisa ser
/// documentada.
pub fn reorder_quantity(stock_level: u32, minimum_stock: u32) -> u32 {
    deficit(stock_level, minimum_stock)
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockStatus {
    pub stock_level: u32,
    pub minimum_stock: u32,
    pub is_low_stock: bool,
    pub deficit: u32,
    pub stock_ratio: f64,
    pub reorder_quantity: u32,
}

pub fn status(stock_level: u32, minimum_stock: u32) -> StockStatus {
    StockStatus {
        stock_level,
        minimum_stock,
        is_low_stock: is_low_stock(stock_level, minimum_stock),
        deficit: deficit(stock_level, minimum_stock),
        stock_ratio: stock_ratio(stock_level, minimum_stock),
        reorder_quantity: reorder_quantity(stock_level, minimum_stock),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSuggestion {
    pub item_id: String,
    pub name: String,
    pub unit: String,
    pub stock_level: u32,
    pub minimum_stock: u32,
    pub quantity: u32,
    pub stock_ratio: f64,
}

/// Sugestões de reposição para os itens em estoque baixo, na ordem de entrada.
///
/// "Estoque baixo" aqui é o efetivo (flag da fonte quando existir). Se a flag
/// diz baixo mas o recálculo não vê déficit, o item ainda aparece, com
/// quantidade zero, e a divergência vai para o log.
pub fn reorder_suggestions(items: &[InventoryItem]) -> Vec<ReorderSuggestion> {
    items
        .iter()
        .filter(|item| {
            if !item.low_stock_flag_agrees() {
                tracing::warn!(
                    item_id = %item.id,
                    stock_level = item.stock_level,
                    minimum_stock = item.minimum_stock,
                    "⚠️ Flag isLowStock da fonte diverge do recálculo"
                );
            }
            item.low_stock()
        })
        .map(|item| ReorderSuggestion {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit: item.unit.clone(),
            stock_level: item.stock_level,
            minimum_stock: item.minimum_stock,
            quantity: reorder_quantity(item.stock_level, item.minimum_stock),
            stock_ratio: stock_ratio(item.stock_level, item.minimum_stock),
        })
        .collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_low_stock_invariant(stock in any::<u32>(), minimum in any::<u32>()) {
            let low = is_low_stock(stock, minimum);
            if minimum > 0 {
                prop_assert_eq!(low, stock < minimum);
            } else {
                prop_assert!(!low);
            }
        }

        #[test]
        fn test_deficit_matches_clamped_difference(stock in any::<u32>(), minimum in any::<u32>()) {
            let expected = (i64::from(minimum) - i64::from(stock)).max(0);
            prop_assert_eq!(i64::from(deficit(stock, minimum)), expected);
        }

        #[test]
        fn test_ratio_stays_in_unit_interval(stock in any::<u32>(), minimum in any::<u32>()) {
            let ratio = stock_ratio(stock, minimum);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }

        #[test]
        fn test_deficit_positive_iff_low_stock(stock in any::<u32>(), minimum in any::<u32>()) {
            prop_assert_eq!(deficit(stock, minimum) > 0, is_low_stock(stock, minimum));
        }
    }
}
