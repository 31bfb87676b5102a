// src/services/inventory_service.rs

use std::cmp::Ordering;

use crate::{
    models::inventory::InventoryItem,
    models::modes::{InventoryFilter, InventorySort},
    services::filter_sort::{self, Pipeline},
};

// --- Predicados ---

// 1. Categoria: todos / estoque baixo (efetivo) / status ACTIVE
pub fn category_predicate(filter: InventoryFilter) -> impl Fn(&InventoryItem) -> bool {
    move |item| match filter {
        InventoryFilter::All => true,
        InventoryFilter::LowStock => item.low_stock(),
        InventoryFilter::Active => item.is_active(),
    }
}

// 2. Busca livre: substring no nome, sem diferenciar maiúsculas.
// Busca vazia deixa tudo passar.
pub fn search_predicate(query: &str) -> impl Fn(&InventoryItem) -> bool {
    let needle = query.trim().to_lowercase();
    move |item| filter_sort::contains_lowercase(&item.name, &needle)
}

// --- Ordenação ---

pub fn comparator(sort: InventorySort) -> fn(&InventoryItem, &InventoryItem) -> Ordering {
    match sort {
        InventorySort::Name => {
            |a: &InventoryItem, b: &InventoryItem| filter_sort::cmp_case_insensitive(&a.name, &b.name)
        }
        InventorySort::StockAsc => {
            |a: &InventoryItem, b: &InventoryItem| a.stock_level.cmp(&b.stock_level)
        }
        InventorySort::StockDesc => {
            |a: &InventoryItem, b: &InventoryItem| b.stock_level.cmp(&a.stock_level)
        }
    }
}

/// Listagem de estoque: categoria AND busca, depois ordenação.
///
/// Os itens devolvidos saem com `isLowStock` preenchido (a flag da fonte é
/// mantida; só os que vieram sem flag recebem o valor recalculado).
pub fn view(
    items: &[InventoryItem],
    filter: InventoryFilter,
    sort: InventorySort,
    query: &str,
) -> Vec<InventoryItem> {
    let out: Vec<InventoryItem> = Pipeline::new()
        .filter(category_predicate(filter))
        .filter(search_predicate(query))
        .sort_by(comparator(sort))
        .run(items)
        .into_iter()
        .map(InventoryItem::with_derived_low_stock)
        .collect();

    tracing::debug!(
        received = items.len(),
        shown = out.len(),
        %filter,
        %sort,
        query,
        "Lista de estoque montada"
    );
    out
}

pub fn low_stock_count(items: &[InventoryItem]) -> usize {
    items.iter().filter(|item| item.low_stock()).count()
}
