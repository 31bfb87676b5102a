// src/models/inventory.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::lenient;
use crate::services::stock_monitor;

// --- Item de Estoque ---
// O `isLowStock` pode vir pronto da fonte. Se vier, ele manda na
// filtragem/exibição; se não vier, é recalculado pelo monitor de estoque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "sku-001")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "Farinha de Trigo")]
    pub name: String,

    #[serde(default, alias = "stock_level", deserialize_with = "lenient::unsigned")]
    pub stock_level: u32,

    #[serde(default, alias = "minimum_stock", deserialize_with = "lenient::unsigned")]
    pub minimum_stock: u32,

    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "kg")]
    pub unit: String,

    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "ACTIVE")]
    pub status: String,

    #[serde(default, alias = "is_low_stock", deserialize_with = "lenient::flag")]
    pub is_low_stock: Option<bool>,
}

impl InventoryItem {
    /// Estoque baixo "efetivo": a flag da fonte, se existir; senão o recálculo.
    pub fn low_stock(&self) -> bool {
        self.is_low_stock
            .unwrap_or_else(|| stock_monitor::is_low_stock(self.stock_level, self.minimum_stock))
    }

    /// A flag da fonte (se houver) bate com o recálculo?
    pub fn low_stock_flag_agrees(&self) -> bool {
        match self.is_low_stock {
            Some(flag) => flag == stock_monitor::is_low_stock(self.stock_level, self.minimum_stock),
            None => true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("ACTIVE")
    }

    /// Preenche `isLowStock` quando a fonte não mandou. Nunca sobrescreve.
    pub fn with_derived_low_stock(mut self) -> Self {
        if self.is_low_stock.is_none() {
            self.is_low_stock =
                Some(stock_monitor::is_low_stock(self.stock_level, self.minimum_stock));
        }
        self
    }
}
