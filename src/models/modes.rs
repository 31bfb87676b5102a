// src/models/modes.rs

// Enumerações fechadas que a tela (chamador) escolhe. Cada eixo tem
// exatamente UM modo padrão, usado só quando nenhum modo foi informado.
// Texto desconhecido é erro de integração (AppError::UnsupportedMode).

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::common::error::AppError;

pub trait SelectableMode: std::str::FromStr + Default {
    // Nome do eixo, usado na mensagem de erro
    const AXIS: &'static str;
}

/// `None` ou texto em branco -> modo padrão. Qualquer outro texto precisa
/// casar com um dos modos (sem diferenciar maiúsculas).
pub fn parse_mode<M: SelectableMode>(raw: Option<&str>) -> Result<M, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(M::default()),
        Some(value) => value.parse::<M>().map_err(|_| AppError::UnsupportedMode {
            axis: M::AXIS,
            value: value.to_string(),
        }),
    }
}

// --- Repasses ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
pub enum PayoutStatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Failed,
}

impl SelectableMode for PayoutStatusFilter {
    const AXIS: &'static str = "payoutStatus";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
pub enum PayoutSort {
    #[default]
    Recent,  // createdAt desc ("mais recentes primeiro")
    Oldest,  // createdAt asc
    Highest, // amount desc
    Lowest,  // amount asc
}

impl SelectableMode for PayoutSort {
    const AXIS: &'static str = "payoutSort";
}

// --- Estoque ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryFilter {
    #[default]
    #[strum(serialize = "ALL")]
    All,
    #[strum(serialize = "LOW_STOCK")]
    LowStock,
    #[strum(serialize = "ACTIVE")]
    Active,
}

impl SelectableMode for InventoryFilter {
    const AXIS: &'static str = "inventoryFilter";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventorySort {
    #[default]
    #[strum(serialize = "NAME")]
    Name,
    #[strum(serialize = "STOCK_ASC")]
    StockAsc,
    #[strum(serialize = "STOCK_DESC")]
    StockDesc,
}

impl SelectableMode for InventorySort {
    const AXIS: &'static str = "inventorySort";
}

// --- Analytics ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timeframe {
    #[strum(serialize = "DAILY")]
    Daily,
    #[strum(serialize = "WEEKLY")]
    Weekly,
    #[default]
    #[strum(serialize = "MONTHLY")]
    Monthly,
}

impl SelectableMode for Timeframe {
    const AXIS: &'static str = "timeframe";
}

// Política de ordem dos buckets. Cada ponto de uso escolhe UMA e não mistura:
// a tabela mensal usa CHRONOLOGICAL, o gráfico de tendência usa AS_SUPPLIED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, ToSchema)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BucketOrder {
    #[default]
    #[strum(serialize = "CHRONOLOGICAL")]
    Chronological,
    // Ordem do servidor, limitada aos primeiros N buckets, sem reordenar
    #[strum(serialize = "AS_SUPPLIED")]
    AsSupplied,
}

impl SelectableMode for BucketOrder {
    const AXIS: &'static str = "bucketOrder";
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn missing_mode_uses_the_single_default() {
        assert_eq!(parse_mode::<PayoutStatusFilter>(None).unwrap(), PayoutStatusFilter::All);
        assert_eq!(parse_mode::<PayoutSort>(None).unwrap(), PayoutSort::Recent);
        assert_eq!(parse_mode::<InventoryFilter>(None).unwrap(), InventoryFilter::All);
        assert_eq!(parse_mode::<InventorySort>(None).unwrap(), InventorySort::Name);
        assert_eq!(parse_mode::<Timeframe>(Some("  ")).unwrap(), Timeframe::Monthly);
        assert_eq!(parse_mode::<BucketOrder>(None).unwrap(), BucketOrder::Chronological);
    }

    #[test]
    fn unknown_mode_fails_fast() {
        let err = parse_mode::<PayoutSort>(Some("Cheapest")).unwrap_err();
        match err {
            AppError::UnsupportedMode { axis, value } => {
                assert_eq!(axis, "payoutSort");
                assert_eq!(value, "Cheapest");
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!(parse_mode::<InventoryFilter>(Some("low_stock")).unwrap(), InventoryFilter::LowStock);
        assert_eq!(parse_mode::<PayoutStatusFilter>(Some("FAILED")).unwrap(), PayoutStatusFilter::Failed);
        assert_eq!(parse_mode::<InventorySort>(Some("Stock_Desc")).unwrap(), InventorySort::StockDesc);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for sort in InventorySort::iter() {
            assert_eq!(parse_mode::<InventorySort>(Some(&sort.to_string())).unwrap(), sort);
        }
        for timeframe in Timeframe::iter() {
            assert_eq!(parse_mode::<Timeframe>(Some(&timeframe.to_string())).unwrap(), timeframe);
        }
    }
}
