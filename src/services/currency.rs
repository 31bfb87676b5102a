// src/services/currency.rs

// Formatador numérico/monetário. Nunca falha: lixo vindo da fonte aparece
// "feio mas visível" na tela em vez de derrubar quem chamou.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::money::RawAmount;

/// Texto -> Decimal. Aceita espaços nas pontas e notação científica ("1e3").
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Duas casas decimais, arredondando o meio para longe do zero (2.345 -> "2.35").
pub fn format_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        // Evita "-0.00"
        rounded.set_sign_positive(true);
    }
    // Perto de Decimal::MAX não há dígitos sobrando para a escala 2
    match rounded.scale() {
        0 => format!("{rounded}.00"),
        1 => format!("{rounded}0"),
        _ => rounded.to_string(),
    }
}

/// Soma de valores monetários. Estouro satura em `Decimal::MAX`/`MIN`
/// (com aviso no log) em vez de entrar em pânico.
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    let mut overflowed = 0usize;
    let total = amounts.into_iter().fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).unwrap_or_else(|| {
            overflowed += 1;
            acc.saturating_add(amount)
        })
    });
    if overflowed > 0 {
        tracing::warn!(overflowed, "⚠️ Soma monetária estourou a faixa do Decimal; valor saturado");
    }
    total
}

/// `formatCurrency`:
/// - ausente -> "0.00"
/// - número (ou texto numérico) -> duas casas
/// - texto não numérico -> o próprio texto, inalterado
pub fn format_currency(value: Option<&RawAmount>) -> String {
    match value {
        None => "0.00".to_string(),
        Some(RawAmount::Text(text)) => parse_amount(text)
            .map(format_decimal)
            .unwrap_or_else(|| text.clone()),
        Some(RawAmount::Integer(i)) => format_decimal(Decimal::from(*i)),
        // NaN/infinito ou fora da faixa do Decimal: deixa o f64 se virar
        Some(RawAmount::Number(f)) => Decimal::from_f64(*f)
            .map(format_decimal)
            .unwrap_or_else(|| format!("{f:.2}")),
    }
}
