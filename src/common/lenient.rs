// src/common/lenient.rs

// Desserializadores tolerantes para os registros que vêm da fonte de dados.
// A fonte manda campos ausentes, nulos ou com o tipo "errado" (número como
// texto e vice-versa). Aqui cada campo cai no seu valor padrão em vez de
// derrubar a requisição inteira.
//
// Uso: `#[serde(default, deserialize_with = "lenient::decimal")]`

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::money::RawAmount;
use crate::models::payout::PayoutStatus;
use crate::services::currency::parse_amount;

/// Número ou texto numérico -> `Decimal`. Ausente ou inválido vira zero.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => parse_amount(&n.to_string()),
        Value::String(s) => parse_amount(s),
        _ => None,
    };
    Ok(parsed.unwrap_or(Decimal::ZERO))
}

/// Destinos aceitos por [`unsigned`].
pub trait UnsignedField: TryFrom<u64> + Default {
    const MAX: Self;
}

impl UnsignedField for u32 {
    const MAX: Self = u32::MAX;
}

impl UnsignedField for u64 {
    const MAX: Self = u64::MAX;
}

/// Inteiro sem sinal. Negativo, ausente ou inválido vira zero; acima da
/// faixa do tipo destino satura em `T::MAX`.
pub fn unsigned<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: UnsignedField,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match as_u64(&value) {
        Some(n) => T::try_from(n).unwrap_or(T::MAX),
        None => T::default(),
    })
}

/// Texto. Números são convertidos para string; nulo vira "".
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Texto opcional; string vazia conta como ausente.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = text(deserializer)?;
    Ok(if value.trim().is_empty() { None } else { Some(value) })
}

/// Flag booleana enviada pela fonte (`true`, `"true"`, `1`...).
/// Qualquer outra coisa é tratada como "não informado".
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Data/hora. Aceita RFC 3339, `YYYY-MM-DD HH:MM:SS` (assumido UTC),
/// `YYYY-MM-DD` (meia-noite UTC) ou epoch em milissegundos.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}

/// Valor monetário cru. Tipos que não são número nem texto viram ausente.
pub fn raw_amount<'de, D>(deserializer: D) -> Result<Option<RawAmount>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(RawAmount::Integer(i)),
            None => n.as_f64().map(RawAmount::Number),
        },
        Value::String(s) => Some(RawAmount::Text(s)),
        _ => None,
    })
}

/// Status do repasse, sem diferenciar maiúsculas. Desconhecido vira `None`.
pub fn payout_status<'de, D>(deserializer: D) -> Result<Option<PayoutStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.trim().parse::<PayoutStatus>().ok()))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
        }
        _ => None,
    }
}
