// src/models/money.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Valor monetário "cru", do jeito que a fonte mandou. Pode ser inteiro,
// número com casas decimais ou texto ("1500.50"). Quem decide como exibir é
// o formatador (services::currency), nunca o modelo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RawAmount {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl RawAmount {
    // Texto original, para campos que repassam o valor sem reformatar.
    pub fn as_text(&self) -> String {
        match self {
            RawAmount::Integer(i) => i.to_string(),
            RawAmount::Number(f) => f.to_string(),
            RawAmount::Text(t) => t.clone(),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        RawAmount::Integer(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}
