// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Os serviços do núcleo são totais (nunca falham). Só chegam aqui erros de
// integração: modo desconhecido, payload inválido ou página grande demais.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Modo de filtro/ordenação que não existe na enumeração fechada.
    // Falha rápido em vez de cair silenciosamente no modo padrão.
    #[error("Modo não suportado para '{axis}': '{value}'")]
    UnsupportedMode { axis: &'static str, value: String },

    #[error("Quantidade de registros ({received}) acima do limite ({limit})")]
    TooManyRecords { limit: usize, received: usize },

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::UnsupportedMode { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::TooManyRecords { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                })
            }
            AppError::UnsupportedMode { axis, value } => json!({
                "error": self.to_string(),
                "axis": axis,
                "value": value,
            }),
            AppError::TooManyRecords { .. } => json!({ "error": self.to_string() }),
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:#}", e);
                json!({ "error": "Ocorreu um erro inesperado." })
            }
        };

        (status, Json(body)).into_response()
    }
}
