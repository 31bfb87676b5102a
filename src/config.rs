// src/config.rs

use anyhow::Context;
use std::{env, sync::Arc};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_RECORDS: usize = 1000;
const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    // Tamanho máximo de uma "página" de registros por requisição
    pub max_records: usize,
    // N usado no Top Produtos quando a tela não manda
    pub top_products_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_records: DEFAULT_MAX_RECORDS,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}

impl AppConfig {
    // Lê do ambiente (depois de carregar o .env, se existir)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `from_env` para os testes não mexerem no ambiente do processo
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let max_records = match lookup("MAX_RECORDS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MAX_RECORDS inválido: '{raw}'"))?,
            None => defaults.max_records,
        };

        let top_products_limit = match lookup("TOP_PRODUCTS_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TOP_PRODUCTS_LIMIT inválido: '{raw}'"))?,
            None => defaults.top_products_limit,
        };

        Ok(Self { bind_addr, max_records, top_products_limit })
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        tracing::info!(
            bind_addr = %config.bind_addr,
            max_records = config.max_records,
            top_products_limit = config.top_products_limit,
            "✅ Configuração carregada"
        );
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    // Guarda de tamanho de página, usado por todos os handlers
    pub fn check_page_size(&self, received: usize) -> Result<(), crate::common::error::AppError> {
        if received > self.config.max_records {
            return Err(crate::common::error::AppError::TooManyRecords {
                limit: self.config.max_records,
                received,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("MAX_RECORDS", "50"),
            ("TOP_PRODUCTS_LIMIT", " 10 "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.max_records, 50);
        assert_eq!(config.top_products_limit, 10);
    }

    #[test]
    fn malformed_numbers_fail_startup() {
        let err = AppConfig::from_lookup(lookup_from(&[("MAX_RECORDS", "muitos")])).unwrap_err();
        assert!(err.to_string().contains("MAX_RECORDS"));
    }

    #[test]
    fn page_size_guard() {
        let state = AppState::with_config(AppConfig { max_records: 2, ..AppConfig::default() });
        assert!(state.check_page_size(2).is_ok());
        assert!(state.check_page_size(3).is_err());
    }
}
