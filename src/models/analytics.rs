// src/models/analytics.rs

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeMap;
use utoipa::ToSchema;

use crate::common::lenient;
use crate::models::money::RawAmount;

// 1. Bucket cru (um dia, semana ou mês) como veio da fonte
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawBucket {
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub count: u64,

    // Ausente -> "0" na hora de montar a linha
    #[serde(default, deserialize_with = "lenient::raw_amount")]
    pub total: Option<RawAmount>,
}

// 2. Mapa label -> bucket, preservando a ordem em que a fonte mandou as chaves.
// O gráfico de tendência depende dessa ordem; a tabela mensal reordena.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketMap(IndexMap<String, RawBucket>);

impl BucketMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Insere ou substitui. Chave repetida mantém a posição da primeira.
    pub fn insert(&mut self, label: impl Into<String>, bucket: RawBucket) {
        self.0.insert(label.into(), bucket);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawBucket)> {
        self.0.iter().map(|(label, bucket)| (label.as_str(), bucket))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, RawBucket)> for BucketMap {
    fn from_iter<I: IntoIterator<Item = (L, RawBucket)>>(iter: I) -> Self {
        let mut map = BucketMap::new();
        for (label, bucket) in iter {
            map.insert(label, bucket);
        }
        map
    }
}

impl Serialize for BucketMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, bucket) in &self.0 {
            map.serialize_entry(label, bucket)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BucketMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BucketMapVisitor;

        impl<'de> Visitor<'de> for BucketMapVisitor {
            type Value = BucketMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("um objeto label -> {count, total}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BucketMap, A::Error> {
                // `size_hint` vem do corpo da requisição: limitado para não pré-alocar demais
                let mut map = BucketMap::with_capacity(access.size_hint().unwrap_or(0).min(1024));
                while let Some((label, bucket)) = access.next_entry::<String, Option<RawBucket>>()? {
                    // `null` no lugar do bucket conta como bucket vazio
                    map.insert(label, bucket.unwrap_or_default());
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(BucketMapVisitor)
    }
}

// 3. Linha pronta para a tabela/gráfico
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BucketRow {
    pub label: String,
    pub count: u64,
    // Texto como veio da fonte ("0" se ausente)
    pub total: String,
    // Sempre com duas casas ("100.00"), ou o texto original se não for número
    pub total_display: String,
    // Altura da barra no gráfico (ver BarScale)
    pub bar_size: f64,
}

// 4. Métricas agregadas de uma série de buckets
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownTotals {
    pub buckets: usize,
    pub total_orders: u64,
    pub total_revenue: String,
    pub avg_order_value: String,
    pub avg_revenue_per_bucket: String,
}

// 5. Top Produtos (como veio da fonte, já ranqueado)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub orders: u64,

    #[serde(default, deserialize_with = "lenient::raw_amount")]
    pub revenue: Option<RawAmount>,

    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub stock: u32,
}

// O rank é posicional (1 = primeiro da lista de entrada), nunca recalculado
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    pub rank: usize,
    pub name: String,
    pub orders: u64,
    pub revenue: String,
    pub revenue_display: String,
    pub stock: u32,
}

// 6. Venda crua, usada no rollup local por período
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    #[serde(default, alias = "created_at", deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::decimal")]
    #[schema(value_type = String, example = "49.90")]
    pub total: Decimal,
}
