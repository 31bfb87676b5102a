// src/services/filter_sort.rs

//! Motor genérico de filtro + ordenação usado por todas as listagens.
//!
//! Duas passadas distintas: primeiro o filtro (preserva a ordem de entrada),
//! depois a ordenação (estável: empates mantêm a ordem pós-filtro). A entrada
//! nunca é alterada; o resultado é sempre um `Vec` novo. Resultado vazio é um
//! estado válido, não um erro.

use std::cmp::Ordering;

/// Filtra e ordena em duas passadas.
pub fn apply<R, P, C>(records: &[R], predicate: P, comparator: C) -> Vec<R>
where
    R: Clone,
    P: Fn(&R) -> bool,
    C: Fn(&R, &R) -> Ordering,
{
    let mut filtered: Vec<R> = records.iter().filter(|r| predicate(r)).cloned().collect();
    // `sort_by` é estável
    filtered.sort_by(|a, b| comparator(a, b));
    filtered
}

type Predicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;
type Comparator<'a, R> = Box<dyn Fn(&R, &R) -> Ordering + 'a>;

/// Pipeline montado peça por peça: qualquer número de predicados (AND) e no
/// máximo um comparador. Sem comparador, a ordem pós-filtro é mantida.
pub struct Pipeline<'a, R> {
    predicates: Vec<Predicate<'a, R>>,
    comparator: Option<Comparator<'a, R>>,
}

impl<'a, R: Clone> Pipeline<'a, R> {
    pub fn new() -> Self {
        Self { predicates: Vec::new(), comparator: None }
    }

    pub fn filter(mut self, predicate: impl Fn(&R) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Substitui o comparador anterior, se houver.
    pub fn sort_by(mut self, comparator: impl Fn(&R, &R) -> Ordering + 'a) -> Self {
        self.comparator = Some(Box::new(comparator));
        self
    }

    pub fn matches(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p(record))
    }

    pub fn run(&self, records: &[R]) -> Vec<R> {
        match &self.comparator {
            Some(comparator) => apply(records, |r| self.matches(r), |a, b| comparator(a, b)),
            None => records.iter().filter(|r| self.matches(r)).cloned().collect(),
        }
    }
}

impl<'a, R: Clone> Default for Pipeline<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Helpers de comparação/busca compartilhados pelas telas ---

/// Comparação lexical sem diferenciar maiúsculas/minúsculas.
pub fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Busca por substring sem diferenciar maiúsculas. `needle` já em minúsculas.
pub fn contains_lowercase(haystack: &str, needle_lowercase: &str) -> bool {
    needle_lowercase.is_empty() || haystack.to_lowercase().contains(needle_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        key: i32,
    }

    fn rows(keys: &[i32]) -> Vec<Row> {
        keys.iter()
            .enumerate()
            .map(|(i, &key)| Row { id: i as u32, key })
            .collect()
    }

    #[test]
    fn filters_then_sorts() {
        let input = rows(&[5, -1, 3, 8, -4]);
        let out = apply(&input, |r| r.key > 0, |a, b| a.key.cmp(&b.key));
        let keys: Vec<_> = out.iter().map(|r| r.key).collect();
        assert_eq!(keys, [3, 5, 8]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = rows(&[3, 1, 2]);
        let before = input.clone();
        let _ = apply(&input, |_| true, |a, b| a.key.cmp(&b.key));
        assert_eq!(input, before);
    }

    #[test]
    fn ties_keep_post_filter_order() {
        let input = rows(&[1, 0, 1, 0, 1]);
        let out = apply(&input, |_| true, |a, b| a.key.cmp(&b.key));
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 3, 0, 2, 4]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let input = rows(&[1, 2, 3]);
        assert!(apply(&input, |r| r.key > 10, |a, b| a.key.cmp(&b.key)).is_empty());
    }

    #[test]
    fn pipeline_ands_predicates() {
        let input = rows(&[1, 2, 3, 4, 5, 6]);
        let out = Pipeline::new()
            .filter(|r: &Row| r.key % 2 == 0)
            .filter(|r: &Row| r.key > 2)
            .sort_by(|a: &Row, b: &Row| b.key.cmp(&a.key))
            .run(&input);
        let keys: Vec<_> = out.iter().map(|r| r.key).collect();
        assert_eq!(keys, [6, 4]);
    }

    #[test]
    fn pipeline_without_comparator_keeps_input_order() {
        let input = rows(&[9, 1, 5]);
        let out = Pipeline::new().filter(|r: &Row| r.key != 1).run(&input);
        let keys: Vec<_> = out.iter().map(|r| r.key).collect();
        assert_eq!(keys, [9, 5]);
    }

    #[test]
    fn case_insensitive_helpers() {
        assert_eq!(cmp_case_insensitive("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_case_insensitive("ABC", "abc"), Ordering::Equal);
        assert!(contains_lowercase("Farinha de Trigo", "trigo"));
        assert!(contains_lowercase("qualquer", ""));
        assert!(!contains_lowercase("Arroz", "feijão"));
    }
}
