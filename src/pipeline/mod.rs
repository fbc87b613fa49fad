//! The search pipeline: Query → Candidate Set → Filter → Sort.
//!
//! One generic pipeline serves all three domains (flights, hotels,
//! packages), parameterized by a query predicate, a filter predicate and an
//! optional comparator. Every stage is synchronous and recomputes from the
//! full candidate set; there is no caching or incremental recomputation.

pub mod filters;
pub mod matcher;
pub mod pricing;
pub mod sort;

use std::cmp::Ordering;

/// Trait for composable record predicates.
pub trait Predicate<T>: Send + Sync {
    fn matches(&self, record: &T) -> bool;
}

/// A predicate that matches everything. Stands in for an absent query or an
/// all-defaults filter configuration.
pub struct MatchAll;

impl<T> Predicate<T> for MatchAll {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// One domain's query → filter → sort pipeline.
///
/// The query stage narrows the full collection to the candidate set, the
/// filter stage applies the user-adjustable predicates, and the comparator
/// (when present) imposes a total order. Sorting is stable: records with
/// equal keys keep their candidate-set order. `None` for the comparator
/// means "leave the candidate order alone", which is also the fallback for
/// unrecognized sort keys at the string boundary.
pub struct Pipeline<T> {
    query: Box<dyn Predicate<T>>,
    filter: Box<dyn Predicate<T>>,
    comparator: Option<Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>>,
}

impl<T: Clone> Pipeline<T> {
    pub fn new(
        query: Box<dyn Predicate<T>>,
        filter: Box<dyn Predicate<T>>,
        comparator: Option<Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>>,
    ) -> Self {
        Self {
            query,
            filter,
            comparator,
        }
    }

    /// The query stage alone: records matching the free-text fields, in
    /// collection order.
    pub fn candidates(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|r| self.query.matches(r))
            .cloned()
            .collect()
    }

    /// Run the full pipeline. The input is never mutated; a new ordered
    /// sequence is returned.
    pub fn run(&self, records: &[T]) -> Vec<T> {
        let mut results: Vec<T> = records
            .iter()
            .filter(|r| self.query.matches(r) && self.filter.matches(r))
            .cloned()
            .collect();
        if let Some(cmp) = &self.comparator {
            results.sort_by(|a, b| cmp(a, b));
        }
        results
    }
}
