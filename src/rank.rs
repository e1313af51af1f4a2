//! Rank vectors and their reporting views.

use crate::graph::{LinkGraph, PageId};
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A PageRank estimate: one score per page, indexed by [`PageId`].
///
/// Values lie in `[0, 1]` and sum to 1 — exactly for the sampling
/// estimator (it divides visit counts by the sample total), within
/// floating-point tolerance for the iterative one.
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    values: Vec<f64>,
}

impl RankVector {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of pages scored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the vector scores no pages.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Score of a page; 0 for ids outside the vector.
    pub fn value(&self, page: PageId) -> f64 {
        self.values.get(page).copied().unwrap_or(0.0)
    }

    /// All scores, indexed by [`PageId`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Total mass.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Score of a page by name.
    pub fn for_page(&self, graph: &LinkGraph, page: &str) -> Option<f64> {
        graph.page_id(page).map(|id| self.value(id))
    }

    /// Scores paired with page names, sorted by name.
    ///
    /// This is the reporting order. Nothing in the estimators depends on
    /// it; sorting happens only here, at the presentation boundary.
    pub fn sorted_by_page<'g>(&self, graph: &'g LinkGraph) -> Vec<(&'g str, f64)> {
        let mut rows: Vec<(&str, f64)> = graph
            .pages()
            .map(|p| (graph.page_name(p), self.value(p)))
            .collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// The `k` highest-scored pages, best first, ties preferring the
    /// lower page id. Pages with zero or non-finite score never rank.
    pub fn top_k(&self, k: usize) -> Vec<(PageId, f64)> {
        if k == 0 || self.values.is_empty() {
            return Vec::new();
        }
        let mut heap = BinaryHeap::with_capacity(k + 1);
        for (i, &score) in self.values.iter().enumerate() {
            if !score.is_finite() || score <= 0.0 {
                continue;
            }
            let s = NotNan::new(score).unwrap();
            if heap.len() < k {
                heap.push(Reverse((s, i)));
            } else if let Some(&Reverse((min_score, _))) = heap.peek() {
                if s > min_score {
                    heap.pop();
                    heap.push(Reverse((s, i)));
                }
            }
        }
        let mut results: Vec<(PageId, f64)> = heap
            .into_iter()
            .map(|Reverse((s, i))| (i, s.into_inner()))
            .collect();
        results.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        results
    }
}

pub(crate) fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for s in scores {
            *s /= sum;
        }
    }
}
