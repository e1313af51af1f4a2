//! Deterministic PageRank by fixed-point iteration.

use crate::error::{Error, Result};
use crate::graph::LinkGraph;
use crate::rank::{self, RankVector};
use crate::transition::check_damping;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterateConfig {
    pub damping: f64,
    pub tolerance: f64,
    /// Safety cap on rounds. `None` iterates until convergence.
    pub max_rounds: Option<usize>,
}

impl Default for IterateConfig {
    fn default() -> Self {
        Self { damping: 0.85, tolerance: 1e-3, max_rounds: None }
    }
}

/// Compute PageRank as the fixed point of the random-surfer recurrence.
///
/// Starting from a uniform vector, each round applies the closed form of
/// the surfer expectation to the previous round's snapshot:
/// \[
///   r'(p) = \frac{1-d}{N}
///         + d \sum_{q \to p} \frac{r(q)}{\mathrm{deg}(q)}
///         + d \sum_{q\ \mathrm{dangling}} \frac{r(q)}{N}
/// \]
/// A dangling page's mass spreads uniformly over the corpus, mirroring
/// the transition model, so every round conserves total mass.
///
/// The loop stops once no page moved by `config.tolerance` or more in a
/// round, and the vector of that round is returned. If `config.max_rounds`
/// is set and the loop would pass it, the run fails with
/// [`Error::ConvergenceFailed`] carrying the round count and the last
/// delta; callers can loosen the tolerance and retry.
pub fn iterate_pagerank(graph: &LinkGraph, config: IterateConfig) -> Result<RankVector> {
    check_damping(config.damping)?;
    if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
        return Err(Error::InvalidTolerance(config.tolerance));
    }
    if config.max_rounds == Some(0) {
        return Err(Error::InvalidMaxRounds);
    }

    let n = graph.len();
    if n == 0 {
        return Ok(RankVector::from_values(Vec::new()));
    }
    let n_f64 = n as f64;
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];
    let dangling = graph.dangling_pages();

    let mut rounds = 0usize;
    loop {
        rounds += 1;

        let dangling_sum: f64 = dangling.iter().map(|&p| scores[p]).sum();
        let base = (1.0 - config.damping) / n_f64 + config.damping * dangling_sum / n_f64;
        new_scores.fill(base);

        for page in graph.pages() {
            let links = graph.out_links(page);
            if !links.is_empty() {
                let share = config.damping * scores[page] / links.len() as f64;
                for &target in links {
                    new_scores[target] += share;
                }
            }
        }

        // Max-norm against the full previous snapshot: a round only
        // converges once no page moved by tolerance or more.
        let delta = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .fold(0.0f64, f64::max);
        std::mem::swap(&mut scores, &mut new_scores);

        if delta < config.tolerance {
            tracing::debug!("Converged after {} rounds (delta {:.2e})", rounds, delta);
            break;
        }
        if let Some(cap) = config.max_rounds {
            if rounds >= cap {
                return Err(Error::ConvergenceFailed { rounds, delta });
            }
        }
    }

    // Pin the sums-to-one invariant against floating-point drift.
    rank::normalize(&mut scores);
    Ok(RankVector::from_values(scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(pages: &[(&str, &[&str])]) -> LinkGraph {
        LinkGraph::from_links(pages.iter().map(|(name, targets)| {
            (
                name.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            )
        }))
    }

    #[test]
    fn two_page_cycle_splits_evenly() {
        let g = graph(&[("a.html", &["b.html"]), ("b.html", &["a.html"])]);
        let ranks = iterate_pagerank(&g, IterateConfig::default()).unwrap();
        assert!((ranks.value(0) - 0.5).abs() < 1e-9);
        assert!((ranks.value(1) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn three_page_cycle_is_uniform() {
        let g = graph(&[
            ("a.html", &["b.html"]),
            ("b.html", &["c.html"]),
            ("c.html", &["a.html"]),
        ]);
        let config = IterateConfig { tolerance: 1e-12, ..IterateConfig::default() };
        let ranks = iterate_pagerank(&g, config).unwrap();
        let total: f64 = ranks.values().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        for &v in ranks.values() {
            assert!((v - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn dangling_mass_is_redistributed() {
        // a has no outlinks; its mass must flow back into the corpus.
        let g = graph(&[("a.html", &[]), ("b.html", &["a.html"])]);
        let ranks = iterate_pagerank(&g, IterateConfig::default()).unwrap();
        let total: f64 = ranks.values().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);

        let a = ranks.value(g.page_id("a.html").unwrap());
        let b = ranks.value(g.page_id("b.html").unwrap());
        // Fixed point is a = 0.6491..., b = 0.3508...
        assert!(a > b);
        assert!(a > 0.6 && a < 0.7, "a={a}");
    }

    #[test]
    fn cap_equal_to_needed_rounds_still_converges() {
        // The symmetric cycle converges on the very first round.
        let g = graph(&[("a.html", &["b.html"]), ("b.html", &["a.html"])]);
        let config = IterateConfig { max_rounds: Some(1), ..IterateConfig::default() };
        assert!(iterate_pagerank(&g, config).is_ok());
    }

    #[test]
    fn exceeding_the_round_cap_is_a_convergence_failure() {
        let g = graph(&[
            ("a.html", &["b.html"]),
            ("b.html", &["a.html", "c.html"]),
            ("c.html", &["b.html"]),
        ]);
        let config = IterateConfig {
            tolerance: 1e-15,
            max_rounds: Some(2),
            ..IterateConfig::default()
        };
        match iterate_pagerank(&g, config) {
            Err(Error::ConvergenceFailed { rounds, delta }) => {
                assert_eq!(rounds, 2);
                assert!(delta > 0.0);
            }
            other => panic!("expected ConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_graph_gives_empty_vector() {
        let g = LinkGraph::from_links(std::iter::empty());
        let ranks = iterate_pagerank(&g, IterateConfig::default()).unwrap();
        assert!(ranks.is_empty());
    }

    #[test]
    fn bad_tolerance_is_rejected() {
        let g = graph(&[("a.html", &[])]);
        for bad in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let config = IterateConfig { tolerance: bad, ..IterateConfig::default() };
            assert!(matches!(
                iterate_pagerank(&g, config),
                Err(Error::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn zero_round_cap_is_rejected() {
        let g = graph(&[("a.html", &[])]);
        let config = IterateConfig { max_rounds: Some(0), ..IterateConfig::default() };
        assert!(matches!(
            iterate_pagerank(&g, config),
            Err(Error::InvalidMaxRounds)
        ));
    }
}
