//! Monte Carlo PageRank: simulate the random surfer and count visits.

use crate::error::{Error, Result};
use crate::graph::LinkGraph;
use crate::rank::RankVector;
use crate::transition::{check_damping, transition_into};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleConfig {
    pub damping: f64,
    pub samples: usize,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { damping: 0.85, samples: 10_000, seed: 42 }
    }
}

/// Estimate PageRank as visit frequencies of one long random walk.
///
/// The walk starts on a uniformly random page and takes `config.samples`
/// steps, each drawn from the transition distribution of the current
/// page. Every value of the result is a multiple of `1 / samples` and
/// the values sum to exactly 1 by construction.
///
/// The walk is driven by a [`ChaCha8Rng`] seeded from `config.seed`, so
/// equal seeds give identical results.
pub fn sample_pagerank(graph: &LinkGraph, config: SampleConfig) -> Result<RankVector> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    sample_pagerank_with_rng(graph, config, &mut rng)
}

/// Like [`sample_pagerank`], but drawing from a caller-supplied source.
/// `config.seed` is ignored.
pub fn sample_pagerank_with_rng<R: Rng>(
    graph: &LinkGraph,
    config: SampleConfig,
    rng: &mut R,
) -> Result<RankVector> {
    check_damping(config.damping)?;
    if config.samples == 0 {
        return Err(Error::InvalidSampleCount);
    }

    let n = graph.len();
    if n == 0 {
        return Ok(RankVector::from_values(Vec::new()));
    }

    let mut counts = vec![0u64; n];
    let mut dist = vec![0.0; n];
    let mut current = rng.random_range(0..n);

    for _ in 0..config.samples {
        counts[current] += 1;
        transition_into(graph, current, config.damping, &mut dist);
        current = pick_weighted(rng, &dist);
    }

    tracing::debug!("Sampled {} surfer steps over {} pages", config.samples, n);

    let total = config.samples as f64;
    let values = counts.into_iter().map(|c| c as f64 / total).collect();
    Ok(RankVector::from_values(values))
}

/// Cumulative-distribution draw: pick an index with probability
/// proportional to its weight.
fn pick_weighted<R: Rng>(rng: &mut R, weights: &[f64]) -> usize {
    if weights.len() == 1 {
        return 0;
    }
    let total: f64 = weights.iter().sum();
    let mut r = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        if r <= w {
            return i;
        }
        r -= w;
    }
    // Floating-point slack can walk r past the last bucket.
    weights.len() - 1
}
