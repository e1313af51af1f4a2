//! One-step random-surfer transition distribution.

use crate::error::{Error, Result};
use crate::graph::{LinkGraph, PageId};

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidDamping(damping))
    }
}

/// Probability distribution over "next page" for a surfer currently on
/// `page`.
///
/// Every page receives the random-jump mass `(1 - damping) / N`. If
/// `page` has outbound links, each linked page additionally receives
/// `damping / L` where `L` is the out-degree; a dangling page spreads
/// `damping / N` over the whole corpus instead, so no probability mass
/// leaks. The result is indexed by [`PageId`] and sums to 1.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Vec<f64>> {
    check_damping(damping)?;
    let id = graph
        .page_id(page)
        .ok_or_else(|| Error::UnknownPage(page.to_string()))?;
    let mut dist = vec![0.0; graph.len()];
    transition_into(graph, id, damping, &mut dist);
    Ok(dist)
}

/// Fill `dist` with the transition distribution for `page`.
///
/// `dist.len()` must equal `graph.len()`. The sampler calls this once
/// per step with a reused buffer.
pub(crate) fn transition_into(graph: &LinkGraph, page: PageId, damping: f64, dist: &mut [f64]) {
    let n = graph.len() as f64;
    dist.fill((1.0 - damping) / n);

    let links = graph.out_links(page);
    if links.is_empty() {
        // Dangling page: acts as if it linked to every page equally.
        let share = damping / n;
        for d in dist.iter_mut() {
            *d += share;
        }
    } else {
        let share = damping / links.len() as f64;
        for &target in links {
            dist[target] += share;
        }
    }
}
