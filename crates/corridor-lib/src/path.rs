//! Single-source, single-target weighted search over the hub network.
//!
//! The frontier minimum is found with a linear scan over the hubs rather than
//! a priority queue. Ties resolve to the hub that appears first in repository
//! order, which keeps results stable across runs. The scan makes the search
//! quadratic in the hub count; replacing it with a heap must keep that
//! tie-break.

use tracing::{debug, trace};

use crate::cost::CostModel;
use crate::network::RoadNetwork;
use crate::visibility::is_visible;
use crate::weather::WeatherSnapshot;

/// Link in the predecessor chain: the hub a search arrived from and the
/// corridor it relaxed to get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predecessor {
    pub hub: usize,
    pub corridor: usize,
}

/// Live conditions a search runs under.
#[derive(Debug, Clone, Copy)]
pub struct SearchConditions<'a> {
    pub weather: &'a WeatherSnapshot,
    pub is_emergency: bool,
}

/// Distances and predecessor links produced by [`search`].
#[derive(Debug, Clone)]
pub struct SearchTree {
    source: Option<usize>,
    distances: Vec<f64>,
    predecessors: Vec<Option<Predecessor>>,
}

/// Hub and corridor indices along a traced path, source first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedPath {
    pub hubs: Vec<usize>,
    pub corridors: Vec<usize>,
}

impl SearchTree {
    /// Accumulated cost to reach `hub`, or infinity when it was never reached.
    pub fn distance(&self, hub: usize) -> f64 {
        self.distances.get(hub).copied().unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, hub: usize) -> Option<Predecessor> {
        self.predecessors.get(hub).copied().flatten()
    }

    /// Follow predecessor links from `target` back to the source.
    ///
    /// Returns `None` when the chain does not end at the source, which is how
    /// an unreachable target shows up.
    pub fn trace(&self, target: usize) -> Option<TracedPath> {
        let source = self.source?;
        if target >= self.distances.len() {
            return None;
        }

        let mut hubs = vec![target];
        let mut corridors = Vec::new();
        let mut current = target;
        while current != source {
            let link = self.predecessor(current)?;
            hubs.push(link.hub);
            corridors.push(link.corridor);
            current = link.hub;
            if hubs.len() > self.distances.len() {
                return None;
            }
        }

        hubs.reverse();
        corridors.reverse();
        Some(TracedPath { hubs, corridors })
    }
}

/// Run the search from `source` towards `target` using `cost` to weigh each
/// eligible corridor.
///
/// Unknown hub names never fail: an unknown source yields an empty tree and
/// an unknown target simply lets the search exhaust the reachable hubs.
pub fn search(
    network: &RoadNetwork,
    source: &str,
    target: &str,
    cost: &dyn CostModel,
    conditions: SearchConditions<'_>,
) -> SearchTree {
    let hub_count = network.hub_count();
    let mut distances = vec![f64::INFINITY; hub_count];
    let mut predecessors: Vec<Option<Predecessor>> = vec![None; hub_count];
    let mut visited = vec![false; hub_count];

    let Some(source_index) = network.hub_index(source) else {
        debug!(source, "search source is not part of the network");
        return SearchTree {
            source: None,
            distances,
            predecessors,
        };
    };
    let target_index = network.hub_index(target);
    distances[source_index] = 0.0;

    // Each pass settles one hub, so the hub count bounds the loop.
    for _ in 0..hub_count {
        let Some(current) = select_frontier(&distances, &visited) else {
            break;
        };
        if distances[current].is_infinite() {
            trace!("remaining hubs are unreachable");
            break;
        }
        if Some(current) == target_index {
            break;
        }
        visited[current] = true;

        let current_name = network.hubs()[current].name.as_str();
        for (corridor_index, corridor) in network.incident_corridors(current) {
            if !is_visible(corridor, conditions.is_emergency) {
                continue;
            }
            let Some(neighbour) = corridor
                .other_end(current_name)
                .and_then(|name| network.hub_index(name))
            else {
                continue;
            };
            if visited[neighbour] {
                continue;
            }

            let candidate = distances[current]
                + cost.weight(corridor, conditions.weather, conditions.is_emergency);
            if candidate < distances[neighbour] {
                distances[neighbour] = candidate;
                predecessors[neighbour] = Some(Predecessor {
                    hub: current,
                    corridor: corridor_index,
                });
            }
        }
    }

    SearchTree {
        source: Some(source_index),
        distances,
        predecessors,
    }
}

/// Unvisited hub with the smallest tentative distance; the earliest hub wins
/// ties.
fn select_frontier(distances: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, &distance) in distances.iter().enumerate() {
        if visited[index] {
            continue;
        }
        match best {
            Some(current) if distances[current] <= distance => {}
            _ => best = Some(index),
        }
    }
    best
}
