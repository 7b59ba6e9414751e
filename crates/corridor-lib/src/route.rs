//! Route assembly: turning a traced search path into a reportable [`Route`].

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::cost::RouteMode;
use crate::network::{Corridor, Hub, RoadNetwork};
use crate::path::SearchTree;
use crate::visibility::is_visible;

/// Risk score below which a route is considered low risk.
pub const LOW_RISK_CEILING: f64 = 0.25;
/// Risk score below which a route is considered moderate risk.
pub const MODERATE_RISK_CEILING: f64 = 0.55;

/// Coarse banding of a risk score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn for_score(score: f64) -> Self {
        if score < LOW_RISK_CEILING {
            RiskBand::Low
        } else if score < MODERATE_RISK_CEILING {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RiskBand::Low => "LOW",
            RiskBand::Moderate => "MODERATE",
            RiskBand::High => "HIGH",
        };
        f.write_str(value)
    }
}

/// A computed recommendation for one routing mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub mode: RouteMode,
    /// Hubs from origin to destination; never empty.
    pub path: Vec<Hub>,
    /// `segments[i]` joins `path[i]` and `path[i + 1]`.
    pub segments: Vec<Corridor>,
    pub total_distance_km: f64,
    /// Mean combined landslide and flood risk across segments.
    pub total_risk_score: f64,
    pub avg_safety_score: f64,
    pub has_emergency_shortcut: bool,
    /// Accumulated search cost under the mode's cost model.
    pub search_cost: f64,
}

impl Route {
    /// Build a route from resolved hubs and segments, computing aggregates.
    pub fn from_parts(
        mode: RouteMode,
        path: Vec<Hub>,
        segments: Vec<Corridor>,
        search_cost: f64,
    ) -> Self {
        let total_distance_km = segments.iter().map(|s| s.distance_km).sum();
        let total_risk_score = if segments.is_empty() {
            0.0
        } else {
            segments.iter().map(Corridor::combined_risk).sum::<f64>() / segments.len() as f64
        };
        let has_emergency_shortcut = segments.iter().any(Corridor::is_restricted);

        Self {
            mode,
            path,
            segments,
            total_distance_km,
            total_risk_score,
            avg_safety_score: 1.0 - total_risk_score,
            has_emergency_shortcut,
            search_cost,
        }
    }

    /// Number of corridors travelled.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    /// `true` for the degenerate "already at destination" route.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn origin(&self) -> Option<&Hub> {
        self.path.first()
    }

    pub fn destination(&self) -> Option<&Hub> {
        self.path.last()
    }

    pub fn risk_band(&self) -> RiskBand {
        RiskBand::for_score(self.total_risk_score)
    }

    /// Hub names joined with arrows, e.g. `Guwahati -> Shillong`.
    pub fn path_label(&self) -> String {
        self.path
            .iter()
            .map(|hub| hub.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Assemble the route for `target` out of a finished search.
///
/// Returns `None` when the target is unknown, unreachable, or the traced
/// chain does not start at `source`. Each segment is the corridor the search
/// actually relaxed for that hop.
pub fn assemble_route(
    network: &RoadNetwork,
    tree: &SearchTree,
    mode: RouteMode,
    source: &str,
    target: &str,
    is_emergency: bool,
) -> Option<Route> {
    let target_index = network.hub_index(target)?;
    let traced = tree.trace(target_index)?;

    let path = traced
        .hubs
        .iter()
        .map(|&index| network.hub(index).cloned())
        .collect::<Option<Vec<_>>>()?;
    if path.first().map(|hub| hub.name.as_str()) != Some(source) {
        debug!(%mode, source, target, "traced path does not start at the source");
        return None;
    }

    let segments = traced
        .corridors
        .iter()
        .map(|&index| network.corridor(index).cloned())
        .collect::<Option<Vec<_>>>()?;
    debug_assert!(segments.iter().all(|c| is_visible(c, is_emergency)));
    debug_assert_eq!(segments.len() + 1, path.len());

    Some(Route::from_parts(
        mode,
        path,
        segments,
        tree.distance(target_index),
    ))
}
