//! Corridor routing library entry points.
//!
//! This crate holds the hub-and-corridor road network, the risk-weighted
//! search that produces safest and shortcut routes under the current weather
//! and emergency state, and the reporting built on top of those routes
//! (alerts, risk insights, hub accessibility, explanations). Higher-level
//! consumers such as the CLI should only depend on the functions exported
//! here instead of reimplementing behavior.

pub mod alerts;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod explain;
pub mod network;
pub mod output;
pub mod path;
pub mod route;
pub mod routing;
pub mod visibility;
pub mod weather;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use alerts::{
    hub_accessibility, monitor_alerts, risk_insights, AccessStatus, Alert, AlertKind,
    HubAccessibility, MissionStatus, RiskInsight, Severity,
};
pub use cost::{cost_model_for, CostModel, RouteMode, SafestCost, ShortcutCost};
pub use dataset::{default_dataset_path, load_network, resolve_dataset_source, DatasetSource};
pub use error::{Error, Result};
pub use explain::{
    build_prompt, explain_or_fallback, fallback_explanation, BriefingExplainer,
    ExplanationContext, RouteExplainer, UnavailableExplainer,
};
pub use network::{Corridor, EmergencyCorridor, Hub, NetworkDocument, RoadNetwork};
pub use output::{MissionReport, RenderMode, RouteSummary};
pub use path::{search, SearchConditions, SearchTree};
pub use route::{assemble_route, RiskBand, Route};
pub use routing::{compute_routes, plan_route, FocusedRoutes, RoutePair, RouteRequest};
pub use visibility::is_visible;
pub use weather::{AlertLevel, WeatherSnapshot};
