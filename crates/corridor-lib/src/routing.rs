//! Dual-mode route planning.
//!
//! [`compute_routes`] is the main entry point: it runs the search once per
//! [`RouteMode`] under the same emergency state and returns both results.
//! Each mode succeeds or fails on its own; a missing route is an expected
//! outcome, not an error.
//!
//! # Example
//!
//! ```
//! use corridor_lib::{compute_routes, RoadNetwork, RouteRequest, WeatherSnapshot};
//!
//! let network = RoadNetwork::builtin()?;
//! let request = RouteRequest::new("Guwahati", "Shillong")
//!     .with_weather(WeatherSnapshot::from_rainfall(45.0));
//! let routes = compute_routes(&network, &request);
//! assert!(routes.safest.is_some());
//! # Ok::<(), corridor_lib::Error>(())
//! ```

use serde::Serialize;
use tracing::debug;

use crate::cost::{cost_model_for, RouteMode};
use crate::network::RoadNetwork;
use crate::path::{search, SearchConditions};
use crate::route::{assemble_route, Route};
use crate::weather::WeatherSnapshot;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub weather: WeatherSnapshot,
    pub is_emergency: bool,
}

impl RouteRequest {
    /// Request under default weather with emergency mode off.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            weather: WeatherSnapshot::default(),
            is_emergency: false,
        }
    }

    pub fn with_weather(mut self, weather: WeatherSnapshot) -> Self {
        self.weather = weather;
        self
    }

    pub fn emergency(mut self, is_emergency: bool) -> Self {
        self.is_emergency = is_emergency;
        self
    }
}

/// Safest and shortcut recommendations for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePair {
    pub safest: Option<Route>,
    pub shortcut: Option<Route>,
}

/// The route in focus and the one it is compared against.
#[derive(Debug, Clone, Copy)]
pub struct FocusedRoutes<'a> {
    pub active: Option<&'a Route>,
    pub alternative: Option<&'a Route>,
}

impl RoutePair {
    pub fn get(&self, mode: RouteMode) -> Option<&Route> {
        match mode {
            RouteMode::Safest => self.safest.as_ref(),
            RouteMode::Shortcut => self.shortcut.as_ref(),
        }
    }

    /// `true` when neither mode found a route.
    pub fn is_empty(&self) -> bool {
        self.safest.is_none() && self.shortcut.is_none()
    }

    /// Split the pair into the focused route and its alternative.
    ///
    /// When the focused mode has no route the safest route takes its place,
    /// and a route is never offered as its own alternative.
    pub fn focus(&self, mode: RouteMode) -> FocusedRoutes<'_> {
        let active = self.get(mode).or(self.safest.as_ref());
        let alternative = self
            .get(mode.counterpart())
            .filter(|candidate| active.map_or(true, |route| route.mode != candidate.mode));
        FocusedRoutes {
            active,
            alternative,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RouteMode, Option<&Route>)> {
        RouteMode::ALL.into_iter().map(move |mode| (mode, self.get(mode)))
    }
}

/// Compute the route for a single mode.
pub fn plan_route(network: &RoadNetwork, request: &RouteRequest, mode: RouteMode) -> Option<Route> {
    let conditions = SearchConditions {
        weather: &request.weather,
        is_emergency: request.is_emergency,
    };
    let tree = search(
        network,
        &request.start,
        &request.goal,
        cost_model_for(mode),
        conditions,
    );
    let route = assemble_route(
        network,
        &tree,
        mode,
        &request.start,
        &request.goal,
        request.is_emergency,
    );

    match &route {
        Some(route) => debug!(
            %mode,
            hops = route.hop_count(),
            distance_km = route.total_distance_km,
            risk = route.total_risk_score,
            "planned route"
        ),
        None => debug!(
            %mode,
            start = %request.start,
            goal = %request.goal,
            emergency = request.is_emergency,
            "no route found"
        ),
    }

    route
}

/// Compute the safest and shortcut routes for a request.
pub fn compute_routes(network: &RoadNetwork, request: &RouteRequest) -> RoutePair {
    RoutePair {
        safest: plan_route(network, request, RouteMode::Safest),
        shortcut: plan_route(network, request, RouteMode::Shortcut),
    }
}
