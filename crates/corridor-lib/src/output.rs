use std::fmt::Write;

use serde::Serialize;

use crate::alerts::{monitor_alerts, risk_insights, Alert, MissionStatus, RiskInsight};
use crate::cost::RouteMode;
use crate::error::{Error, Result};
use crate::explain::{explain_or_fallback, ExplanationContext, RouteExplainer};
use crate::route::{RiskBand, Route};
use crate::routing::{RoutePair, RouteRequest};
use crate::weather::WeatherSnapshot;

/// Presentation style for turning a summary into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
    Note,
}

/// Corridor travelled between two consecutive hubs of a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub corridor: String,
    pub distance_km: f64,
    pub landslide_risk: f64,
    pub flood_risk: f64,
    pub restricted: bool,
}

/// Structured representation of one computed route that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub mode: RouteMode,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub path: Vec<String>,
    pub steps: Vec<RouteStep>,
    pub total_distance_km: f64,
    pub total_risk_score: f64,
    pub avg_safety_score: f64,
    pub risk_band: RiskBand,
    pub has_emergency_shortcut: bool,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary, walking each hop with its corridor.
    pub fn from_route(route: &Route) -> Result<Self> {
        let (Some(start), Some(goal)) = (route.origin(), route.destination()) else {
            return Err(Error::EmptyRoute);
        };

        let steps = route
            .path
            .windows(2)
            .zip(&route.segments)
            .enumerate()
            .map(|(index, (pair, corridor))| RouteStep {
                index: index + 1,
                from: pair[0].name.clone(),
                to: pair[1].name.clone(),
                corridor: corridor.id.clone(),
                distance_km: corridor.distance_km,
                landslide_risk: corridor.landslide_risk,
                flood_risk: corridor.flood_risk,
                restricted: corridor.is_restricted(),
            })
            .collect();

        Ok(Self {
            mode: route.mode,
            hops: route.hop_count(),
            start: start.name.clone(),
            goal: goal.name.clone(),
            path: route.path.iter().map(|hub| hub.name.clone()).collect(),
            steps,
            total_distance_km: route.total_distance_km,
            total_risk_score: route.total_risk_score,
            avg_safety_score: route.avg_safety_score,
            risk_band: route.risk_band(),
            has_emergency_shortcut: route.has_emergency_shortcut,
        })
    }

    fn safety_percent(&self) -> String {
        format!("{:.0}%", self.avg_safety_score * 100.0)
    }

    fn headline(&self) -> String {
        format!(
            "{} -> {} ({} hops, {:.1} km, safety {}, risk {})",
            self.start,
            self.goal,
            self.hops,
            self.total_distance_km,
            self.safety_percent(),
            self.risk_band
        )
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
            RenderMode::Note => self.render_note(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{} route: {}", self.mode, self.headline());
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} [{}] {:.1} km{}",
                step.index,
                step.from,
                step.to,
                step.corridor,
                step.distance_km,
                if step.restricted { " (restricted)" } else { "" }
            );
        }
        if self.has_emergency_shortcut {
            let _ = writeln!(buffer, "     uses a restricted emergency corridor");
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}** _{} → {}_ ({} hops, {:.1} km, safety `{}`, risk `{}`)",
            self.mode,
            self.start,
            self.goal,
            self.hops,
            self.total_distance_km,
            self.safety_percent(),
            self.risk_band
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** → **{}** (`{}`, {:.1} km){}",
                step.index,
                step.from,
                step.to,
                step.corridor,
                step.distance_km,
                if step.restricted { " _restricted_" } else { "" }
            );
        }
        buffer
    }

    fn render_note(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}:", self.mode.as_str().to_uppercase());
        let _ = writeln!(buffer, "{}", self.headline());
        for name in &self.path {
            let _ = writeln!(buffer, "{name}");
        }
        buffer
    }
}

/// Everything reported for one routing request: both routes, the focus,
/// alerts, insights and an optional explanation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionReport {
    pub start: String,
    pub goal: String,
    pub weather: WeatherSnapshot,
    pub is_emergency: bool,
    pub focus: RouteMode,
    pub safest: Option<RouteSummary>,
    pub shortcut: Option<RouteSummary>,
    pub alerts: Vec<Alert>,
    pub insights: Vec<RiskInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl MissionReport {
    /// Assemble the report for a computed pair.
    ///
    /// Alerts and insights follow the focused route (or safest when the
    /// focused mode found nothing). An explanation is produced only when an
    /// explainer is supplied and some route exists.
    pub fn build(
        request: &RouteRequest,
        routes: &RoutePair,
        focus: RouteMode,
        mission: MissionStatus,
        explainer: Option<&dyn RouteExplainer>,
    ) -> Result<Self> {
        let focused = routes.focus(focus);
        let alerts = monitor_alerts(
            &request.weather,
            focused.active,
            mission,
            &request.start,
            &request.goal,
        );
        let insights = focused.active.map(risk_insights).unwrap_or_default();
        let explanation = match (explainer, focused.active) {
            (Some(explainer), Some(active)) => Some(explain_or_fallback(
                explainer,
                &ExplanationContext {
                    active,
                    alternative: focused.alternative,
                    weather: &request.weather,
                    is_emergency: request.is_emergency,
                },
            )),
            _ => None,
        };

        Ok(Self {
            start: request.start.clone(),
            goal: request.goal.clone(),
            weather: request.weather,
            is_emergency: request.is_emergency,
            focus,
            safest: routes.safest.as_ref().map(RouteSummary::from_route).transpose()?,
            shortcut: routes
                .shortcut
                .as_ref()
                .map(RouteSummary::from_route)
                .transpose()?,
            alerts,
            insights,
            explanation,
        })
    }

    pub fn summary(&self, mode: RouteMode) -> Option<&RouteSummary> {
        match mode {
            RouteMode::Safest => self.safest.as_ref(),
            RouteMode::Shortcut => self.shortcut.as_ref(),
        }
    }

    /// Render the report; the focused route comes first.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        let header = match mode {
            RenderMode::RichText => format!(
                "## {} → {} (rain {}mm, alert `{}`, emergency {})\n",
                self.start,
                self.goal,
                self.weather.rainfall_mm,
                self.weather.alert_level,
                if self.is_emergency { "on" } else { "off" }
            ),
            _ => format!(
                "Mission: {} -> {} (rain {}mm, alert {}, emergency {})\n",
                self.start,
                self.goal,
                self.weather.rainfall_mm,
                self.weather.alert_level,
                if self.is_emergency { "on" } else { "off" }
            ),
        };
        buffer.push_str(&header);

        for route_mode in [self.focus, self.focus.counterpart()] {
            match self.summary(route_mode) {
                Some(summary) => buffer.push_str(&summary.render(mode)),
                None => {
                    let _ = writeln!(buffer, "{route_mode} route: unavailable");
                }
            }
        }

        if mode == RenderMode::Note {
            return buffer;
        }

        for alert in &self.alerts {
            let _ = writeln!(
                buffer,
                "{} {}: {}",
                alert.severity, alert.kind, alert.message
            );
        }
        for insight in &self.insights {
            let _ = writeln!(
                buffer,
                "{}: {} ({})",
                insight.hazard.label(),
                insight.location,
                insight.percent()
            );
        }
        if let Some(explanation) = &self.explanation {
            let _ = writeln!(buffer, "{explanation}");
        }
        buffer
    }
}
