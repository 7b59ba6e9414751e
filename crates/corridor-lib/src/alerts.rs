//! Situational reporting derived from a computed route and the live network.
//!
//! Nothing here influences routing. These helpers turn a route, the weather
//! and the mission's SOS declarations into alerts, risk insights and per-hub
//! accessibility figures for display.

use std::fmt;

use serde::Serialize;

use crate::network::{Corridor, RoadNetwork};
use crate::route::Route;
use crate::weather::{AlertLevel, WeatherSnapshot};

/// Segment risk above which a blockage is considered imminent.
pub const BLOCKAGE_RISK_THRESHOLD: f64 = 0.8;
/// Segment risk above which a landslide or flood insight is reported.
pub const INSIGHT_RISK_THRESHOLD: f64 = 0.3;
/// Rainfall (mm) that removes all accessibility from a hub on its own.
pub const ACCESSIBILITY_RAIN_SCALE_MM: f64 = 200.0;
/// Safety above which a hub is accessible.
pub const ACCESSIBLE_FLOOR: f64 = 0.7;
/// Safety above which a hub is degraded rather than critical.
pub const DEGRADED_FLOOR: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Weather,
    Blockage,
    Mission,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            AlertKind::Weather => "WEATHER",
            AlertKind::Blockage => "BLOCKAGE",
            AlertKind::Mission => "MISSION",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
}

/// SOS declarations for the two ends of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionStatus {
    pub start_sos: bool,
    pub goal_sos: bool,
}

impl MissionStatus {
    /// Emergency routing is in force when either end declares SOS or the
    /// operator forces it.
    pub fn emergency_active(&self, forced: bool) -> bool {
        forced || self.start_sos || self.goal_sos
    }
}

/// Alerts for the active route, in weather, blockage, mission order.
pub fn monitor_alerts(
    weather: &WeatherSnapshot,
    active: Option<&Route>,
    mission: MissionStatus,
    start: &str,
    goal: &str,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if weather.alert_level == AlertLevel::Red {
        alerts.push(Alert {
            kind: AlertKind::Weather,
            severity: Severity::Critical,
            message: format!(
                "Extreme precipitation detected ({}mm). High flood risk across all corridors.",
                weather.rainfall_mm
            ),
        });
    }

    for segment in active.map(|route| route.segments.as_slice()).unwrap_or(&[]) {
        if segment.landslide_risk > BLOCKAGE_RISK_THRESHOLD
            || segment.flood_risk > BLOCKAGE_RISK_THRESHOLD
        {
            alerts.push(Alert {
                kind: AlertKind::Blockage,
                severity: Severity::Critical,
                message: format!(
                    "Critical risk detected on the {} - {} segment. Potential blockage imminent.",
                    segment.from, segment.to
                ),
            });
        }
    }

    if mission.start_sos {
        alerts.push(Alert {
            kind: AlertKind::Mission,
            severity: Severity::Warning,
            message: format!("Mission start hub ({start}) declared emergency SOS status."),
        });
    }
    if mission.goal_sos {
        alerts.push(Alert {
            kind: AlertKind::Mission,
            severity: Severity::Warning,
            message: format!("Mission target hub ({goal}) declared emergency SOS status."),
        });
    }

    alerts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Landslide,
    Flood,
}

impl HazardKind {
    pub fn label(self) -> &'static str {
        match self {
            HazardKind::Landslide => "Landslide Risk",
            HazardKind::Flood => "Flood Potential",
        }
    }

    fn risk_of(self, corridor: &Corridor) -> f64 {
        match self {
            HazardKind::Landslide => corridor.landslide_risk,
            HazardKind::Flood => corridor.flood_risk,
        }
    }
}

/// Worst segment of a route for one hazard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskInsight {
    pub hazard: HazardKind,
    /// `From - To` of the segment.
    pub location: String,
    pub risk: f64,
}

impl RiskInsight {
    pub fn percent(&self) -> String {
        format!("{:.0}%", self.risk * 100.0)
    }
}

/// Highest landslide and highest flood segment of `route`, each reported
/// only when above [`INSIGHT_RISK_THRESHOLD`]. The first segment wins ties.
pub fn risk_insights(route: &Route) -> Vec<RiskInsight> {
    [HazardKind::Landslide, HazardKind::Flood]
        .into_iter()
        .filter_map(|hazard| {
            let worst = route.segments.iter().fold(None::<&Corridor>, |best, segment| {
                match best {
                    Some(current) if hazard.risk_of(current) >= hazard.risk_of(segment) => best,
                    _ => Some(segment),
                }
            })?;
            let risk = hazard.risk_of(worst);
            (risk > INSIGHT_RISK_THRESHOLD).then(|| RiskInsight {
                hazard,
                location: format!("{} - {}", worst.from, worst.to),
                risk,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    Accessible,
    Degraded,
    Critical,
}

impl AccessStatus {
    pub fn for_safety(safety: f64) -> Self {
        if safety > ACCESSIBLE_FLOOR {
            AccessStatus::Accessible
        } else if safety > DEGRADED_FLOOR {
            AccessStatus::Degraded
        } else {
            AccessStatus::Critical
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessStatus::Accessible => "ACCESSIBLE",
            AccessStatus::Degraded => "DEGRADED",
            AccessStatus::Critical => "CRITICAL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubAccessibility {
    pub name: String,
    pub safety: f64,
    pub status: AccessStatus,
}

/// Accessibility of every hub under the given weather, in repository order.
///
/// Every corridor touching a hub counts, restricted ones included. A hub with
/// no corridors is judged on rainfall alone.
pub fn hub_accessibility(network: &RoadNetwork, weather: &WeatherSnapshot) -> Vec<HubAccessibility> {
    let weather_factor = weather.rainfall_mm / ACCESSIBILITY_RAIN_SCALE_MM;

    network
        .hubs()
        .iter()
        .enumerate()
        .map(|(index, hub)| {
            let (total, count) = network
                .incident_corridors(index)
                .fold((0.0, 0usize), |(total, count), (_, corridor)| {
                    (total + corridor.combined_risk(), count + 1)
                });
            let mean_risk = total / count.max(1) as f64;
            let safety = (1.0 - (mean_risk + weather_factor)).max(0.0);
            HubAccessibility {
                name: hub.name.clone(),
                safety,
                status: AccessStatus::for_safety(safety),
            }
        })
        .collect()
}
