//! Route command handler for computing safest and shortcut routes between hubs.

use anyhow::{bail, Context, Result};
use tracing::info;

use corridor_lib::{
    compute_routes, AlertLevel, BriefingExplainer, MissionReport, MissionStatus, RoadNetwork,
    RouteExplainer, RouteMode, RouteRequest, WeatherSnapshot,
};

use crate::output::{render_report, OutputFormat};
use crate::terminal::ColorPalette;

/// Rainfall assumed when none is given on the command line.
pub const DEFAULT_RAINFALL_MM: f64 = 45.0;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting hub name.
    pub from: String,
    /// Destination hub name.
    pub to: String,
    /// Current rainfall in millimetres.
    pub rainfall: f64,
    /// Seven-day rainfall average; defaults to the current reading.
    pub rainfall_7day: Option<f64>,
    /// Alert level override; derived from rainfall when absent.
    pub alert: Option<AlertLevel>,
    /// Force emergency routing.
    pub emergency: bool,
    /// The start hub declared SOS.
    pub sos_start: bool,
    /// The goal hub declared SOS.
    pub sos_goal: bool,
    /// Mode shown as the active route.
    pub focus: RouteMode,
    /// Attach a route explanation.
    pub explain: bool,
}

impl RouteCommandArgs {
    /// Arguments for a plain request between two hubs.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rainfall: DEFAULT_RAINFALL_MM,
            rainfall_7day: None,
            alert: None,
            emergency: false,
            sos_start: false,
            sos_goal: false,
            focus: RouteMode::Safest,
            explain: false,
        }
    }

    pub fn weather(&self) -> Result<WeatherSnapshot> {
        let mut weather = WeatherSnapshot::from_rainfall(self.rainfall);
        if let Some(average) = self.rainfall_7day {
            weather.rainfall_7day_avg = average;
        }
        if let Some(alert) = self.alert {
            weather.alert_level = alert;
        }
        weather.validate().context("invalid weather options")?;
        Ok(weather)
    }

    pub fn mission(&self) -> MissionStatus {
        MissionStatus {
            start_sos: self.sos_start,
            goal_sos: self.sos_goal,
        }
    }

    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> Result<RouteRequest> {
        Ok(RouteRequest::new(self.from.as_str(), self.to.as_str())
            .with_weather(self.weather()?)
            .emergency(self.mission().emergency_active(self.emergency)))
    }
}

/// Handle the route subcommand.
///
/// Computes both routes for the request and renders the mission report.
pub fn handle_route_command(
    network: &RoadNetwork,
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    network.resolve_hub(&args.from)?;
    network.resolve_hub(&args.to)?;

    let request = args.to_request()?;
    info!(
        start = %request.start,
        goal = %request.goal,
        rainfall_mm = request.weather.rainfall_mm,
        emergency = request.is_emergency,
        "computing routes"
    );

    let routes = compute_routes(network, &request);
    if routes.is_empty() {
        bail!(
            "No route found between {} and {}{}",
            request.start,
            request.goal,
            if request.is_emergency {
                ""
            } else {
                " (restricted corridors are closed outside emergencies)"
            }
        );
    }

    let explainer = BriefingExplainer;
    let explainer: Option<&dyn RouteExplainer> = if args.explain {
        Some(&explainer)
    } else {
        None
    };
    let report = MissionReport::build(&request, &routes, args.focus, args.mission(), explainer)
        .context("failed to build route report for display")?;

    render_report(&report, format, palette)
}
