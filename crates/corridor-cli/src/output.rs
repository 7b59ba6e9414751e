//! Output formatting for mission reports, hub tables and presets.
//!
//! Every renderer returns the text to print so callers decide where it goes.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use corridor_lib::{
    EmergencyCorridor, HubAccessibility, MissionReport, RenderMode, RouteMode, RouteSummary,
    WeatherSnapshot,
};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Markdown.
    Rich,
    /// Compact note listing hub names only.
    Note,
}

impl OutputFormat {
    fn library_mode(self) -> RenderMode {
        match self {
            OutputFormat::Rich => RenderMode::RichText,
            OutputFormat::Note => RenderMode::Note,
            OutputFormat::Text | OutputFormat::Json => RenderMode::PlainText,
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    json.push('\n');
    Ok(json)
}

/// Render a mission report in the requested format.
pub fn render_report(
    report: &MissionReport,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(TextRenderer::new(palette).report(report)),
        OutputFormat::Rich | OutputFormat::Note => Ok(report.render(format.library_mode())),
    }
}

/// Render the hub accessibility table.
pub fn render_hubs(
    rows: &[HubAccessibility],
    weather: &WeatherSnapshot,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(rows);
    }

    let p = &palette;
    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    let mut buffer = String::new();
    match format {
        OutputFormat::Rich => {
            let _ = writeln!(buffer, "| Hub | Safety | Status |");
            let _ = writeln!(buffer, "|---|---|---|");
            for row in rows {
                let _ = writeln!(
                    buffer,
                    "| {} | {:.0}% | `{}` |",
                    row.name,
                    row.safety * 100.0,
                    row.status
                );
            }
        }
        _ => {
            let _ = writeln!(
                buffer,
                "Hub accessibility at {}{}mm{} rainfall:",
                p.cyan, weather.rainfall_mm, p.reset
            );
            for row in rows {
                let _ = writeln!(
                    buffer,
                    "  {:<width$}  {:>4.0}%  {}{}{}",
                    row.name,
                    row.safety * 100.0,
                    p.for_access(row.status),
                    row.status,
                    p.reset,
                    width = width
                );
            }
        }
    }
    Ok(buffer)
}

/// Render the emergency-corridor presets as a numbered list.
pub fn render_presets(presets: &[EmergencyCorridor], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(presets);
    }

    let mut buffer = String::new();
    if presets.is_empty() {
        let _ = writeln!(buffer, "No emergency corridors defined.");
        return Ok(buffer);
    }
    for (index, preset) in presets.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{:>2}. {} ({} -> {})",
            index + 1,
            preset.label,
            preset.start,
            preset.end
        );
    }
    Ok(buffer)
}

/// Terminal renderer for mission reports with colored badges.
pub struct TextRenderer {
    palette: ColorPalette,
}

impl TextRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn report(&self, report: &MissionReport) -> String {
        let p = &self.palette;
        let mut buffer = String::new();

        let _ = writeln!(
            buffer,
            "Mission {}{}{} -> {}{}{} | rain {}{}mm{} ({}) | emergency {}",
            p.white_bold,
            report.start,
            p.reset,
            p.white_bold,
            report.goal,
            p.reset,
            p.cyan,
            report.weather.rainfall_mm,
            p.reset,
            report.weather.alert_level,
            if report.is_emergency { "ON" } else { "off" }
        );

        for alert in &report.alerts {
            let _ = writeln!(
                buffer,
                "{}[{}]{} {}: {}",
                p.for_severity(alert.severity),
                alert.severity,
                p.reset,
                alert.kind,
                alert.message
            );
        }

        for mode in [report.focus, report.focus.counterpart()] {
            let _ = writeln!(buffer);
            let is_active = mode == report.focus;
            match report.summary(mode) {
                Some(summary) => self.route(&mut buffer, summary, is_active),
                None => {
                    let _ = writeln!(
                        buffer,
                        "{}{}{} no {} route available",
                        self.badge(is_active),
                        Self::badge_text(is_active),
                        p.reset,
                        mode
                    );
                }
            }
        }

        if !report.insights.is_empty() {
            let _ = writeln!(buffer);
            for insight in &report.insights {
                let _ = writeln!(
                    buffer,
                    "{}{}:{} {} {}{}{}",
                    p.gray,
                    insight.hazard.label(),
                    p.reset,
                    insight.location,
                    p.orange,
                    insight.percent(),
                    p.reset
                );
            }
        }

        if let Some(explanation) = &report.explanation {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "{explanation}");
        }

        buffer
    }

    fn badge(&self, is_active: bool) -> &'static str {
        if is_active {
            self.palette.tag_active
        } else {
            self.palette.tag_alternative
        }
    }

    fn badge_text(is_active: bool) -> &'static str {
        if is_active {
            " ACTIVE "
        } else {
            " ALT "
        }
    }

    fn route(&self, buffer: &mut String, summary: &RouteSummary, is_active: bool) {
        let p = &self.palette;
        let risk_color = p.for_risk(summary.risk_band);
        let _ = writeln!(
            buffer,
            "{}{}{} {} route: {} km, {} hops, safety {}{:.0}%{} ({}{}{} risk)",
            self.badge(is_active),
            Self::badge_text(is_active),
            p.reset,
            mode_title(summary.mode),
            format_with_separators(summary.total_distance_km.round() as u64),
            summary.hops,
            risk_color,
            summary.avg_safety_score * 100.0,
            p.reset,
            risk_color,
            summary.risk_band,
            p.reset
        );

        let _ = writeln!(buffer, "  {}{}{}", p.white_bold, summary.start, p.reset);
        for step in &summary.steps {
            let marker = if step.restricted {
                format!(" {}[restricted]{}", p.red, p.reset)
            } else {
                String::new()
            };
            let _ = writeln!(
                buffer,
                "  {}│{} {:.0} km via {}{}",
                p.gray, p.reset, step.distance_km, step.corridor, marker
            );
            let _ = writeln!(buffer, "  {}{}{}", p.white_bold, step.to, p.reset);
        }
    }
}

fn mode_title(mode: RouteMode) -> &'static str {
    match mode {
        RouteMode::Safest => "Safest",
        RouteMode::Shortcut => "Shortcut",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_lib::{compute_routes, MissionStatus, RoadNetwork, RouteRequest};

    fn report(focus: RouteMode) -> MissionReport {
        let network = RoadNetwork::builtin().unwrap();
        let request = RouteRequest::new("Guwahati", "Tawang").emergency(true);
        let routes = compute_routes(&network, &request);
        MissionReport::build(&request, &routes, focus, MissionStatus::default(), None).unwrap()
    }

    #[test]
    fn plain_text_has_no_escape_codes() {
        let text = render_report(
            &report(RouteMode::Shortcut),
            OutputFormat::Text,
            ColorPalette::plain(),
        )
        .unwrap();
        assert!(!text.contains('\x1b'));
        assert!(text.contains(" ACTIVE  Shortcut route: 280 km, 1 hops"));
        assert!(text.contains("via sc1 [restricted]"));
        assert!(text.contains(" ALT  Safest route"));
    }

    #[test]
    fn colored_text_uses_palette() {
        let text = render_report(
            &report(RouteMode::Safest),
            OutputFormat::Text,
            ColorPalette::colored(),
        )
        .unwrap();
        assert!(text.contains(crate::terminal::colors::TAG_ACTIVE));
    }

    #[test]
    fn json_report_is_parseable() {
        let text =
            render_report(&report(RouteMode::Safest), OutputFormat::Json, ColorPalette::plain())
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["focus"], "safest");
        assert_eq!(value["shortcut"]["path"][1], "Tawang");
    }

    #[test]
    fn presets_are_numbered() {
        let network = RoadNetwork::builtin().unwrap();
        let text = render_presets(network.emergency_corridors(), OutputFormat::Text).unwrap();
        assert!(text.starts_with(" 1. Air-Evac: Guwahati → Tawang (Guwahati -> Tawang)"));
        assert_eq!(text.lines().count(), 3);
    }
}
