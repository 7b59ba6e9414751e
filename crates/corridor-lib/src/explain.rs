//! Boundary to route explanation generators.
//!
//! A [`RouteExplainer`] turns a computed route into a short rationale. Real
//! generators live outside this crate (typically a hosted language model fed
//! with [`build_prompt`]); [`explain_or_fallback`] guarantees callers always
//! receive a string even when the generator fails.

use std::fmt::Write;

use tracing::warn;

use crate::cost::RouteMode;
use crate::error::{Error, Result};
use crate::route::Route;
use crate::weather::WeatherSnapshot;

/// Everything an explainer gets to see.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationContext<'a> {
    pub active: &'a Route,
    pub alternative: Option<&'a Route>,
    pub weather: &'a WeatherSnapshot,
    pub is_emergency: bool,
}

/// Produces a short human-readable rationale for the active route.
pub trait RouteExplainer: Send + Sync {
    fn explain(&self, context: &ExplanationContext<'_>) -> Result<String>;
}

/// Deterministic rationale used whenever an explainer fails.
pub fn fallback_explanation(route: &Route) -> String {
    let focus = match route.mode {
        RouteMode::Safest => "terrain stability",
        RouteMode::Shortcut => "transit speed",
    };
    format!("Selected {} route for optimal {focus}.", route.mode)
}

/// Ask `explainer` for a rationale, substituting [`fallback_explanation`] when
/// it errors or returns nothing.
pub fn explain_or_fallback(
    explainer: &dyn RouteExplainer,
    context: &ExplanationContext<'_>,
) -> String {
    match explainer.explain(context) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!(mode = %context.active.mode, "explainer returned an empty rationale");
            fallback_explanation(context.active)
        }
        Err(error) => {
            warn!(mode = %context.active.mode, %error, "explainer failed; using fallback");
            fallback_explanation(context.active)
        }
    }
}

fn safety_percent(route: &Route) -> String {
    format!("{:.0}%", route.avg_safety_score * 100.0)
}

/// Comparison prompt for text-generation backends.
pub fn build_prompt(context: &ExplanationContext<'_>) -> String {
    let active = context.active;
    let mode_upper = active.mode.as_str().to_uppercase();
    let (alt_label, alt_distance, alt_safety) = match context.alternative {
        Some(route) => (
            route.mode.as_str().to_uppercase(),
            format!("{}", route.total_distance_km),
            safety_percent(route),
        ),
        None => ("N/A".to_string(), "N/A".to_string(), "N/A".to_string()),
    };

    let mut prompt = String::new();
    let _ = writeln!(prompt, "Compare these two routes in North-East India:");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "ACTIVE ROUTE ({mode_upper}):");
    let _ = writeln!(prompt, "- Path: {}", active.path_label());
    let _ = writeln!(prompt, "- Distance: {} km", active.total_distance_km);
    let _ = writeln!(prompt, "- Safety Index: {}", safety_percent(active));
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "ALTERNATIVE ROUTE ({alt_label}):");
    let _ = writeln!(prompt, "- Distance: {alt_distance} km");
    let _ = writeln!(prompt, "- Safety Index: {alt_safety}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Conditions:");
    let _ = writeln!(prompt, "- Rainfall: {}mm", context.weather.rainfall_mm);
    let _ = writeln!(
        prompt,
        "- Emergency: {}",
        if context.is_emergency { "YES" } else { "NO" }
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Instructions:");
    let _ = writeln!(
        prompt,
        "1. Explain why the {} route was selected as the primary focus.",
        active.mode
    );
    let _ = writeln!(
        prompt,
        "2. Briefly contrast it with the other option (e.g. \"Saves 20km but crosses a high-risk slope\")."
    );
    let _ = writeln!(
        prompt,
        "3. Professional, actionable tone. (2-3 sentences max)."
    );
    prompt
}

/// Offline explainer that summarises the trade-off from the route figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct BriefingExplainer;

impl RouteExplainer for BriefingExplainer {
    fn explain(&self, context: &ExplanationContext<'_>) -> Result<String> {
        let active = context.active;
        if active.is_trivial() {
            return Ok(format!(
                "Already at {}; no travel required.",
                active
                    .destination()
                    .map(|hub| hub.name.as_str())
                    .unwrap_or("the destination")
            ));
        }

        let mut text = format!(
            "The {} route covers {:.0} km via {} with a {} safety index ({} risk).",
            active.mode,
            active.total_distance_km,
            active.path_label(),
            safety_percent(active),
            active.risk_band()
        );

        if let Some(alternative) = context.alternative {
            let distance_delta = alternative.total_distance_km - active.total_distance_km;
            let safety_delta = (active.avg_safety_score - alternative.avg_safety_score) * 100.0;
            let distance_phrase = if distance_delta > 0.0 {
                format!("saves {distance_delta:.0} km")
            } else if distance_delta < 0.0 {
                format!("adds {:.0} km", -distance_delta)
            } else {
                "matches the distance".to_string()
            };
            let safety_phrase = if safety_delta > 0.0 {
                format!("is {safety_delta:.0} points safer")
            } else if safety_delta < 0.0 {
                format!("is {:.0} points less safe", -safety_delta)
            } else {
                "carries the same risk".to_string()
            };
            let _ = write!(
                text,
                " Compared with the {} option it {distance_phrase} and {safety_phrase}.",
                alternative.mode
            );
        }

        if active.has_emergency_shortcut {
            text.push_str(" Uses a restricted emergency corridor.");
        } else if context.is_emergency {
            text.push_str(" No restricted corridor offers an advantage here.");
        }

        Ok(text)
    }
}

/// Explainer that always fails; useful where no generator is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableExplainer;

impl RouteExplainer for UnavailableExplainer {
    fn explain(&self, _context: &ExplanationContext<'_>) -> Result<String> {
        Err(Error::ExplanationUnavailable {
            message: "no explanation backend configured".to_string(),
        })
    }
}
