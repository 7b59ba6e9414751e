//! Traversal cost models for the two routing modes.
//!
//! Each mode is encapsulated behind the [`CostModel`] trait so the solver can
//! stay agnostic of how a corridor is weighed. [`cost_model_for`] selects the
//! model for a [`RouteMode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::network::Corridor;
use crate::weather::WeatherSnapshot;

/// Landslide contribution to the hazard score per unit of risk.
pub const LANDSLIDE_WEIGHT: f64 = 2.5;
/// Flood contribution to the hazard score per unit of risk.
pub const FLOOD_WEIGHT: f64 = 1.5;
/// Slope (degrees) equivalent to one unit of hazard.
pub const SLOPE_DIVISOR: f64 = 15.0;
/// Kilometres of detour one unit of hazard is worth in safest mode.
pub const HAZARD_PENALTY_KM: f64 = 150.0;
/// Surcharge per unit of missing road quality in shortcut mode.
pub const QUALITY_SURCHARGE: f64 = 0.1;
/// Discount applied to restricted shortcuts during an emergency.
pub const EMERGENCY_SHORTCUT_FACTOR: f64 = 0.5;

/// Routing objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Minimise hazard-adjusted distance.
    #[default]
    Safest,
    /// Minimise distance with a light road-quality surcharge.
    Shortcut,
}

impl RouteMode {
    pub const ALL: [RouteMode; 2] = [RouteMode::Safest, RouteMode::Shortcut];

    /// The other mode, used as the alternative when one mode is in focus.
    pub fn counterpart(self) -> Self {
        match self {
            RouteMode::Safest => RouteMode::Shortcut,
            RouteMode::Shortcut => RouteMode::Safest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMode::Safest => "safest",
            RouteMode::Shortcut => "shortcut",
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "safest" => Ok(RouteMode::Safest),
            "shortcut" => Ok(RouteMode::Shortcut),
            _ => Err(Error::UnknownRouteMode {
                value: value.to_string(),
            }),
        }
    }
}

/// Converts a corridor and the live conditions into a traversal weight.
pub trait CostModel: Send + Sync {
    /// The mode this model implements.
    fn mode(&self) -> RouteMode;

    /// Positive weight for traversing `corridor`.
    fn weight(&self, corridor: &Corridor, weather: &WeatherSnapshot, is_emergency: bool) -> f64;
}

/// Hazard-dominated cost: distance plus a penalty growing with landslide and
/// flood risk (amplified by rainfall) and with slope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafestCost;

impl SafestCost {
    /// Composite hazard score of a corridor under the given weather.
    pub fn hazard(corridor: &Corridor, weather: &WeatherSnapshot) -> f64 {
        let multiplier = weather.hazard_multiplier();
        corridor.landslide_risk * LANDSLIDE_WEIGHT * multiplier
            + corridor.flood_risk * FLOOD_WEIGHT * multiplier
            + corridor.slope_degrees / SLOPE_DIVISOR
    }
}

impl CostModel for SafestCost {
    fn mode(&self) -> RouteMode {
        RouteMode::Safest
    }

    fn weight(&self, corridor: &Corridor, weather: &WeatherSnapshot, _is_emergency: bool) -> f64 {
        corridor.distance_km + Self::hazard(corridor, weather) * HAZARD_PENALTY_KM
    }
}

/// Distance-dominated cost. Restricted shortcuts are discounted during an
/// emergency so relief traffic is steered onto them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutCost;

impl CostModel for ShortcutCost {
    fn mode(&self) -> RouteMode {
        RouteMode::Shortcut
    }

    fn weight(&self, corridor: &Corridor, _weather: &WeatherSnapshot, is_emergency: bool) -> f64 {
        let weight =
            corridor.distance_km * (1.0 + (1.0 - corridor.road_quality) * QUALITY_SURCHARGE);
        if corridor.is_restricted() && is_emergency {
            weight * EMERGENCY_SHORTCUT_FACTOR
        } else {
            weight
        }
    }
}

/// Select the cost model for a routing mode.
pub fn cost_model_for(mode: RouteMode) -> &'static dyn CostModel {
    match mode {
        RouteMode::Safest => &SafestCost,
        RouteMode::Shortcut => &ShortcutCost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::corridor;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn safest_weight_matches_formula() {
        // Guwahati-Shillong at 45mm of rain.
        let mut c = corridor("1", "A", "B", 98.0);
        c.slope_degrees = 12.0;
        c.landslide_risk = 0.3;
        c.flood_risk = 0.1;
        let weather = WeatherSnapshot::from_rainfall(45.0);

        let hazard = 0.3 * 2.5 * 1.45 + 0.1 * 1.5 * 1.45 + 12.0 / 15.0;
        assert!(approx(SafestCost::hazard(&c, &weather), hazard));
        assert!(approx(SafestCost.weight(&c, &weather, false), 98.0 + hazard * 150.0));
    }

    #[test]
    fn shortcut_weight_surcharges_poor_roads() {
        let mut c = corridor("1", "A", "B", 100.0);
        c.road_quality = 0.5;
        let weather = WeatherSnapshot::default();
        assert!(approx(ShortcutCost.weight(&c, &weather, false), 105.0));
        assert!(approx(ShortcutCost.weight(&c, &weather, true), 105.0));
    }

    #[test]
    fn restricted_shortcut_is_halved_only_in_emergency() {
        let mut c = corridor("sc1", "A", "B", 280.0);
        c.road_quality = 0.2;
        c.is_emergency_shortcut = Some(true);
        let weather = WeatherSnapshot::default();
        let full = 280.0 * 1.08;
        assert!(approx(ShortcutCost.weight(&c, &weather, false), full));
        assert!(approx(ShortcutCost.weight(&c, &weather, true), full * 0.5));
    }

    #[test]
    fn safest_weight_never_decreases_with_rain() {
        let mut c = corridor("1", "A", "B", 50.0);
        c.landslide_risk = 0.4;
        c.flood_risk = 0.2;
        let mut previous = 0.0;
        for rainfall in [0.0, 10.0, 45.0, 100.0, 250.0] {
            let weight = SafestCost.weight(&c, &WeatherSnapshot::from_rainfall(rainfall), false);
            assert!(weight >= previous);
            previous = weight;
        }
    }

    #[test]
    fn selector_returns_matching_model() {
        for mode in RouteMode::ALL {
            assert_eq!(cost_model_for(mode).mode(), mode);
        }
    }

    #[test]
    fn mode_round_trips_through_display() {
        assert_eq!("Shortcut".parse::<RouteMode>().unwrap(), RouteMode::Shortcut);
        assert_eq!(RouteMode::Safest.counterpart(), RouteMode::Shortcut);
        assert_eq!(RouteMode::Shortcut.to_string(), "shortcut");
    }
}
