// Test-only helpers for `corridor-lib` tests
#![allow(dead_code)]
use crate::network::{Corridor, Hub};

/// Hub at the origin of the coordinate plane.
pub fn hub(name: &str) -> Hub {
    Hub {
        name: name.to_string(),
        lat: 0.0,
        lng: 0.0,
    }
}

/// Flat, perfect, risk-free ordinary corridor.
pub fn corridor(id: &str, from: &str, to: &str, distance_km: f64) -> Corridor {
    CorridorBuilder::new(id, from, to).distance(distance_km).build()
}

/// Builder to create `Corridor` instances in tests with sensible defaults.
pub struct CorridorBuilder {
    corridor: Corridor,
}

impl CorridorBuilder {
    #[must_use]
    pub fn new(id: &str, from: &str, to: &str) -> Self {
        Self {
            corridor: Corridor {
                id: id.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                distance_km: 1.0,
                slope_degrees: 0.0,
                road_quality: 1.0,
                landslide_risk: 0.0,
                flood_risk: 0.0,
                is_tribal_region: false,
                is_emergency_shortcut: None,
            },
        }
    }

    pub fn distance(mut self, km: f64) -> Self {
        self.corridor.distance_km = km;
        self
    }

    pub fn slope(mut self, degrees: f64) -> Self {
        self.corridor.slope_degrees = degrees;
        self
    }

    pub fn quality(mut self, quality: f64) -> Self {
        self.corridor.road_quality = quality;
        self
    }

    pub fn risks(mut self, landslide: f64, flood: f64) -> Self {
        self.corridor.landslide_risk = landslide;
        self.corridor.flood_risk = flood;
        self
    }

    pub fn restricted(mut self) -> Self {
        self.corridor.is_emergency_shortcut = Some(true);
        self
    }

    pub fn marked_ordinary(mut self) -> Self {
        self.corridor.is_emergency_shortcut = Some(false);
        self
    }

    pub fn build(self) -> Corridor {
        self.corridor
    }
}
