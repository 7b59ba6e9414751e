//! Common test utilities and fixture helpers.
//!
//! Synthetic hubs and corridors for integration tests, plus helpers to
//! write datasets into temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use corridor_lib::{Corridor, Hub, NetworkDocument, RoadNetwork};
use tempfile::TempDir;

pub fn hub(name: &str) -> Hub {
    Hub {
        name: name.to_string(),
        lat: 0.0,
        lng: 0.0,
    }
}

/// Flat, perfect, risk-free ordinary corridor.
pub fn corridor(id: &str, from: &str, to: &str, distance_km: f64) -> Corridor {
    Corridor {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        distance_km,
        slope_degrees: 0.0,
        road_quality: 1.0,
        landslide_risk: 0.0,
        flood_risk: 0.0,
        is_tribal_region: false,
        is_emergency_shortcut: None,
    }
}

pub fn restricted(id: &str, from: &str, to: &str, distance_km: f64) -> Corridor {
    Corridor {
        is_emergency_shortcut: Some(true),
        ..corridor(id, from, to, distance_km)
    }
}

/// The bundled North-East India network.
pub fn builtin() -> RoadNetwork {
    RoadNetwork::builtin().expect("builtin dataset is valid")
}

/// Temporary directory holding a `network.json` dataset.
pub struct DatasetDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl DatasetDir {
    pub fn with_document(document: &NetworkDocument) -> Self {
        let json = serde_json::to_string_pretty(document).expect("serialise dataset");
        Self::with_contents(&json)
    }

    pub fn with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("network.json");
        fs::write(&path, contents).expect("write dataset");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }
}
