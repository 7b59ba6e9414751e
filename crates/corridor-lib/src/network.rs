use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Dataset bundled with the library: ten North-East India hubs and the road
/// corridors between them.
const BUILTIN_DATASET: &str = include_str!("../data/northeast.json");

/// Minimum similarity score for a hub name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Named location node in the routing graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Visibility class of a corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorridorClass {
    Ordinary,
    Restricted,
}

impl CorridorClass {
    fn label(self) -> &'static str {
        match self {
            CorridorClass::Ordinary => "ordinary",
            CorridorClass::Restricted => "restricted",
        }
    }
}

/// Undirected road segment between two hubs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub id: String,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub slope_degrees: f64,
    /// Surface quality from 0 (impassable) to 1 (perfect).
    pub road_quality: f64,
    pub landslide_risk: f64,
    pub flood_risk: f64,
    pub is_tribal_region: bool,
    /// `Some(true)` marks a restricted relief/service track. The flag is kept
    /// tri-state because an absent marking and an explicit `false` are
    /// treated differently during emergencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_emergency_shortcut: Option<bool>,
}

impl Corridor {
    /// `true` when the corridor is explicitly marked as a restricted shortcut.
    pub fn is_restricted(&self) -> bool {
        self.is_emergency_shortcut == Some(true)
    }

    pub fn class(&self) -> CorridorClass {
        if self.is_restricted() {
            CorridorClass::Restricted
        } else {
            CorridorClass::Ordinary
        }
    }

    /// Whether this corridor joins the two named hubs, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The hub at the other end of the corridor when entering from `hub`.
    pub fn other_end(&self, hub: &str) -> Option<&str> {
        if self.from == hub {
            Some(&self.to)
        } else if self.to == hub {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Combined landslide and flood risk for the segment.
    pub fn combined_risk(&self) -> f64 {
        self.landslide_risk + self.flood_risk
    }

    /// Validate attribute ranges.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidCorridor {
            corridor: self.id.clone(),
            message,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("corridor id must not be empty".to_string()));
        }
        if self.from == self.to {
            return Err(invalid(format!(
                "corridor must join two distinct hubs, got {} twice",
                self.from
            )));
        }
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(invalid(
                "distanceKm must be a finite positive number".to_string(),
            ));
        }
        if !self.slope_degrees.is_finite() || self.slope_degrees < 0.0 {
            return Err(invalid(
                "slopeDegrees must be finite and non-negative".to_string(),
            ));
        }

        let unit_fields = [
            (self.road_quality, "roadQuality"),
            (self.landslide_risk, "landslideRisk"),
            (self.flood_risk, "floodRisk"),
        ];
        for (value, field) in unit_fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{field} must lie within [0, 1]")));
            }
        }

        Ok(())
    }
}

/// Predefined relief corridor offered as a quick mission preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyCorridor {
    pub label: String,
    pub start: String,
    pub end: String,
}

/// Serialised form of a network dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDocument {
    pub hubs: Vec<Hub>,
    pub corridors: Vec<Corridor>,
    #[serde(default)]
    pub emergency_corridors: Vec<EmergencyCorridor>,
}

/// Immutable hub-and-corridor repository consumed by the routing engine.
///
/// Hubs and corridors keep the order in which they were supplied; the search
/// relies on that order for deterministic tie-breaking. Clones share the
/// underlying storage.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    hubs: Arc<[Hub]>,
    corridors: Arc<[Corridor]>,
    name_to_index: Arc<HashMap<String, usize>>,
    incident: Arc<[Vec<usize>]>,
    emergency_corridors: Arc<[EmergencyCorridor]>,
}

impl RoadNetwork {
    /// Build a validated network from hubs and corridors.
    pub fn new(hubs: Vec<Hub>, corridors: Vec<Corridor>) -> Result<Self> {
        Self::from_document(NetworkDocument {
            hubs,
            corridors,
            emergency_corridors: Vec::new(),
        })
    }

    /// Build a validated network from a decoded dataset document.
    pub fn from_document(document: NetworkDocument) -> Result<Self> {
        let NetworkDocument {
            hubs,
            corridors,
            emergency_corridors,
        } = document;

        let mut name_to_index = HashMap::with_capacity(hubs.len());
        for (index, hub) in hubs.iter().enumerate() {
            if name_to_index.insert(hub.name.clone(), index).is_some() {
                return Err(Error::DuplicateHub {
                    name: hub.name.clone(),
                });
            }
        }

        let mut incident = vec![Vec::new(); hubs.len()];
        let mut seen: HashMap<(usize, usize, CorridorClass), usize> = HashMap::new();

        for (index, corridor) in corridors.iter().enumerate() {
            corridor.validate()?;

            let lookup = |hub: &str| {
                name_to_index
                    .get(hub)
                    .copied()
                    .ok_or_else(|| Error::UnknownEndpoint {
                        corridor: corridor.id.clone(),
                        hub: hub.to_string(),
                    })
            };
            let from = lookup(&corridor.from)?;
            let to = lookup(&corridor.to)?;

            let key = (from.min(to), from.max(to), corridor.class());
            if let Some(&existing) = seen.get(&key) {
                return Err(Error::DuplicateCorridor {
                    from: corridor.from.clone(),
                    to: corridor.to.clone(),
                    class: corridor.class().label(),
                    existing: corridors[existing].id.clone(),
                });
            }
            seen.insert(key, index);

            incident[from].push(index);
            incident[to].push(index);
        }

        for preset in &emergency_corridors {
            for hub in [&preset.start, &preset.end] {
                if !name_to_index.contains_key(hub.as_str()) {
                    return Err(Error::UnknownEndpoint {
                        corridor: preset.label.clone(),
                        hub: hub.clone(),
                    });
                }
            }
        }

        debug!(
            hubs = hubs.len(),
            corridors = corridors.len(),
            presets = emergency_corridors.len(),
            "built road network"
        );

        Ok(Self {
            hubs: hubs.into(),
            corridors: corridors.into(),
            name_to_index: Arc::new(name_to_index),
            incident: incident.into(),
            emergency_corridors: emergency_corridors.into(),
        })
    }

    /// Decode and validate a JSON dataset.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: NetworkDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Decode and validate a JSON dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: NetworkDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load a JSON dataset from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// The North-East India dataset shipped with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Hubs in repository order.
    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    /// Corridors in repository order.
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn emergency_corridors(&self) -> &[EmergencyCorridor] {
        &self.emergency_corridors
    }

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    /// Position of a hub in repository order, by exact name.
    pub fn hub_index(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    pub fn hub(&self, index: usize) -> Option<&Hub> {
        self.hubs.get(index)
    }

    pub fn hub_by_name(&self, name: &str) -> Option<&Hub> {
        self.hub_index(name).and_then(|index| self.hub(index))
    }

    pub fn corridor(&self, index: usize) -> Option<&Corridor> {
        self.corridors.get(index)
    }

    /// Corridors touching a hub, with their repository indices, in
    /// repository order.
    pub fn incident_corridors(&self, hub: usize) -> impl Iterator<Item = (usize, &Corridor)> {
        self.incident
            .get(hub)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&index| (index, &self.corridors[index]))
    }

    /// Resolve a hub by name, offering close matches when it is unknown.
    pub fn resolve_hub(&self, name: &str) -> Result<&Hub> {
        self.hub_by_name(name).ok_or_else(|| Error::UnknownHub {
            name: name.to_string(),
            suggestions: self.fuzzy_hub_matches(name, 3),
        })
    }

    /// Hub names resembling `query`, best match first.
    pub fn fuzzy_hub_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .hubs
            .iter()
            .map(|hub| {
                let score = strsim::jaro_winkler(&needle, &hub.name.to_lowercase());
                (score, hub.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
