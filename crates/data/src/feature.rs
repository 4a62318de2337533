use foundation::geo::LngLat;
use serde::{Deserialize, Serialize};

/// Noise category of a study spot.
///
/// Any wire value outside the three known categories deserializes to
/// `Other`, which the symbology treats as its own visual bucket.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Quiet,
    Mixed,
    Social,
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoiseLevel::Quiet => "quiet",
            NoiseLevel::Mixed => "mixed",
            NoiseLevel::Social => "social",
            NoiseLevel::Other => "other",
        };
        f.write_str(s)
    }
}

/// A single study spot. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub location: LngLat,
    pub name: String,
    pub vibe: String,
    pub best_for: String,
    pub noise: NoiseLevel,
}

/// The dataset: loaded once at startup, read-only afterwards.
///
/// Other components borrow features out of this collection; nothing copies
/// it. Feature order is the wire order, which the popup hit-test relies on
/// for tie-breaking.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
