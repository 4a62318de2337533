use foundation::geo::LngLat;
use serde::Deserialize;
use tracing::{info, warn};

use crate::feature::{Feature, FeatureCollection, NoiseLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The server answered with a non-success status.
    Fetch { url: String, status: u16 },
    /// The request never produced a response (DNS, connect, TLS, ...).
    Http { url: String, message: String },
    /// The body was not a usable feature collection.
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch { url, status } => {
                write!(f, "failed to load {url}: HTTP {status}")
            }
            LoadError::Http { url, message } => {
                write!(f, "request to {url} failed: {message}")
            }
            LoadError::Parse(msg) => write!(f, "malformed feature collection: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

// Wire shape: plain GeoJSON. Coordinates stay untyped until we know the
// geometry kind, since non-point geometries nest arbitrarily deep.
#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: RawGeometry,
    #[serde(default)]
    properties: RawProperties,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default)]
    name: String,
    #[serde(default)]
    vibe: String,
    #[serde(default)]
    best_for: String,
    #[serde(default)]
    noise: NoiseLevel,
}

/// Parse a GeoJSON feature collection of study spots.
///
/// Notes:
/// - The top-level `type` must be `FeatureCollection`.
/// - Non-point geometries are skipped with a warning; this dataset only
///   carries points.
/// - Missing `vibe`/`best_for` default to empty strings, missing or unknown
///   `noise` to `other`.
pub fn parse_feature_collection(bytes: &[u8]) -> Result<FeatureCollection, LoadError> {
    let raw: RawCollection =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Parse(e.to_string()))?;

    if raw.kind != "FeatureCollection" {
        return Err(LoadError::Parse(format!(
            "expected a FeatureCollection, got {:?}",
            raw.kind
        )));
    }

    let mut features = Vec::with_capacity(raw.features.len());
    for feature in raw.features {
        if feature.geometry.kind != "Point" {
            warn!(kind = %feature.geometry.kind, "skipping non-point feature");
            continue;
        }
        let location = point_coordinates(&feature.geometry.coordinates)?;
        let p = feature.properties;
        features.push(Feature {
            location,
            name: p.name,
            vibe: p.vibe,
            best_for: p.best_for,
            noise: p.noise,
        });
    }

    Ok(FeatureCollection::new(features))
}

fn point_coordinates(value: &serde_json::Value) -> Result<LngLat, LoadError> {
    // GeoJSON allows a trailing altitude; ignore anything past lng/lat.
    let coords = value
        .as_array()
        .ok_or_else(|| LoadError::Parse("point coordinates are not an array".into()))?;
    let [lng, lat] = [coords.first(), coords.get(1)].map(|c| c.and_then(|v| v.as_f64()));
    match (lng, lat) {
        (Some(lng), Some(lat)) => Ok(LngLat::new(lng, lat)),
        _ => Err(LoadError::Parse(
            "point coordinates need numeric lng and lat".into(),
        )),
    }
}

/// Fetch and parse the dataset. Runs exactly once, before any layer
/// registration; the caller awaits it and halts on failure. No retries.
pub async fn load(client: &reqwest::Client, url: &str) -> Result<FeatureCollection, LoadError> {
    let response = client.get(url).send().await.map_err(|e| LoadError::Http {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|e| LoadError::Http {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let collection = parse_feature_collection(&bytes)?;
    info!(url, features = collection.len(), "loaded study spot data");
    Ok(collection)
}
