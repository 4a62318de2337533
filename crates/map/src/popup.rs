use data::feature::{Feature, FeatureCollection};
use foundation::geo::LngLat;

use crate::engine::{Cursor, MapEngine};
use crate::layers::LayerId;
use crate::registry::LayerRegistry;

/// Default hit radius in degree space; roughly 30 m at mid latitudes.
const DEFAULT_HIT_RADIUS_DEG: f64 = 0.0003;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupError {
    AlreadyAttached(LayerId),
    UnknownLayer(LayerId),
}

impl std::fmt::Display for PopupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopupError::AlreadyAttached(id) => {
                write!(f, "popup handlers already attached to layer {id}")
            }
            PopupError::UnknownLayer(id) => {
                write!(f, "layer {id} is not managed by the registry")
            }
        }
    }
}

impl std::error::Error for PopupError {}

/// Click and hover interaction over point layers.
///
/// Attachment is explicit and fails loudly on a repeat attach, so handlers
/// can never be double-registered.
#[derive(Debug)]
pub struct PopupController {
    attached: Vec<LayerId>,
    hit_radius_deg: f64,
    hovering: bool,
}

impl Default for PopupController {
    fn default() -> Self {
        Self {
            attached: Vec::new(),
            hit_radius_deg: DEFAULT_HIT_RADIUS_DEG,
            hovering: false,
        }
    }
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hit_radius_deg(hit_radius_deg: f64) -> Self {
        Self {
            hit_radius_deg,
            ..Self::default()
        }
    }

    pub fn attach(&mut self, registry: &LayerRegistry, id: LayerId) -> Result<(), PopupError> {
        if registry.definition(id).is_none() {
            return Err(PopupError::UnknownLayer(id));
        }
        if self.attached.contains(&id) {
            return Err(PopupError::AlreadyAttached(id));
        }
        self.attached.push(id);
        Ok(())
    }

    pub fn attached(&self) -> &[LayerId] {
        &self.attached
    }

    /// The feature under the pointer, if any.
    ///
    /// Ordering contract:
    /// - Only attached layers that are currently registered with the engine
    ///   participate, each through its own filter.
    /// - The nearest feature within the hit radius wins; at equal distance,
    ///   the lower source index wins.
    pub fn hit<'a>(
        &self,
        registry: &LayerRegistry,
        engine: &dyn MapEngine,
        source: &'a FeatureCollection,
        at: LngLat,
    ) -> Option<&'a Feature> {
        let max_dist2 = self.hit_radius_deg * self.hit_radius_deg;
        let mut best: Option<(f64, usize)> = None;

        for id in &self.attached {
            let Some(definition) = registry.definition(*id) else {
                continue;
            };
            if !engine.has_layer(*id) {
                continue;
            }
            for (index, feature) in source.features().iter().enumerate() {
                if !definition.filter.matches(feature) {
                    continue;
                }
                let d2 = at.dist2_deg(feature.location);
                if d2 > max_dist2 {
                    continue;
                }
                let closer = match best {
                    None => true,
                    Some((best_d2, best_index)) => {
                        d2 < best_d2 || (d2 == best_d2 && index < best_index)
                    }
                };
                if closer {
                    best = Some((d2, index));
                }
            }
        }

        best.map(|(_, index)| &source.features()[index])
    }

    /// Handle a click. A hit shows a popup anchored at the feature and
    /// returns true.
    pub fn handle_click(
        &self,
        registry: &LayerRegistry,
        engine: &mut dyn MapEngine,
        source: &FeatureCollection,
        at: LngLat,
    ) -> bool {
        let Some(feature) = self.hit(registry, &*engine, source, at) else {
            return false;
        };
        let anchor = feature.location;
        let text = popup_text(feature);
        engine.show_popup(anchor, text);
        true
    }

    /// Handle pointer movement; toggles the pointer cursor on hover
    /// enter/leave. `at` is `None` when the pointer leaves the map.
    pub fn handle_hover(
        &mut self,
        registry: &LayerRegistry,
        engine: &mut dyn MapEngine,
        source: &FeatureCollection,
        at: Option<LngLat>,
    ) {
        let over = match at {
            Some(at) => self.hit(registry, &*engine, source, at).is_some(),
            None => false,
        };
        if over != self.hovering {
            self.hovering = over;
            let cursor = if over { Cursor::Pointer } else { Cursor::Default };
            engine.set_cursor(cursor);
        }
    }
}

/// Popup body for a feature, one attribute per line.
pub fn popup_text(feature: &Feature) -> String {
    format!(
        "{}\n{}\nBest for: {}\nNoise: {}",
        feature.name, feature.vibe, feature.best_for, feature.noise
    )
}
