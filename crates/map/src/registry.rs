use tracing::warn;

use crate::engine::MapEngine;
use crate::layers::{LayerDefinition, LayerId};

/// Owns the declarative layer definitions and the mutual-exclusion
/// invariant over them.
///
/// `show`/`hide` are defensive, idempotent operations; `apply` is the
/// transactional path scene transitions use, and it guarantees that no
/// managed layer outside the active set stays visible.
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    definitions: Vec<LayerDefinition>,
}

impl LayerRegistry {
    pub fn new(definitions: Vec<LayerDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[LayerDefinition] {
        &self.definitions
    }

    pub fn definition(&self, id: LayerId) -> Option<&LayerDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Register the layer with the engine if it is not already present.
    /// Unknown ids are logged and ignored.
    pub fn show(&self, engine: &mut dyn MapEngine, id: LayerId) {
        let Some(definition) = self.definition(id) else {
            warn!(layer = %id, "show of unmanaged layer ignored");
            return;
        };
        if !engine.has_layer(id) {
            engine.add_layer(definition);
        }
    }

    /// Remove the layer from the engine if it is present.
    pub fn hide(&self, engine: &mut dyn MapEngine, id: LayerId) {
        if engine.has_layer(id) {
            engine.remove_layer(id);
        }
    }

    /// Make exactly the layers in `active` visible.
    ///
    /// Hides every managed layer outside the set first, then shows the
    /// active ones, so two exclusive layers are never visible together even
    /// if a scene config is written incorrectly.
    pub fn apply(&self, engine: &mut dyn MapEngine, active: &[LayerId]) {
        for definition in &self.definitions {
            if !active.contains(&definition.id) {
                self.hide(engine, definition.id);
            }
        }
        for id in active {
            self.show(engine, *id);
        }
    }

    /// Single-layer convenience over `apply`.
    pub fn switch_to(&self, engine: &mut dyn MapEngine, id: LayerId) {
        self.apply(engine, &[id]);
    }
}
