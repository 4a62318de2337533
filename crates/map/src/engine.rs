use foundation::camera::CameraPose;
use foundation::geo::LngLat;

use crate::layers::{LayerDefinition, LayerId};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Seam to the underlying map rendering engine.
///
/// The coordination layer only ever talks to the engine through this trait;
/// engine failures are unspecified and treated as fatal, so nothing here
/// returns a `Result`.
pub trait MapEngine {
    fn add_layer(&mut self, definition: &LayerDefinition);
    fn remove_layer(&mut self, id: LayerId);
    fn has_layer(&self, id: LayerId) -> bool;
    /// Start an animated transition. A new call supersedes any in-flight
    /// transition; nothing queues.
    fn fly_to(&mut self, target: CameraPose, speed: f64);
    /// Recompute the viewport after a container size change.
    fn resize(&mut self);
    fn set_cursor(&mut self, cursor: Cursor);
    fn show_popup(&mut self, anchor: LngLat, text: String);
}

/// Every call an engine can receive, for assertions in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineAction {
    AddLayer(LayerId),
    RemoveLayer(LayerId),
    FlyTo { target: CameraPose, speed: f64 },
    Resize,
    SetCursor(Cursor),
    ShowPopup { anchor: LngLat, text: String },
}

/// In-memory engine that tracks registered layers and records every call.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    layers: Vec<LayerId>,
    actions: Vec<EngineAction>,
    cursor: Cursor,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently registered layers, in registration order.
    pub fn layers(&self) -> &[LayerId] {
        &self.layers
    }

    pub fn actions(&self) -> &[EngineAction] {
        &self.actions
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn take_actions(&mut self) -> Vec<EngineAction> {
        std::mem::take(&mut self.actions)
    }
}

impl MapEngine for RecordingEngine {
    fn add_layer(&mut self, definition: &LayerDefinition) {
        self.layers.push(definition.id);
        self.actions.push(EngineAction::AddLayer(definition.id));
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.layers.retain(|l| *l != id);
        self.actions.push(EngineAction::RemoveLayer(id));
    }

    fn has_layer(&self, id: LayerId) -> bool {
        self.layers.contains(&id)
    }

    fn fly_to(&mut self, target: CameraPose, speed: f64) {
        self.actions.push(EngineAction::FlyTo { target, speed });
    }

    fn resize(&mut self) {
        self.actions.push(EngineAction::Resize);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.actions.push(EngineAction::SetCursor(cursor));
    }

    fn show_popup(&mut self, anchor: LngLat, text: String) {
        self.actions.push(EngineAction::ShowPopup { anchor, text });
    }
}
