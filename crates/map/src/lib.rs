pub mod engine;
pub mod layers;
pub mod popup;
pub mod registry;
pub mod surface;
pub mod symbology;

pub use engine::*;
pub use layers::*;
pub use registry::*;
pub use surface::*;
