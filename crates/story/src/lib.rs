pub mod orchestrator;
pub mod scenes;
pub mod steps;

pub use orchestrator::*;
pub use scenes::*;
pub use steps::*;
