pub mod feature;
pub mod loader;

pub use feature::*;
pub use loader::*;
