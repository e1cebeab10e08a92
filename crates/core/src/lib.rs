pub mod config;
pub mod entity;
pub mod indicator;

pub use config::GeneratorConfig;
pub use entity::*;
pub use indicator::*;
