pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod shape;
pub mod types;

pub use config::SimConfig;
pub use error::MorphosError;
pub use shape::ShapeKind;
