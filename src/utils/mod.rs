pub mod config;
pub mod errors;

pub use config::{TransformConfig, USAGE};
pub use errors::{MapTransformError, Result};
