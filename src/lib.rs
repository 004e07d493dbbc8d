pub mod csv_processor;
pub mod pipeline;
pub mod translation;
pub mod utils;

pub use csv_processor::{parse_records, JsonRowWriter, MapReader};
pub use pipeline::{run_transform, TransformReport};
pub use translation::{TranslatedRow, TranslationTable, Translator};
pub use utils::{MapTransformError, Result, TransformConfig, USAGE};
