pub mod reader;
pub mod writer;

pub use reader::{parse_records, MapReader};
pub use writer::JsonRowWriter;
