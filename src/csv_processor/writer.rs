use crate::translation::TranslatedRow;
use crate::utils::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Collects translated rows and writes them as one JSON array of arrays.
/// The output file is only created by [`JsonRowWriter::finish`].
pub struct JsonRowWriter {
    path: PathBuf,
    rows: Vec<TranslatedRow>,
}

impl JsonRowWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
        }
    }

    pub fn write_row(&mut self, row: TranslatedRow) {
        self.rows.push(row);
    }

    /// Truncates any existing file at the path. Output is compact JSON with no
    /// spaces after separators.
    pub fn finish(self) -> Result<usize> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.rows)?;
        writer.flush()?;
        Ok(self.rows.len())
    }
}
