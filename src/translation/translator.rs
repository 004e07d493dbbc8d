use crate::translation::table::TranslationTable;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

pub type TranslatedRow = Vec<JsonValue>;

/// Maps cells through a [`TranslationTable`], counting every cell the table
/// has no entry for.
#[derive(Debug)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    misses: usize,
    cells: usize,
    missed_values: BTreeMap<String, usize>,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a TranslationTable) -> Self {
        Self {
            table,
            misses: 0,
            cells: 0,
            missed_values: BTreeMap::new(),
        }
    }

    /// Empty cells are dropped. Everything else is trimmed and looked up;
    /// unmatched values are kept as their trimmed string.
    pub fn translate_row<S: AsRef<str>>(&mut self, row: &[S]) -> TranslatedRow {
        let mut out = Vec::with_capacity(row.len());

        for cell in row {
            let cell = cell.as_ref();
            if cell.is_empty() {
                continue;
            }
            out.push(self.translate_cell(cell.trim()));
        }

        out
    }

    fn translate_cell(&mut self, cell: &str) -> JsonValue {
        self.cells += 1;
        match self.table.get(cell) {
            Some(value) => value.clone(),
            None => {
                self.misses += 1;
                *self.missed_values.entry(cell.to_string()).or_insert(0) += 1;
                JsonValue::String(cell.to_string())
            }
        }
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Distinct untranslated values with their occurrence counts.
    pub fn missed_values(&self) -> &BTreeMap<String, usize> {
        &self.missed_values
    }

    pub fn into_missed_values(self) -> BTreeMap<String, usize> {
        self.missed_values
    }
}
