use crate::utils::{MapTransformError, Result};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw cell value to canonical identifier. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    terms: HashMap<String, JsonValue>,
}

impl TranslationTable {
    pub fn new(terms: HashMap<String, JsonValue>) -> Self {
        Self { terms }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| MapTransformError::from_open(e, path))?;
        let value: JsonValue = serde_json::from_reader(BufReader::new(file))?;
        let table = Self::from_value(value)?;
        tracing::info!("Loaded {} translations from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// The document must be a JSON object; its values are kept as-is.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => Ok(Self {
                terms: map.into_iter().collect(),
            }),
            other => Err(MapTransformError::InvalidTranslationTable(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.terms.get(key)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
