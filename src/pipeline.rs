//! The single pass: load the table, translate every row, write the result.

use crate::csv_processor::{JsonRowWriter, MapReader};
use crate::translation::{TranslationTable, Translator};
use crate::utils::{Result, TransformConfig};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub rows: usize,
    pub cells: usize,
    pub misses: usize,
    pub missed_values: BTreeMap<String, usize>,
}

/// Nothing is written unless the table loads and every row parses.
pub fn run_transform(config: &TransformConfig) -> Result<TransformReport> {
    let table = TranslationTable::load(&config.table)?;

    let reader = MapReader::new(&config.input);
    let mut translator = Translator::new(&table);
    let mut writer = JsonRowWriter::new(&config.output);

    for (index, record) in reader.read_records()?.iter().enumerate() {
        let cells: Vec<&str> = record.iter().collect();
        tracing::info!("{:?}", cells);
        let row = translator.translate_row(cells.as_slice());
        tracing::debug!(row = index, cells = row.len(), "Translated row");
        writer.write_row(row);
    }

    tracing::info!(
        "The translation dictionary couldn't translate {} items.",
        translator.misses()
    );
    if translator.misses() > 0 {
        tracing::warn!(
            distinct = translator.missed_values().len(),
            "Some cells were passed through untranslated"
        );
        for (value, count) in translator.missed_values() {
            tracing::debug!(value = %value, count, "Untranslated value");
        }
    }

    let rows = writer.finish()?;
    tracing::info!("Done");

    let report = TransformReport {
        rows,
        cells: translator.cells(),
        misses: translator.misses(),
        missed_values: translator.into_missed_values(),
    };
    let summary = serde_json::to_string(&report)?;
    tracing::debug!(report = %summary, "Transform report");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn translates_example_map() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.csv");
        let table = dir.path().join("trans.json");
        let output = dir.path().join("out.json");
        fs::write(&input, "A,,B,C\n").unwrap();
        fs::write(&table, r#"{"A": "Alpha", "B": "Beta"}"#).unwrap();

        let report = run_transform(&TransformConfig::new(&input, &table, &output)).unwrap();

        assert_eq!(report.rows, 1);
        assert_eq!(report.cells, 3);
        assert_eq!(report.misses, 1);
        assert_eq!(report.missed_values.get("C"), Some(&1));
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, json!([["Alpha", "Beta", "C"]]));
    }

    #[test]
    fn blank_lines_keep_their_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.csv");
        let table = dir.path().join("trans.json");
        let output = dir.path().join("out.json");
        fs::write(&input, "A\n\nB\n").unwrap();
        fs::write(&table, r#"{"A": "Alpha"}"#).unwrap();

        let report = run_transform(&TransformConfig::new(&input, &table, &output)).unwrap();

        assert_eq!(report.rows, 3);
        assert_eq!(report.misses, 1);
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, json!([["Alpha"], [], ["B"]]));
    }

    #[test]
    fn unterminated_quote_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.csv");
        let table = dir.path().join("trans.json");
        let output = dir.path().join("out.json");
        fs::write(&input, "A,\"bc\nD\n").unwrap();
        fs::write(&table, r#"{"A": "Alpha"}"#).unwrap();

        let result = run_transform(&TransformConfig::new(&input, &table, &output));

        assert!(matches!(
            result,
            Err(crate::MapTransformError::MalformedQuoting { line: 1 })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn report_serializes_missed_values() {
        let mut report = TransformReport {
            rows: 1,
            cells: 2,
            misses: 1,
            ..TransformReport::default()
        };
        report.missed_values.insert("C".to_string(), 1);

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"rows": 1, "cells": 2, "misses": 1, "missed_values": {"C": 1}})
        );
    }

    #[test]
    fn invalid_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("map.csv");
        let table = dir.path().join("trans.json");
        let output = dir.path().join("out.json");
        fs::write(&input, "A\n").unwrap();
        fs::write(&table, "{not json").unwrap();

        let result = run_transform(&TransformConfig::new(&input, &table, &output));

        assert!(matches!(result, Err(crate::MapTransformError::JsonError(_))));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("trans.json");
        let output = dir.path().join("out.json");
        fs::write(&table, "{}").unwrap();

        let result = run_transform(&TransformConfig::new(
            dir.path().join("absent.csv"),
            &table,
            &output,
        ));

        assert!(matches!(result, Err(crate::MapTransformError::FileNotFound(_))));
        assert!(!output.exists());
    }
}
