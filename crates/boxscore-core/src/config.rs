use crate::error::BoxScoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for reconstructing table grids from positioned words.
///
/// Distances are in PDF points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Words whose vertical centres differ by at most this much share a row.
    pub row_tolerance: f32,
    /// Horizontal gaps up to this width stay inside one cell.
    pub cell_gap: f32,
    /// Rows with fewer cells than this end a table.
    pub min_columns: usize,
    /// A larger vertical gap between two rows ends a table.
    pub max_row_gap: f32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            row_tolerance: 3.0,
            cell_gap: 4.0,
            min_columns: 3,
            max_row_gap: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Minutes-column value marking a player who did not play.
    pub did_not_play_marker: String,
    /// Jersey-column markers of summary rows sharing the grid with players.
    pub footer_markers: Vec<String>,
    /// Smallest table (header rows included) considered a box score.
    pub min_table_rows: usize,
    pub table: TableSettings,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            did_not_play_marker: "DNP".into(),
            footer_markers: vec!["Totals".into(), "Coach".into()],
            min_table_rows: 3,
            table: TableSettings::default(),
        }
    }
}

/// Load parse options from a JSON file. Missing keys keep their defaults.
pub fn load_options(path: &Path) -> Result<ParseOptions, BoxScoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| BoxScoreError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse options from a JSON string; `source` is only used in error messages.
pub fn parse_options(json: &str, source: &Path) -> Result<ParseOptions, BoxScoreError> {
    let options: ParseOptions =
        serde_json::from_str(json).map_err(|e| BoxScoreError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options).map_err(|reason| BoxScoreError::ConfigLoad {
        path: source.to_path_buf(),
        reason,
    })?;
    Ok(options)
}

fn validate_options(options: &ParseOptions) -> Result<(), String> {
    if options.did_not_play_marker.trim().is_empty() {
        return Err("did_not_play_marker must not be empty".into());
    }
    if options.min_table_rows < 2 {
        return Err(format!(
            "min_table_rows must be at least 2 (two header rows), got {}",
            options.min_table_rows
        ));
    }
    if options.table.min_columns == 0 {
        return Err("table.min_columns must be at least 1".into());
    }
    let distances = [
        ("row_tolerance", options.table.row_tolerance),
        ("cell_gap", options.table.cell_gap),
        ("max_row_gap", options.table.max_row_gap),
    ];
    for (name, value) in distances {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("table.{name} must be a non-negative number"));
        }
    }
    Ok(())
}
