//! CSV target-list loader.
//!
//! # CSV format
//!
//! One row per agent, in agent-id order:
//!
//! ```csv
//! x,z
//! 0,0
//! 1,0
//! 2,0
//! 0,1
//! ```
//!
//! Coordinates are signed grid indices.  Every cell must lie inside the
//! supplied [`Bounds`] and no cell may appear twice; the first offending row
//! is reported.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rg_core::{Bounds, Cell};

use crate::{LayoutError, LayoutResult};

#[derive(Deserialize)]
struct TargetRecord {
    x: i32,
    z: i32,
}

/// Load and validate a target list from a CSV file.
pub fn load_targets_csv(path: &Path, bounds: &Bounds) -> LayoutResult<Vec<Cell>> {
    let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
    load_targets_reader(file, bounds)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R, bounds: &Bounds) -> LayoutResult<Vec<Cell>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut targets = Vec::new();
    for result in csv_reader.deserialize::<TargetRecord>() {
        let row = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
        targets.push(Cell::new(row.x, row.z));
    }

    validate_targets(&targets, bounds)?;
    Ok(targets)
}

/// Check an in-memory target list: every cell inside `bounds`, no repeats.
pub fn validate_targets(targets: &[Cell], bounds: &Bounds) -> LayoutResult<()> {
    let mut first_seen: HashMap<Cell, usize> = HashMap::with_capacity(targets.len());
    for (i, &cell) in targets.iter().enumerate() {
        let row = i + 1;
        if !bounds.contains(cell) {
            return Err(LayoutError::OutOfBounds { row, cell });
        }
        if let Some(&first) = first_seen.get(&cell) {
            return Err(LayoutError::DuplicateCell { row, first, cell });
        }
        first_seen.insert(cell, row);
    }
    Ok(())
}
