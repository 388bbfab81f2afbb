// src/output.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{Result, SimError};

/// One parsed line of the results file. Rows are not required to share a
/// length.
pub type NumericRow = Vec<f64>;

/// Read the run's log file verbatim.
pub fn read_log(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SimError::FileRead {
        path: path.display().to_string(),
        source,
    })
}

/// Read the results file as whitespace-delimited numeric rows. Empty
/// lines produce no row; rows keep file order.
pub fn read_rows(path: &Path) -> Result<Vec<NumericRow>> {
    let file = File::open(path).map_err(|source| SimError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let row = parse_row(&line?);
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn parse_row(line: &str) -> NumericRow {
    line.split_whitespace().map(coerce_f64).collect()
}

/// Lenient numeric coercion: the longest numeric prefix of the token
/// parses, anything unparseable is 0.0. Non-finite results also collapse
/// to 0.0 so every row stays JSON-representable.
fn coerce_f64(token: &str) -> f64 {
    for end in (1..=token.len()).rev() {
        if !token.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = token[..end].parse::<f64>() {
            return if value.is_finite() { value } else { 0.0 };
        }
    }
    0.0
}
