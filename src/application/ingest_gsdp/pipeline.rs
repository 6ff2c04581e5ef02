//! Turns raw GSDP rows into a [`YearIndex`].
//!
//! Ingestion is lenient: rows without identity fields and cells that do not
//! hold a finite number are dropped without failing the run. Every drop is
//! counted in [`IngestStats`] and logged at `debug` so a shifted column or a
//! bad header can still be diagnosed.

use crate::domain::gsdp::{
    record::{GsdpRecord, RawRow},
    state_names::StateNameMap,
    year_index::{YearIndex, is_year_column},
};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref LEADING_FLOAT_REGEX: regex::Regex =
        regex::Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?").unwrap();
}

/// Header names of the identity columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumns {
    pub sequence_number: String,
    pub state_name: String,
}

impl Default for SourceColumns {
    fn default() -> Self {
        Self {
            sequence_number: "Sl. No.".to_string(),
            state_name: "State".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub rows_read: usize,
    /// Rows missing the sequence number or state name.
    pub rows_skipped: usize,
    /// (row, year) cells that did not parse to a finite number.
    pub cells_dropped: usize,
    pub records_emitted: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    pub index: YearIndex,
    pub stats: IngestStats,
}

pub struct GsdpIngestPipeline {
    columns: SourceColumns,
    state_names: StateNameMap,
}

impl GsdpIngestPipeline {
    pub fn new(columns: SourceColumns, state_names: StateNameMap) -> Self {
        Self {
            columns,
            state_names,
        }
    }

    /// Year columns, taken from the first row only.
    ///
    /// Later rows are assumed to share that column set; a year column that
    /// only appears further down is never indexed.
    pub fn year_columns(rows: &[RawRow]) -> Vec<String> {
        let Some(first) = rows.first() else {
            return Vec::new();
        };

        let mut years: Vec<String> = Vec::new();
        for name in first.column_names().filter(|name| is_year_column(name)) {
            if !years.iter().any(|year| year == name) {
                years.push(name.to_string());
            }
        }
        years
    }

    pub fn run(&self, rows: &[RawRow]) -> IngestOutcome {
        let year_columns = Self::year_columns(rows);
        let mut index = YearIndex::new();
        let mut stats = IngestStats {
            rows_read: rows.len(),
            ..IngestStats::default()
        };

        for (position, row) in rows.iter().enumerate() {
            let sequence_number = row
                .get(&self.columns.sequence_number)
                .filter(|value| !value.is_empty());
            let state = row
                .get(&self.columns.state_name)
                .filter(|value| !value.is_empty());

            let (Some(sequence_number), Some(state)) = (sequence_number, state) else {
                debug!(row = position + 1, "Skipping GSDP row without sequence number or state");
                stats.rows_skipped += 1;
                continue;
            };

            let state_name = self.state_names.canonicalize(state);

            for year in &year_columns {
                let records = index.entry(year);

                let Some(gsdp_value) = row.get(year).and_then(parse_gsdp_value) else {
                    debug!(row = position + 1, year = %year, "Dropping non-numeric GSDP cell");
                    stats.cells_dropped += 1;
                    continue;
                };

                records.push(GsdpRecord {
                    sequence_number: sequence_number.to_string(),
                    state_name: state_name.to_string(),
                    state_code: sequence_number.to_string(),
                    gsdp_value,
                });
                stats.records_emitted += 1;
            }
        }

        IngestOutcome { index, stats }
    }
}

/// Parse the leading decimal number of a cell.
///
/// Surrounding whitespace is ignored and trailing text after the number is
/// tolerated, so `"135000 (P)"` reads as 135000. Returns `None` when there is
/// no numeric prefix or the value is not finite.
pub fn parse_gsdp_value(cell: &str) -> Option<f64> {
    let numeric = LEADING_FLOAT_REGEX.find(cell.trim())?;
    numeric
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
