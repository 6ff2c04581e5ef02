use super::record::GsdpRecord;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    // Fiscal year span such as "2017-18", optionally followed by a space and a suffix.
    static ref YEAR_COLUMN_REGEX: regex::Regex =
        regex::Regex::new(r"^[0-9]{4}-[0-9]{2}(\s.*)?$").unwrap();
}

/// True when a source header names a fiscal year column.
pub fn is_year_column(header: &str) -> bool {
    YEAR_COLUMN_REGEX.is_match(header)
}

/// GSDP records grouped by year label.
///
/// Years keep the order in which they were first inserted, which for an
/// ingested source is the column order of its header. Records within a year
/// keep source row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearIndex {
    years: Vec<(String, Vec<GsdpRecord>)>,
    positions: HashMap<String, usize>,
}

impl YearIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records list for `year`, creating an empty one at the end if absent.
    pub fn entry(&mut self, year: &str) -> &mut Vec<GsdpRecord> {
        let position = match self.positions.get(year) {
            Some(&position) => position,
            None => {
                self.years.push((year.to_string(), Vec::new()));
                let position = self.years.len() - 1;
                self.positions.insert(year.to_string(), position);
                position
            }
        };
        &mut self.years[position].1
    }

    pub fn get(&self, year: &str) -> Option<&[GsdpRecord]> {
        self.positions
            .get(year)
            .map(|&position| self.years[position].1.as_slice())
    }

    /// Year labels in insertion order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.iter().map(|(year, _)| year.as_str())
    }

    /// Resolve a caller supplied year to the best matching list.
    ///
    /// An exact key wins. Otherwise the first key, in insertion order, that
    /// starts with `requested` is used, so "2017" resolves to "2017-18". Keys
    /// are deliberately not sorted here: with headers "2017-18 (P)" and
    /// "2017-18", a request for "2017" picks whichever column came first in
    /// the source. No match yields an empty slice.
    pub fn resolve(&self, requested: &str) -> &[GsdpRecord] {
        if let Some(records) = self.get(requested) {
            return records;
        }

        self.years
            .iter()
            .find(|(year, _)| year.starts_with(requested))
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    /// Number of year labels.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Total records across all years.
    pub fn record_count(&self) -> usize {
        self.years.iter().map(|(_, records)| records.len()).sum()
    }
}
