use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One state's GSDP figure for a single year, in the shape the map client expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GsdpRecord {
    /// Source row identifier.
    #[serde(rename = "sl_no")]
    pub sequence_number: String,

    /// State name spelled the way the boundary file spells it.
    #[serde(rename = "state")]
    pub state_name: String,

    /// Same value as `sequence_number`; the source has no separate code.
    pub state_code: String,

    #[serde(rename = "gsdp")]
    pub gsdp_value: f64,
}

/// A single data row of the tabular source, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Value of `column`. When a header repeats, the right-most cell wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in source order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
