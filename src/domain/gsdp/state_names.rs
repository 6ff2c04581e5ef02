use std::collections::HashMap;

/// Maps state names as spelled in the statistical source to the spelling
/// used by the boundary file. Names without an entry pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateNameMap {
    names: HashMap<String, String>,
}

impl StateNameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(source, display)| (source.to_string(), display.to_string()))
                .collect(),
        }
    }

    pub fn canonicalize<'a>(&'a self, source_name: &'a str) -> &'a str {
        self.names
            .get(source_name)
            .map(String::as_str)
            .unwrap_or(source_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
