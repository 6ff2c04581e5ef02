use crate::domain::gsdp::{errors::GsdpError, record::RawRow, source::GsdpSource};
use std::{fs::File, io::Read, path::PathBuf};
use tracing::debug;

/// GSDP rows read from a CSV file with a header row.
pub struct CsvGsdpSource {
    path: PathBuf,
}

impl CsvGsdpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GsdpSource for CsvGsdpSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_rows(&self) -> Result<Vec<RawRow>, GsdpError> {
        let file = File::open(&self.path).map_err(|e| GsdpError::SourceUnavailable {
            location: self.location(),
            reason: e.to_string(),
        })?;
        read_csv_rows(file, &self.location())
    }
}

/// Parse CSV text into rows keyed by header name.
///
/// Rows may be shorter or longer than the header: missing trailing cells are
/// simply absent and extra cells are ignored. Records that cannot be decoded
/// are skipped; an I/O failure or an unreadable header fails the whole read.
pub fn read_csv_rows<R: Read>(reader: R, location: &str) -> Result<Vec<RawRow>, GsdpError> {
    let unavailable = |e: csv::Error| GsdpError::SourceUnavailable {
        location: location.to_string(),
        reason: e.to_string(),
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(unavailable)?.clone();

    let mut rows: Vec<RawRow> = Vec::new();
    for (position, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(unavailable(e)),
            Err(e) => {
                debug!(row = position + 1, error = %e, "Skipping undecodable CSV record");
                continue;
            }
        };

        rows.push(headers.iter().zip(record.iter()).collect::<RawRow>());
    }

    Ok(rows)
}
