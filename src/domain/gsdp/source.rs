use super::{errors::GsdpError, record::RawRow};

/// A tabular GSDP source: one header row followed by data rows.
///
/// Reads are blocking and run off the async executor.
#[cfg_attr(test, mockall::automock)]
pub trait GsdpSource: Send + Sync {
    /// Human readable location, used in logs and errors.
    fn location(&self) -> String;

    /// Read every data row. Fails only when the source as a whole is unreadable;
    /// individual malformed rows are dropped by the implementation.
    fn read_rows(&self) -> Result<Vec<RawRow>, GsdpError>;
}
