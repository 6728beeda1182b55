//! CSV rendering and output naming

mod csv;
mod naming;

pub use csv::{CSV_HEADER, render_csv};
pub use naming::{OUTPUT_PREFIX, output_filename, output_name};

use crate::protocol::ScanStats;

/// A finished conversion: the CSV text and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// File name including the `.csv` extension
    pub filename: String,
    /// CSV document, header first, one line per record
    pub content: String,
    /// Counters gathered while producing the document
    pub stats: ScanStats,
}

impl Export {
    /// Number of data lines in the document
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.content.lines().count().saturating_sub(1)
    }
}
