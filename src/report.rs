//! Status report produced by a validated run.

use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;

/// Outcome of one automated run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub success: bool,
    pub countries_requested: usize,
    pub countries_processed: usize,
    pub output_file: PathBuf,
    /// Size in bytes of the written document, when one was written.
    pub file_size: Option<u64>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub timestamp: DateTime<Local>,
}

impl RunReport {
    pub fn new(countries_requested: usize, output_file: PathBuf) -> Self {
        Self {
            success: false,
            countries_requested,
            countries_processed: 0,
            output_file,
            file_size: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            timestamp: Local::now(),
        }
    }
}

const RULE: &str = "==================================================";

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "COUNTRIES XML GENERATION REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Timestamp: {}", self.timestamp.to_rfc3339())?;
        writeln!(f, "Countries Requested: {}", self.countries_requested)?;
        writeln!(f, "Countries Processed: {}", self.countries_processed)?;
        writeln!(f, "Output File: {}", self.output_file.display())?;
        writeln!(f, "Success: {}", self.success)?;
        if let Some(size) = self.file_size {
            writeln!(f, "File Size: {size} bytes")?;
        }
        if !self.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "ERRORS:")?;
            for e in &self.errors {
                writeln!(f, "  - {e}")?;
            }
        }
        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "WARNINGS:")?;
            for w in &self.warnings {
                writeln!(f, "  - {w}")?;
            }
        }
        write!(f, "{RULE}")
    }
}
