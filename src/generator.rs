//! Pipeline: fetch -> extract -> write, plus the self-checking automation run.

use crate::api::Client;
use crate::config::GeneratorConfig;
use crate::extract::extract_with_priority;
use crate::models::{CountryRecord, ExtractedCountry};
use crate::report::RunReport;
use crate::storage;
use anyhow::Result;
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Generator {
    pub client: Client,
    pub config: GeneratorConfig,
}

impl Generator {
    pub fn new(client: Client, config: GeneratorConfig) -> Self {
        Self { client, config }
    }

    /// Extract every record with the configured language priority.
    pub fn extract_all(&self, records: &[CountryRecord]) -> Vec<ExtractedCountry> {
        records
            .iter()
            .map(|r| extract_with_priority(r, &self.config.language_priority))
            .collect()
    }

    /// Fetch `names`, render the resolved ones and write the document to the
    /// configured output path.
    ///
    /// Returns `Ok(None)` (nothing written) when no name resolved.
    pub fn generate(&self, names: &[String]) -> Result<Option<PathBuf>> {
        info!("countries to fetch: {}", names.join(", "));
        let records = self.client.fetch(names);
        if records.is_empty() {
            error!("no country data fetched, cannot generate XML");
            return Ok(None);
        }
        info!("generating XML with {} countries...", records.len());
        let countries = self.extract_all(&records);
        let written = storage::save_xml(&countries, &self.config.output)?;
        if let Some(p) = &written {
            info!("XML generated: {}", p.display());
        }
        Ok(written)
    }
}

/// Check API connectivity, generate, then re-read the written file and compare the number of
/// `<Countries>` blocks against the request.
///
/// Never returns an error: every failure ends up in [`RunReport::errors`].
pub fn run_with_validation(generator: &Generator, names: &[String]) -> RunReport {
    let mut report = RunReport::new(names.len(), generator.config.output.clone());

    if let Err(e) = generator.client.ping() {
        error!("API connectivity test failed: {e}");
        report.errors.push("API connectivity test failed".into());
        return report;
    }

    info!("starting XML generation for {} countries...", names.len());
    let path = match generator.generate(names) {
        Ok(Some(p)) => p,
        Ok(None) => {
            report
                .errors
                .push("no country data fetched, XML file was not created".into());
            return report;
        }
        Err(e) => {
            error!("error during XML generation: {e:#}");
            report.errors.push(format!("{e:#}"));
            return report;
        }
    };

    let processed = match storage::count_countries(&path) {
        Ok(n) => n,
        Err(e) => {
            error!("generated XML failed validation: {e:#}");
            report.errors.push(format!("{e:#}"));
            return report;
        }
    };

    report.success = true;
    report.countries_processed = processed;
    report.file_size = fs::metadata(&path).ok().map(|m| m.len());
    report.output_file = path;
    info!("generated XML with {processed} countries");

    if processed < names.len() {
        let missing = names.len() - processed;
        warn!("{missing} countries could not be processed");
        report
            .warnings
            .push(format!("{missing} countries could not be processed"));
    }
    report
}
