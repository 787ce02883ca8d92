//! countries_xml
//!
//! Fetch country metadata from the REST Countries API and write a chosen subset of
//! fields as a fixed-schema XML document. Pairs with the `countries-xml` CLI.
//!
//! ### Features
//! - One lookup per country name; names that fail or do not match are skipped
//! - Local-name selection by configurable language priority
//! - Escaped, indented XML with every schema element always present
//! - Self-checking automation run with a printable report
//!
//! ### Example
//! ```no_run
//! use countries_xml::{Client, storage};
//!
//! let client = Client::default();
//! let records = client.fetch(&["india".into(), "japan".into()]);
//! let countries: Vec<_> = records.iter().map(countries_xml::extract::extract).collect();
//! storage::save_xml(&countries, "output/countries.xml")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod extract;
pub mod generator;
pub mod models;
pub mod render;
pub mod report;
pub mod storage;

pub use api::Client;
pub use config::GeneratorConfig;
pub use generator::{Generator, run_with_validation};
pub use models::{CountryRecord, ExtractedCountry};
pub use report::RunReport;
