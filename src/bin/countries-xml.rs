use anyhow::Result;
use clap::Parser;
use countries_xml::api::DEFAULT_BASE_URL;
use countries_xml::config::{self, ConfigFile, GeneratorConfig};
use countries_xml::{Client, Generator, run_with_validation};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "countries-xml",
    version,
    about = "Generate countries XML from the REST Countries API",
    after_help = "Examples:\n  countries-xml --countries \"india,japan,germany\"\n  countries-xml --countries \"india,japan\" --output my_countries.xml\n  countries-xml --config config/countries.json"
)]
struct Cli {
    /// Comma-separated list of countries to include
    #[arg(long, default_value = config::DEFAULT_COUNTRIES)]
    countries: String,
    /// Output XML file path [default: output/countries.xml]
    #[arg(long)]
    output: Option<PathBuf>,
    /// JSON config file with a `countries` list (wins over --countries when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable verbose (info-level) logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
    /// Only test API connectivity, don't generate XML
    #[arg(long, default_value_t = false)]
    test_only: bool,
    /// Base URL of the REST Countries API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let client = Client::with_base_url(&cli.api_url);

    if cli.test_only {
        return Ok(match client.ping() {
            Ok(()) => true,
            Err(e) => {
                error!("API connectivity test failed: {e}");
                false
            }
        });
    }

    let mut settings = GeneratorConfig::default();
    let countries = match cli.config.as_ref().filter(|p| p.exists()) {
        Some(path) => {
            let file = ConfigFile::load(path)?;
            info!("loaded {} countries from config file", file.countries.len());
            settings = file.apply(settings);
            file.countries
        }
        None => {
            let list = config::parse_country_list(&cli.countries);
            info!("parsed {} countries: {}", list.len(), list.join(", "));
            list
        }
    };
    if let Some(out) = cli.output {
        settings.output = out;
    }

    if countries.is_empty() {
        anyhow::bail!("no countries specified");
    }

    let generator = Generator::new(client, settings);
    let report = run_with_validation(&generator, &countries);
    println!("{report}");
    Ok(report.success)
}
