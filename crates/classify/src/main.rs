//! FHIR interaction classifier CLI.
//!
//! Classifies one or more request paths for a given HTTP method and prints
//! one JSON object per path:
//!
//! ```text
//! $ fhir-classify GET /fhir/Patient/123 /fhir/metadata /fhir/Unknown
//! {"interaction":"read","resourceType":"Patient","resourceId":"123"}
//! {"interaction":"capabilities"}
//! {}
//! ```

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use helios_interactions::{ClassifierConfig, init_logging};
use tracing::{debug, info};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "fhir-classify")]
#[command(about = "Classify HTTP requests as FHIR REST interactions")]
struct Cli {
    #[command(flatten)]
    config: ClassifierConfig,

    /// HTTP method of the requests (GET, POST, PUT, PATCH, DELETE).
    method: String,

    /// Request paths to classify, without query strings.
    #[arg(required = true)]
    paths: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.config.log_level);

    if let Err(errors) = cli.config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let classifier = cli
        .config
        .build_classifier()
        .context("Failed to load FHIR resource types")?;

    info!(
        fhir_version = %cli.config.fhir_version,
        resource_types = classifier.oracle().names().len(),
        "Classifier ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &cli.paths {
        let info = classifier.classify(&cli.method, path);
        debug!(method = %cli.method, path = %path, empty = info.is_empty(), "Classified");

        serde_json::to_writer(&mut out, &info)?;
        writeln!(out)?;
    }

    Ok(())
}
