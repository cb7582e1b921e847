//! Command-line front end: reads an evaluation request and prints JSON.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use tradeoff_engine::application::{DecisionEngine, EvaluateOptionsCommand};
use tradeoff_engine::config::AppConfig;
use tradeoff_engine::domain::knowledge::KnowledgeRegistry;

#[derive(Parser, Debug)]
#[command(name = "tradeoff-engine", about = "Compare technology options against your priorities")]
struct Cli {
    /// Optional config file (TOML, YAML or JSON); env vars still apply on top
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score, rank and analyze trade-offs
    Evaluate {
        /// Request file (.json, .yaml, .yml); reads stdin when omitted
        input: Option<PathBuf>,
    },
    /// Evaluate and add table, pros/cons, recommendation and scenarios
    Compare {
        /// Request file (.json, .yaml, .yml); reads stdin when omitted
        input: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load()?,
    };
    config.validate()?;
    config.logging.init_tracing();

    let engine = DecisionEngine::new(KnowledgeRegistry::standard(), config.engine.clone());

    let output = match &cli.command {
        Command::Evaluate { input } => {
            let request = read_request(input.as_deref())?;
            to_json(&engine.evaluate(&request)?, cli.pretty)?
        }
        Command::Compare { input } => {
            let request = read_request(input.as_deref())?;
            to_json(&engine.compare(&request)?, cli.pretty)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn read_request(path: Option<&Path>) -> Result<EvaluateOptionsCommand, Box<dyn Error>> {
    let Some(path) = path else {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        debug!(bytes = raw.len(), "Read request from stdin");
        return parse_request(&raw, false);
    };

    let raw = fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    debug!(path = %path.display(), yaml = is_yaml, "Read request file");
    parse_request(&raw, is_yaml)
}

/// JSON is a subset of YAML, so stdin input falls back to YAML on a JSON error.
fn parse_request(raw: &str, is_yaml: bool) -> Result<EvaluateOptionsCommand, Box<dyn Error>> {
    if is_yaml {
        return Ok(serde_yaml::from_str(raw)?);
    }
    match serde_json::from_str(raw) {
        Ok(request) => Ok(request),
        Err(json_error) => serde_yaml::from_str(raw).map_err(|_| json_error.into()),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
