//! Traverse CLI - replay a traversal script against a JSON document
//!
//! Usage:
//!   traverse data.json script.json
//!   traverse data.json script.json --strict --verbose

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use traverse::config::Validator;
use traverse::{EndPolicy, Script, ScriptRunner, TraversalConfig};

#[derive(Parser)]
#[command(name = "traverse")]
#[command(about = "Navigate a JSON document with a scripted chain of operations")]
struct Cli {
    /// JSON document to traverse
    data: PathBuf,

    /// Script: JSON array of steps such as {"name": "object-key", "key": "k"}
    script: PathBuf,

    /// Fail instead of dropping nodes when more than one remains at the end
    #[arg(long)]
    strict: bool,

    /// Reject documents larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Log every step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let data = std::fs::read(&cli.data)
        .with_context(|| format!("failed to read {}", cli.data.display()))?;

    let script = Script::load(&cli.script)
        .with_context(|| format!("failed to load script {}", cli.script.display()))?;

    let mut config = TraversalConfig::default().with_debug(cli.verbose);
    if cli.strict {
        config = config.with_end_policy(EndPolicy::RequireSingleton);
    }
    if let Some(limit) = cli.max_bytes {
        config = config.with_max_document_bytes(limit);
    }
    config.validate().context("invalid traversal configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = ScriptRunner::new(config)
        .run(&data, &script, &mut out)
        .context("traversal failed")?;
    writeln!(out)?;

    log::info!(
        "{} step(s) applied, {} skipped",
        summary.steps_applied,
        summary.steps_skipped
    );
    Ok(())
}
