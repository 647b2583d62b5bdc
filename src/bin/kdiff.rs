//! kdiff - Manifest diff CLI tool
//!
//! Compares desired manifests with live objects read from YAML/JSON files.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manifest_diff::normalize::{normalize, DiffOptions, NormalizeRole};
use manifest_diff::schema::SchemaRegistry;
use manifest_diff::value::{self, Value};
use manifest_diff::{diff, hide_secret_data, two_way_diff};

#[derive(Debug, Parser)]
#[command(name = "kdiff", version, about = "Compare desired manifests with live objects")]
struct Cli {
    /// Output location. Use '-' for stdout.
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    /// Catalog of kinds and schemas replacing the built-in one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Diff a config against its live object.
    Diff {
        #[arg(long)]
        config: PathBuf,
        /// Live object; omit when the resource does not exist yet.
        #[arg(long)]
        live: Option<PathBuf>,
        /// DiffOptions file.
        #[arg(long)]
        options: Option<PathBuf>,
        /// Ignore the last-applied-configuration record.
        #[arg(long)]
        two_way: bool,
    },
    /// Print the normalized form of a document.
    Normalize {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Role::Config)]
        role: Role,
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Hide Secret values in a target and live pair.
    Redact {
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        live: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Role {
    Config,
    Live,
}

impl From<Role> for NormalizeRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Config => NormalizeRole::Config,
            Role::Live => NormalizeRole::Live,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Runs the command and reports whether a difference was found.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    let registry = match cli.catalog {
        Some(ref path) => Some(Arc::new(SchemaRegistry::from_catalog_yaml(&read(path)?)?)),
        None => None,
    };

    match cli.command {
        Command::Diff {
            config,
            live,
            options,
            two_way,
        } => {
            let options = load_options(options.as_deref(), registry)?;
            let config = read_document(&config)?;
            let live = live.as_deref().map(read_document).transpose()?;

            let result = match (two_way, live.as_ref()) {
                (true, Some(live)) => two_way_diff(&config, live, None, &options)?,
                (_, live) => diff(Some(&config), live, None, &options)?,
            };
            write_json(&mut output, &result)?;
            Ok(result.modified)
        }
        Command::Normalize { file, role, options } => {
            let options = load_options(options.as_deref(), registry)?;
            let normalized = normalize(&read_document(&file)?, role.into(), &options)?;
            write_json(&mut output, &normalized)?;
            Ok(false)
        }
        Command::Redact { target, live } => {
            let target = read_document(&target)?;
            let live = read_document(&live)?;
            let (target, live) = hide_secret_data(Some(&target), Some(&live))?;
            write_json(
                &mut output,
                &serde_json::json!({ "target": target, "live": live }),
            )?;
            Ok(false)
        }
    }
}

fn read(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    Ok(fs::read_to_string(path).map_err(|e| format!("Failed to read file {:?}: {}", path, e))?)
}

/// Reads a YAML or JSON document; JSON is a subset of YAML.
fn read_document(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = read(path)?;
    Ok(value::from_yaml(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))?)
}

fn load_options(
    path: Option<&Path>,
    registry: Option<Arc<SchemaRegistry>>,
) -> Result<DiffOptions, Box<dyn std::error::Error>> {
    let options = match path {
        Some(path) => DiffOptions::from_yaml(&read(path)?)?,
        None => DiffOptions::default(),
    };
    Ok(match registry {
        Some(registry) => options.with_registry(registry),
        None => options,
    })
}

fn write_json<T: serde::Serialize>(output: &mut dyn Write, value: &T) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut *output, value)?;
    writeln!(output)?;
    Ok(())
}
