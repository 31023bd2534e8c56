use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use wayfarer_catalog::{moods, Catalog};
use wayfarer_core::{MoodEngine, MoodMappingRegistry};

mod config;
mod input;

use config::Config;

#[derive(Parser)]
#[command(name = "wayfarer", about = "Mood-based travel recommendations from facial emotion readings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify emotion readings and recommend destinations
    Analyze {
        /// JSON file with one reading, an array of readings, or {"faces": [...]} (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Index of the primary face when several are present
        #[arg(short, long)]
        primary: Option<usize>,
        /// Maximum number of recommended destinations
        #[arg(short, long)]
        limit: Option<usize>,
        /// Destination catalog TOML (overrides WAYFARER_CATALOG_PATH)
        #[arg(long, conflicts_with = "no_catalog")]
        catalog: Option<PathBuf>,
        /// Skip destination matching entirely
        #[arg(long)]
        no_catalog: bool,
        /// Mood table TOML (overrides WAYFARER_MOOD_TABLE)
        #[arg(long)]
        mood_table: Option<PathBuf>,
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// Show the mood table
    Moods {
        /// Mood table TOML (overrides WAYFARER_MOOD_TABLE)
        #[arg(long)]
        mood_table: Option<PathBuf>,
    },
    /// List destinations in the catalog
    Catalog {
        /// Destination catalog TOML (overrides WAYFARER_CATALOG_PATH)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Analyze {
            input: input_path,
            primary,
            limit,
            catalog,
            no_catalog,
            mood_table,
            pretty,
        } => {
            let registry = load_registry(mood_table.as_deref().or(config.mood_table_path.as_deref()))?;
            let mut engine =
                MoodEngine::new(registry).with_limit(limit.unwrap_or(config.match_limit));
            if !no_catalog {
                let catalog = load_catalog(catalog.as_deref().or(config.catalog_path.as_deref()))?;
                engine = engine.with_catalog(catalog.into_destinations());
            }

            let src = read_input(input_path.as_deref())?;
            let parsed = input::parse(&src).context("failed to parse emotion readings")?;
            let primary_index = primary.or(parsed.primary_index).unwrap_or(0);
            tracing::info!(faces = parsed.faces.len(), primary_index, "analyzing");

            let result = engine
                .analyze_readings(parsed.faces, primary_index)
                .context("analysis failed")?;

            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
        Commands::Moods { mood_table } => {
            let registry = load_registry(mood_table.as_deref().or(config.mood_table_path.as_deref()))?;
            for (category, entry) in registry.iter() {
                println!(
                    "{category:<22} {:<24} energy {}-{}  social {}-{}  adventure {}-{}  [{}]",
                    entry.label,
                    entry.energy.low(),
                    entry.energy.high(),
                    entry.social.low(),
                    entry.social.high(),
                    entry.adventure.low(),
                    entry.adventure.high(),
                    entry.tags.join(", "),
                );
            }
        }
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref().or(config.catalog_path.as_deref()))?;
            if catalog.is_empty() {
                println!("No destinations in catalog");
            }
            for d in catalog.destinations() {
                println!(
                    "{:<20} {:<28} energy {}-{}  social {}-{}  adventure {}-{}  [{}]",
                    d.id,
                    d.title,
                    d.energy.low(),
                    d.energy.high(),
                    d.social.low(),
                    d.social.high(),
                    d.adventure.low(),
                    d.adventure.high(),
                    d.tags.join(", "),
                );
            }
        }
    }

    Ok(())
}

fn load_registry(path: Option<&Path>) -> Result<MoodMappingRegistry> {
    match path {
        Some(path) => moods::load(path)
            .with_context(|| format!("failed to load mood table {}", path.display())),
        None => Ok(MoodMappingRegistry::builtin()),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("failed to load catalog {}", path.display()))
        }
        None => {
            let catalog = Catalog::embedded();
            tracing::debug!(destinations = catalog.len(), "using embedded catalog");
            Ok(catalog.clone())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
