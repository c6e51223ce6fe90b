//! Command-line access to the example catalog.
//!
//! Lists keys in definition order, prints single records or fields, groups
//! keys by topic, and validates a catalog document. By default every command
//! reads the embedded table; `--catalog` (or `EXAMPLE_CATALOG_PATH`) points
//! at a catalog file instead. Logs go to stderr so stdout stays pipeable.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use example_catalog::{
    CatalogSchema, CatalogSource, ExampleIndex, ExampleRecord, NavEntry, split_list,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "EXAMPLE_CATALOG_LOG";

/// Browse and validate the example catalog
#[derive(Parser, Debug)]
#[command(name = "example-catalog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read the catalog from this file instead of the embedded table
    #[arg(long, global = true, env = "EXAMPLE_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Validate against this schema file instead of the embedded schema
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List keys and titles in definition order
    List {
        /// Only show these topics (comma- or space-separated, e.g. "html,js")
        #[arg(short, long)]
        topic: Option<String>,

        /// Emit JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Show one example
    Show {
        /// Example key (e.g. html-doctype)
        key: String,

        /// Print only this field, verbatim
        #[arg(short, long)]
        field: Option<String>,

        /// Emit the whole record as JSON
        #[arg(long, conflicts_with = "field")]
        json: bool,
    },

    /// List topics with their example counts
    Topics {
        /// Emit JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Check the catalog for schema violations, blank fields, and duplicate keys
    Validate {
        /// Emit issues as JSON
        #[arg(long)]
        json: bool,
    },
}

const RECORD_FIELDS: &[&str] = &[
    "key",
    "title",
    "language",
    "description",
    "code",
    "output",
    "interactive",
    "notes",
];

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let source = CatalogSource::from_override(cli.catalog);
    let schema = match &cli.schema {
        Some(path) => CatalogSchema::load(path)?,
        None => CatalogSchema::embedded()?,
    };
    info!(source = %source, schema_version = %schema.schema_version, "catalog selected");

    match cli.command {
        Commands::Validate { json } => validate(&source, &schema, json),
        Commands::List { topic, json } => {
            let index = source.load_index(&schema)?;
            list(&index, topic.as_deref(), json)
        }
        Commands::Show { key, field, json } => {
            let index = source.load_index(&schema)?;
            show(&index, &key, field.as_deref(), json)
        }
        Commands::Topics { json } => {
            let index = source.load_index(&schema)?;
            topics(&index, json)
        }
    }
}

fn list(index: &ExampleIndex, topic: Option<&str>, json: bool) -> Result<()> {
    let wanted = topic.map(split_list).unwrap_or_default();
    let entries: Vec<NavEntry<'_>> = index
        .entries()
        .into_iter()
        .filter(|entry| wanted.is_empty() || wanted.iter().any(|t| t == entry.key.topic()))
        .collect();

    if json {
        print_json(&entries)?;
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.key, entry.title);
        }
    }
    Ok(())
}

fn show(index: &ExampleIndex, key: &str, field: Option<&str>, json: bool) -> Result<()> {
    let record = index.require(key)?;

    if json {
        return print_json(record);
    }

    match field {
        Some(name) => {
            if !RECORD_FIELDS.contains(&name) {
                bail!(
                    "unknown field '{name}'; expected one of {}",
                    RECORD_FIELDS.join(", ")
                );
            }
            let Some(value) = record.field(name) else {
                bail!("{key} has no {name}");
            };
            println!("{value}");
        }
        None => print_record(record),
    }
    Ok(())
}

fn print_record(record: &ExampleRecord) {
    let label = if record.language.is_source_language() {
        "Language"
    } else {
        "Category"
    };
    println!("{} ({})", record.title, record.key);
    println!("{label}: {}", record.language);
    println!();
    println!("{}", record.description);
    println!();
    println!("{}", record.code);
    for (name, value) in [
        ("Output", &record.output),
        ("Interactive", &record.interactive),
        ("Notes", &record.notes),
    ] {
        if let Some(value) = value {
            println!();
            println!("{name}:");
            println!("{value}");
        }
    }
}

#[derive(Serialize)]
struct TopicSummary<'a> {
    topic: &'a str,
    count: usize,
}

fn topics(index: &ExampleIndex, json: bool) -> Result<()> {
    let summaries: Vec<TopicSummary<'_>> = index
        .topics()
        .into_iter()
        .map(|group| TopicSummary {
            topic: group.topic,
            count: group.entries.len(),
        })
        .collect();

    if json {
        print_json(&summaries)?;
    } else {
        for summary in &summaries {
            println!("{}\t{}", summary.topic, summary.count);
        }
    }
    Ok(())
}

fn validate(source: &CatalogSource, schema: &CatalogSchema, json: bool) -> Result<()> {
    let issues = source.validate(schema)?;
    if json {
        print_json(&issues)?;
    } else if issues.is_empty() {
        println!("{source}: ok");
    }

    for issue in &issues {
        warn!(%issue, "catalog issue");
        if !json {
            println!("{issue}");
        }
    }
    if !issues.is_empty() {
        bail!("{source}: {} issue(s) found", issues.len());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
