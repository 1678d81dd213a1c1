//! `csv2rdf`: converts a CSV file into an instance data graph and a
//! property schema graph.
//!
//! Each row becomes an instance of `--tclass` under `--tnamespace`, each
//! column an `rdf:Property` under `--schemanamespace`.
//!
//! **Usage:**
//! ```text
//! csv2rdf <input.csv> [--outdata output_data.ttl] [--outschema output_schema.ttl]
//!         [--tclass IRI] [--tnamespace IRI] [--schemanamespace IRI]
//!         [--format guess] [--sep C] [--quotechar C] [--na-values V ...]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use csv2rdf_clients::{init_tracing, resolve_format, LogArgs};
use csv2rdf_graph::serializer::write_graph;
use csv2rdf_graph::{Iri, Namespace};
use csv2rdf_tabular::{load_csv_path, materialize, LoadOptions};

/// Convert a CSV file to RDF.
#[derive(Parser)]
#[command(name = "csv2rdf", about = "Generic lightweight CSV to RDF converter")]
struct Args {
    /// Input CSV file.
    input: PathBuf,

    /// Output RDF data file.
    #[arg(long, default_value = "output_data.ttl")]
    outdata: PathBuf,

    /// Output RDF schema file.
    #[arg(long, default_value = "output_schema.ttl")]
    outschema: PathBuf,

    /// Class of the row instances.
    #[arg(long, value_name = "TARGET_CLASS", default_value = "http://example.org/Class")]
    tclass: String,

    /// Namespace for row instance IRIs.
    #[arg(long, value_name = "TARGET_NAMESPACE", default_value = "http://")]
    tnamespace: String,

    /// Namespace for property IRIs.
    #[arg(long, value_name = "SCHEMA_NAMESPACE", default_value = "http://")]
    schemanamespace: String,

    /// Output format; `guess` picks it from the --outdata extension.
    #[arg(long, default_value = "guess")]
    format: String,

    /// CSV field delimiter (`\t` for tabs).
    #[arg(long)]
    sep: Option<String>,

    /// CSV quote character.
    #[arg(long)]
    quotechar: Option<String>,

    /// Additional strings to treat as missing values.
    #[arg(long = "na-values", num_args = 1..)]
    na_values: Vec<String>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log);

    let format = resolve_format(&args.format, &args.outdata)?;

    let mut options = LoadOptions::default().with_na_values(args.na_values.iter().cloned());
    if let Some(sep) = &args.sep {
        options = options.with_delimiter(sep)?;
    }
    if let Some(quote) = &args.quotechar {
        options = options.with_quote(quote)?;
    }

    let table = load_csv_path(&args.input, &options)
        .with_context(|| format!("Load failed: {}", args.input.display()))?;

    let out = materialize(
        &table,
        &Namespace::new(args.tnamespace.as_str()),
        &Namespace::new(args.schemanamespace.as_str()),
        &Iri::new(args.tclass.as_str()),
    );

    println!(
        "{} rows, {} columns: {} data triples, {} schema triples",
        table.len(),
        table.headers.len(),
        out.data.len(),
        out.schema.len()
    );

    write_graph(&args.outdata, &out.data, format).context("Serialize failed")?;
    println!("  Written: {}", args.outdata.display());

    write_graph(&args.outschema, &out.schema, format).context("Serialize failed")?;
    println!("  Written: {}", args.outschema.display());

    Ok(())
}
