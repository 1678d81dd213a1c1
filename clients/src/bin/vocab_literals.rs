//! `vocab-literals`: creates a flat RDF vocabulary from literal values of
//! one property.
//!
//! Reads an RDF data file, replaces the literal values of `SOURCE_PROPERTY`
//! with links (`TARGET_PROPERTY`) to vocabulary terms minted under
//! `TARGET_NAMESPACE`, and writes the links and the vocabulary (typed
//! `TARGET_CLASS`, labelled with `skos:prefLabel`) as two documents.
//!
//! **Usage:**
//! ```text
//! vocab-literals <input> <output> <output_vocab> <SOURCE_PROPERTY> <TARGET_PROPERTY>
//!                <TARGET_CLASS> <TARGET_NAMESPACE>
//!                [--format turtle] [--mapping FILE] [--config FILE] [--lang fi]
//!                [--delimiter /] [--keep-empty] [--strict] [--uncertainty-notes] [--remove]
//! ```
//!
//! Exits non-zero if loading, normalization, or serialization fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use csv2rdf_clients::{init_tracing, LogArgs};
use csv2rdf_graph::parser::parse_file;
use csv2rdf_graph::serializer::write_graph;
use csv2rdf_graph::RdfFormat;
use csv2rdf_vocab::{
    normalize_with, EmptySegments, Identity, NormalizerConfig, NormalizerOptions, Normalization,
    TermRewrite, UncertaintyMarker, ValueOverrides,
};
use tracing::info;

/// Create a flat vocabulary based on an input file and property.
#[derive(Parser)]
#[command(
    name = "vocab-literals",
    about = "Create an RDF vocabulary from literal RDF values"
)]
struct Args {
    /// Input RDF data file.
    input: PathBuf,

    /// Output RDF data file (subject links and notes).
    output: PathBuf,

    /// Output RDF vocabulary file.
    output_vocab: PathBuf,

    /// Property used in the input file.
    #[arg(value_name = "SOURCE_PROPERTY")]
    property: String,

    /// Target property for the output file.
    #[arg(value_name = "TARGET_PROPERTY")]
    tproperty: String,

    /// Target class for target property values.
    #[arg(value_name = "TARGET_CLASS")]
    tclass: String,

    /// Namespace for target values.
    #[arg(value_name = "TARGET_NAMESPACE")]
    tnamespace: String,

    /// Format of the RDF files (turtle, nt; json-ld for output only).
    #[arg(long, default_value = "turtle")]
    format: RdfFormat,

    /// Format of the input file, when it differs from --format.
    #[arg(long)]
    input_format: Option<RdfFormat>,

    /// TOML file of `"from" = "to"` value mappings.
    #[arg(long, value_name = "FILE")]
    mapping: Option<PathBuf>,

    /// TOML file of normalizer options.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Language tag of preferred labels.
    #[arg(long)]
    lang: Option<String>,

    /// Delimiter separating multiple values in one literal.
    #[arg(long)]
    delimiter: Option<String>,

    /// Mint identifiers for empty segments instead of skipping them.
    #[arg(long)]
    keep_empty: bool,

    /// Fail on non-literal values instead of skipping them.
    #[arg(long)]
    strict: bool,

    /// Treat a trailing `?` as uncertainty and attach notes to the subject.
    #[arg(long)]
    uncertainty_notes: bool,

    /// Remove original property triples (accepted; has no effect).
    #[arg(long)]
    remove: bool,

    #[command(flatten)]
    log: LogArgs,
}

impl Args {
    fn normalizer_config(&self) -> Result<NormalizerConfig> {
        let mut config = NormalizerConfig::new(
            self.tnamespace.as_str(),
            self.property.as_str(),
            self.tproperty.as_str(),
            self.tclass.as_str(),
        );

        if let Some(path) = &self.config {
            let options = NormalizerOptions::from_file(path)?;
            config = config.with_options(options);
        }
        if let Some(path) = &self.mapping {
            let overrides = ValueOverrides::from_file(path)?;
            info!(entries = overrides.len(), "loaded value mapping");
            config = config.with_overrides(overrides);
        }
        if let Some(lang) = &self.lang {
            config = config.with_language(lang.as_str());
        }
        if let Some(delimiter) = &self.delimiter {
            config = config.with_delimiter(delimiter.as_str());
        }
        if self.keep_empty {
            config = config.with_empty_segments(EmptySegments::Mint);
        }
        if self.strict {
            config = config.with_strict(true);
        }
        if self.remove {
            config = config.with_remove_source_triples(true);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log);

    let config = args.normalizer_config()?;
    let input_format = args.input_format.unwrap_or(args.format);
    if !input_format.is_readable() {
        bail!("Load failed: {input_format} cannot be used as an input format; pass --input-format");
    }

    let input = parse_file(&args.input, input_format)
        .with_context(|| format!("Load failed: {}", args.input.display()))?;
    info!(triples = input.len(), "parsed input file");

    let marker = UncertaintyMarker::occupation();
    let rewrite: &dyn TermRewrite = if args.uncertainty_notes {
        &marker
    } else {
        &Identity
    };
    let Normalization {
        annotations,
        vocabulary,
        report,
    } = normalize_with(&input, &config, rewrite).context("Normalize failed")?;

    println!(
        "{} source values, {} terms: {} vocabulary terms ({} collisions), {} annotation triples",
        report.source_triples,
        report.segments,
        report.minted,
        report.collisions,
        annotations.len()
    );
    let skipped = report.skipped_count();
    if skipped > 0 {
        println!("  Skipped: {skipped} values (see warnings)");
    }

    write_graph(&args.output, &annotations, args.format).context("Serialize failed")?;
    println!("  Written: {}", args.output.display());

    write_graph(&args.output_vocab, &vocabulary, args.format).context("Serialize failed")?;
    println!("  Written: {}", args.output_vocab.display());

    info!("serialized output files");
    Ok(())
}
