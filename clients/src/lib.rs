//! Shared plumbing for the csv2rdf client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use csv2rdf_graph::RdfFormat;
use tracing_subscriber::EnvFilter;

/// Verbosity flags shared by every binary.
#[derive(Debug, Clone, Copy, Args)]
pub struct LogArgs {
    /// Show progress and collision logs (honours RUST_LOG).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logs, warnings included.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Installs the stderr log subscriber.
///
/// `--quiet` turns logging off, `--verbose` shows `info` (or `RUST_LOG` when
/// set), and the default shows warnings only.
pub fn init_tracing(args: LogArgs) {
    let filter = if args.quiet {
        EnvFilter::new("off")
    } else if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves a `--format` value; `guess` picks the format from `path`.
///
/// # Errors
///
/// Returns an error for unknown names or unguessable extensions.
pub fn resolve_format(name: &str, path: &Path) -> Result<RdfFormat> {
    if name.eq_ignore_ascii_case("guess") {
        match RdfFormat::guess(path) {
            Some(format) => Ok(format),
            None => bail!(
                "Cannot guess RDF format from {}; pass --format",
                path.display()
            ),
        }
    } else {
        Ok(name.parse::<RdfFormat>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_uses_extension() {
        let f = resolve_format("guess", Path::new("out.nt")).ok();
        assert_eq!(f, Some(RdfFormat::NTriples));
        assert!(resolve_format("guess", Path::new("out.xyz")).is_err());
    }

    #[test]
    fn explicit_name_wins() {
        let f = resolve_format("turtle", Path::new("out.nt")).ok();
        assert_eq!(f, Some(RdfFormat::Turtle));
    }
}
