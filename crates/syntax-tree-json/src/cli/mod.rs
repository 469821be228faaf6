//! `stjn`: command-line inspection of serialized syntax trees.
//!
//! Provides the logic used by the `stjn` binary: argument definitions,
//! loading a source file and its serialized tree, and rendering the result.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum, ValueHint};
use thiserror::Error;
use tracing::debug;

use crate::decoder::{DecoderOptions, DEFAULT_MAX_DEPTH};
use crate::error::DecodeError;
use crate::format::format;
use crate::loader::Loader;
use crate::node::Node;
use crate::pretty_print::{pretty_print, DEFAULT_WIDTH};
use crate::visit::Summary;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("failed to render json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error: 2 when reading failed, 1 when the
    /// bytes were read but could not be decoded or rendered.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Read { .. }
            | CliError::Decode {
                source: DecodeError::Io { .. },
                ..
            } => 2,
            CliError::Decode { .. } | CliError::Json(_) => 1,
        }
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// Largest `--max-depth` accepted. Decoding recurses once per level, and this
/// many levels fit in an 8 MiB main-thread stack.
pub const MAX_DEPTH_LIMIT: u64 = 2048;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact rendering: `{ "a": 1, "b": [true, null] }`.
    Display,
    /// Structural s-expression with node types.
    Pretty,
    /// JSON text reflowed to `--width`.
    Source,
    /// Full tree with locations, as JSON.
    Json,
    /// Node counts per type and tree depth, as JSON.
    Summary,
}

#[derive(Debug, Parser)]
#[command(
    name = "stjn",
    version,
    about = "Decode a serialized JSON syntax tree against its source text"
)]
pub struct Args {
    /// JSON source the tree was serialized from.
    #[arg(value_hint = ValueHint::FilePath)]
    pub source: PathBuf,
    /// Serialized tree [default: <SOURCE>.ser].
    #[arg(value_hint = ValueHint::FilePath)]
    pub serialized: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "display")]
    pub format: OutputFormat,
    /// Line width for `--format pretty` and `--format source`.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
    /// Deepest nesting accepted before decoding fails.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_LIMIT)
    )]
    pub max_depth: usize,
}

impl Args {
    pub fn serialized_path(&self) -> PathBuf {
        match &self.serialized {
            Some(path) => path.clone(),
            None => default_serialized_path(&self.source),
        }
    }
}

fn default_serialized_path(source: &Path) -> PathBuf {
    let mut path = source.as_os_str().to_owned();
    path.push(".ser");
    PathBuf::from(path)
}

// ── Run ───────────────────────────────────────────────────────────────────

/// Loads the tree named by `args` and renders it in the requested format.
pub fn run(args: &Args) -> Result<String, CliError> {
    let serialized_path = args.serialized_path();
    debug!(
        source = %args.source.display(),
        serialized = %serialized_path.display(),
        "loading syntax tree"
    );

    let source = fs::read_to_string(&args.source).map_err(|source| CliError::Read {
        path: args.source.clone(),
        source,
    })?;
    let file = File::open(&serialized_path).map_err(|source| CliError::Read {
        path: serialized_path.clone(),
        source,
    })?;

    let loader = Loader::with_options(DecoderOptions {
        max_depth: args.max_depth,
    });
    let root = loader
        .load_from_reader(&source, BufReader::new(file))
        .map_err(|source| CliError::Decode {
            path: serialized_path,
            source,
        })?;
    render(&root, args.format, args.width)
}

/// Renders `node` in `output` format. The result always ends with a newline.
pub fn render(node: &Node<'_>, output: OutputFormat, width: usize) -> Result<String, CliError> {
    let mut text = match output {
        OutputFormat::Display => node.to_string(),
        OutputFormat::Pretty => pretty_print(node, width),
        OutputFormat::Source => format(node, width),
        OutputFormat::Json => serde_json::to_string_pretty(node)?,
        OutputFormat::Summary => serde_json::to_string_pretty(&Summary::of(node))?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

// ── Tests ─────────────────────────────────────────────────────────────────
