//! CLI argument definitions for objmap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use objmap_cli::commands::MapRequest;
use objmap_map::{DEFAULT_MAX_DEPTH, MapOptions};

#[derive(Parser)]
#[command(
    name = "objmap",
    version,
    about = "Map JSON documents onto declared target types",
    long_about = "Map JSON documents onto target types declared in a schema file.\n\n\
                  Fields are copied by name, nested objects and arrays recursively.\n\
                  Use --strict to require fields flagged as required in the schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a JSON object (or array of objects) onto a declared type.
    Map(MapArgs),

    /// List the types declared in a schema file.
    Types(TypesArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Schema file declaring the target types.
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: PathBuf,

    /// Target type name.
    #[arg(long = "type", value_name = "NAME")]
    pub type_name: String,

    /// JSON input document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Fail when required target fields are missing from the source.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Apply rename, transform and ignore directives from the schema.
    #[arg(long = "apply-directives")]
    pub apply_directives: bool,

    /// Deepest object/array nesting to copy.
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Print single-line JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

impl MapArgs {
    pub fn to_request(&self) -> MapRequest {
        MapRequest {
            schema: self.schema.clone(),
            type_name: self.type_name.clone(),
            input: self.input.clone(),
            options: MapOptions::default()
                .with_strict_mapping(self.strict)
                .with_apply_directives(self.apply_directives)
                .with_max_depth(self.max_depth),
            compact: self.compact,
        }
    }
}

#[derive(Parser)]
pub struct TypesArgs {
    /// Schema file declaring the target types.
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
