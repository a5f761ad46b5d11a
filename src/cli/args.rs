use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::pipeline::SynthesisOptions;
use enumtab_common::LayoutLimits;
use enumtab_layout::NameOptions;

/// CLI arguments for the enumtab binary.
#[derive(Parser, Debug)]
#[command(
    name = "enumtab",
    version,
    about = "Generate name tables and string accessors for enumerated integer types"
)]
pub struct CliArgs {
    /// Declaration manifest (JSON) listing each type's constants.
    pub input: PathBuf,

    /// Comma-separated list of type names to generate.
    #[arg(short = 't', long = "type", value_delimiter = ',', required = true)]
    pub types: Vec<String>,

    /// Output file; defaults to <type>_string.rs next to the manifest.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Trim this prefix from generated constant names.
    #[arg(long = "trim-prefix", alias = "trimprefix")]
    pub trim_prefix: Option<String>,

    /// Use a constant's trailing line comment, when present, as its name.
    #[arg(long = "line-comment", alias = "linecomment")]
    pub line_comment: bool,

    /// Also generate the name->value accessor (`from_name`).
    #[arg(long = "from-string")]
    pub from_string: bool,

    /// What to write.
    #[arg(long, value_enum, default_value_t = OutputFormat::Rust)]
    pub format: OutputFormat,

    /// Report a type that fails to synthesize and continue with the rest.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Largest number of runs a multi-run table may have before going sparse.
    #[arg(long = "max-runs")]
    pub max_runs: Option<usize>,

    /// Round-trip every constant through the synthesized tables before writing.
    #[arg(long)]
    pub check: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust source for tuple newtypes.
    Rust,
    /// The accessor IR of every type as JSON.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Rust => "rs",
            OutputFormat::Json => "json",
        }
    }
}

impl CliArgs {
    /// Options for the pipeline. Flags override limits read from the manifest.
    pub fn synthesis_options(&self, limits: LayoutLimits) -> SynthesisOptions {
        let limits = match self.max_runs {
            Some(max_runs) => limits.with_max_runs(max_runs),
            None => limits,
        };
        SynthesisOptions {
            names: NameOptions {
                trim_prefix: self.trim_prefix.clone(),
                line_comment: self.line_comment,
            },
            reverse_lookup: self.from_string,
            limits,
        }
    }
}
