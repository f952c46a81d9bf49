use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default filter token: the build whose images this run reports on.
pub const DEFAULT_FILTER: &str = "sbx-cdi 2022-09-07T22-23-09.989Z";

#[derive(Parser)]
#[command(name = "amictl")]
#[command(about = "AMI inventory, reporting, and visibility-toggle script generation")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Refresh snapshot data from the provider before reporting
    #[arg(short, long)]
    pub refetch: bool,

    /// Substring that selects the images of one build
    #[arg(long, default_value = DEFAULT_FILTER)]
    pub filter: String,

    /// Which report set to emit
    #[arg(long, value_enum, default_value = "all")]
    pub emit: EmitterSet,

    /// Directory holding the per-region snapshot cache
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitterSet {
    /// doc.json, doc.ndjson, doc.ts and the visibility command script
    All,
    /// doc.json only, also printed to stdout
    Doc,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
