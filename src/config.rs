use crate::cli::{Cli, EmitterSet};
use std::path::{Path, PathBuf};

/// Everything a run needs, resolved up front: paths, the filter token and
/// the operator flags. Components take this instead of reaching for ambient
/// process state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the local data directory
    pub data_dir: PathBuf,
    /// Snapshot cache, one `<region>.json` per region
    pub snapshot_dir: PathBuf,
    /// Structured document output
    pub doc_json: PathBuf,
    /// Newline-delimited record stream output
    pub doc_ndjson: PathBuf,
    /// Line-fragment output for pasting into TypeScript literals
    pub doc_ts: PathBuf,
    /// Generated visibility-toggle shell script
    pub command_script: PathBuf,
    /// Substring selecting one build's images
    pub filter: String,
    /// Force a full refetch regardless of the cache state
    pub refetch: bool,
    /// Which emitters to run
    pub emit: EmitterSet,
}

impl Config {
    pub fn new(data_dir: &Path, out_dir: &Path) -> Self {
        Config {
            data_dir: data_dir.to_path_buf(),
            snapshot_dir: data_dir.join("amis"),
            doc_json: out_dir.join("doc.json"),
            doc_ndjson: out_dir.join("doc.ndjson"),
            doc_ts: out_dir.join("doc.ts"),
            command_script: out_dir.join("commands.sh"),
            filter: crate::cli::DEFAULT_FILTER.to_string(),
            refetch: false,
            emit: EmitterSet::All,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Config::new(&cli.data_dir, &cli.out_dir);
        config.filter = cli.filter.clone();
        config.refetch = cli.refetch;
        config.emit = cli.emit;
        config
    }
}
