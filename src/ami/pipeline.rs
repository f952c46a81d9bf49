use crate::ami::record::{filter_and_sort, load_records};
use crate::ami::report;
use crate::ami::snapshot::{fetch_all_regions, needs_refetch, FetchOutcome, SnapshotStore};
use crate::cli::EmitterSet;
use crate::config::Config;
use crate::error::Result;
use crate::provider::ImageProvider;
use std::fs;

/// What a run did, for the caller and the tests.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub regions_fetched: usize,
    pub regions_skipped: usize,
    pub records: usize,
    pub matched: usize,
}

/// One full run: refetch gate, normalize, filter/sort, emit. Everything is
/// sequential and blocking apart from the provider calls themselves.
pub async fn run_pipeline(config: &Config, provider: &dyn ImageProvider) -> Result<RunSummary> {
    fs::create_dir_all(&config.data_dir)?;
    let store = SnapshotStore::open(&config.snapshot_dir)?;

    let mut summary = RunSummary::default();

    if needs_refetch(config.refetch, store.count()?) {
        for outcome in fetch_all_regions(provider, &store).await? {
            match outcome {
                FetchOutcome::Fetched { .. } => summary.regions_fetched += 1,
                FetchOutcome::Skipped { region, reason } => {
                    eprintln!("ERROR: can't access region {}, skipping...", region);
                    tracing::warn!(region = %region, reason = %reason, "region skipped");
                    summary.regions_skipped += 1;
                }
            }
        }
    }

    let records = load_records(&store)?;
    summary.records = records.len();

    tracing::debug!("length(records): {}", records.len());
    tracing::debug!("{}", serde_json::to_string_pretty(&records)?);
    let mut names: Vec<&str> = records.iter().map(|r| r.ami.as_str()).collect();
    names.sort();
    tracing::debug!("{}", serde_json::to_string(&names)?);

    let matched = filter_and_sort(&records, &config.filter);
    summary.matched = matched.len();

    tracing::debug!("length(matched): {}", matched.len());
    for record in &matched {
        tracing::debug!("{}:{}", record.ami, record.region);
    }

    let entries = report::doc_entries(&matched);
    report::write_doc_json(&config.doc_json, &entries)?;

    match config.emit {
        EmitterSet::All => {
            report::write_doc_ndjson(&config.doc_ndjson, &entries)?;
            report::write_doc_ts(&config.doc_ts, &config.doc_ndjson)?;
            report::write_command_script(&config.command_script, &entries)?;
        }
        EmitterSet::Doc => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(summary)
}
