use crate::error::{AmiError, Result};
use crate::provider::ImageProvider;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Fewer snapshot files than this means the local cache is considered
/// unpopulated and a full refetch runs. A presence check only: existing
/// snapshots are never validated for freshness or completeness.
pub const MIN_SNAPSHOTS: usize = 5;

/// Decide whether this run hits the provider at all.
pub fn needs_refetch(refetch: bool, snapshot_count: usize) -> bool {
    refetch || snapshot_count < MIN_SNAPSHOTS
}

/// One persisted per-region listing in the cache directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub region: String,
    pub path: PathBuf,
}

/// Owns the snapshot directory and the region <-> filename mapping.
///
/// Every write goes through [`SnapshotStore::path_for`] and every read
/// re-derives the region from the file stem, so the two can never drift.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(SnapshotStore {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, region: &str) -> PathBuf {
        self.dir.join(format!("{}.json", region))
    }

    /// Persist one region's raw listing, pretty-printed. Overwrites any
    /// previous snapshot for the region unconditionally.
    pub fn write(&self, region: &str, response: &Value) -> Result<()> {
        if region.is_empty() || region.contains(['/', '\\']) {
            return Err(AmiError::InvalidInput(format!(
                "invalid region name for snapshot: {:?}",
                region
            )));
        }
        fs::write(self.path_for(region), serde_json::to_string_pretty(response)?)?;
        Ok(())
    }

    /// All snapshots currently on disk, sorted by region. Files whose name
    /// does not round-trip through the region mapping are rejected rather
    /// than silently mis-keyed.
    pub fn list(&self) -> Result<Vec<Snapshot>> {
        let mut snapshots = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let region = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    AmiError::InvalidInput(format!(
                        "snapshot file name is not valid UTF-8: {}",
                        path.display()
                    ))
                })?;

            if self.path_for(&region) != path {
                return Err(AmiError::InvalidInput(format!(
                    "snapshot file does not map back to a region: {}",
                    path.display()
                )));
            }

            snapshots.push(Snapshot { region, path });
        }

        snapshots.sort_by(|a, b| a.region.cmp(&b.region));
        Ok(snapshots)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}

/// Per-region result of a fetch pass. Denied regions are carried as data so
/// the caller decides how to log them; the loop itself never aborts on one.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched { region: String },
    Skipped { region: String, reason: String },
}

/// Serially fetch the caller's images for every provider region, persisting
/// one snapshot per accessible region. Failure to enumerate regions is fatal;
/// failure to list one region is a skip.
pub async fn fetch_all_regions(
    provider: &dyn ImageProvider,
    store: &SnapshotStore,
) -> Result<Vec<FetchOutcome>> {
    let regions = provider.regions().await?;
    let mut outcomes = Vec::with_capacity(regions.len());

    for region in regions {
        println!("checking region {}", region);

        match provider.owned_images(&region).await {
            Ok(response) => {
                store.write(&region, &response)?;
                tracing::debug!(region = %region, "snapshot written");
                outcomes.push(FetchOutcome::Fetched { region });
            }
            Err(denied) => {
                outcomes.push(FetchOutcome::Skipped {
                    region,
                    reason: denied.reason,
                });
            }
        }
    }

    Ok(outcomes)
}
