use crate::ami::snapshot::SnapshotStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// One region's raw listing as persisted in a snapshot file.
#[derive(Debug, Deserialize)]
pub struct RegionListing {
    #[serde(rename = "Images")]
    pub images: Vec<ImageDescriptor>,
}

/// A single image entry inside a snapshot. `ImageId` and `Name` are
/// mandatory; a snapshot missing either aborts the run.
#[derive(Debug, Deserialize)]
pub struct ImageDescriptor {
    #[serde(rename = "ImageId")]
    pub image_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<ImageTag>>,
}

#[derive(Debug, Deserialize)]
pub struct ImageTag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl ImageDescriptor {
    /// Value of the first "Name" tag, when one exists. Diagnostic only; the
    /// reports are keyed on the image name, not the tag.
    pub fn display_name(&self) -> Option<&str> {
        self.tags
            .as_deref()?
            .iter()
            .find(|t| t.key == "Name")
            .map(|t| t.value.as_str())
    }
}

/// The uniform record every emitter works from. `region` always comes from
/// the snapshot's region key, never from a field inside the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmiRecord {
    pub region: String,
    pub ami: String,
    pub ami_id: String,
}

/// Flatten every descriptor in every snapshot into one record. No filtering
/// and no deduplication happens here.
pub fn load_records(store: &SnapshotStore) -> Result<Vec<AmiRecord>> {
    let mut records = Vec::new();

    for snapshot in store.list()? {
        let raw = fs::read_to_string(&snapshot.path)?;
        let listing: RegionListing = serde_json::from_str(&raw)?;

        for image in listing.images {
            if let Some(display_name) = image.display_name() {
                tracing::debug!(
                    region = %snapshot.region,
                    ami_id = %image.image_id,
                    display_name,
                    "Name tag"
                );
            }

            records.push(AmiRecord {
                region: snapshot.region.clone(),
                ami: image.name,
                ami_id: image.image_id,
            });
        }
    }

    Ok(records)
}

/// Select records whose image name contains `token` (case-sensitive, plain
/// substring), sorted descending by (name, region). The sort is stable, so
/// full ties keep their input order.
pub fn filter_and_sort(records: &[AmiRecord], token: &str) -> Vec<AmiRecord> {
    let mut matched: Vec<AmiRecord> = records
        .iter()
        .filter(|r| r.ami.contains(token))
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        (b.ami.as_str(), b.region.as_str()).cmp(&(a.ami.as_str(), a.region.as_str()))
    });

    matched
}
