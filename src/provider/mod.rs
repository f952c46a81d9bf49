//! Cloud provider boundary.
//!
//! The pipeline only ever talks to the provider through the [`ImageProvider`]
//! trait, so tests can drive it with canned responses and the real EC2-backed
//! implementation stays confined to one file.

/// EC2-backed provider implementation
pub mod aws;

pub use aws::*;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A region the provider refused to serve. Recoverable: the fetcher logs it
/// and moves on to the next region.
#[derive(Debug)]
pub struct AccessDenied {
    pub reason: String,
}

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// All region identifiers the provider currently knows about.
    async fn regions(&self) -> Result<Vec<String>>;

    /// The raw image-listing response for one region, restricted to images
    /// owned by the caller. Shape: `{"Images": [...]}` with the provider's
    /// own field naming, so snapshots stay faithful to the wire format.
    async fn owned_images(&self, region: &str) -> std::result::Result<Value, AccessDenied>;
}
