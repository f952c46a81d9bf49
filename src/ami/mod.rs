//! AMI inventory pipeline.
//!
//! This module covers the local snapshot cache, the per-region fetch loop,
//! record normalization, filtering/sorting, and the report emitters.

/// Snapshot cache, region fetcher and the refetch gate
pub mod snapshot;
/// Normalized records, filtering and sorting
pub mod record;
/// Report and command-script emitters
pub mod report;
/// End-to-end run orchestration
pub mod pipeline;

pub use pipeline::*;
pub use record::*;
pub use report::*;
pub use snapshot::*;
