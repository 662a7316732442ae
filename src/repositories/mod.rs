pub mod gap_source_repository;

pub use gap_source_repository::{ArtifactGapSource, GapSource};
