//! Shared data model for the SINAN clinical column pipeline.
//!
//! Every pipeline stage consumes and produces plain row values from this
//! crate; nothing here is mutated in place across stages.

pub mod duplicates;
pub mod group;
pub mod matching;
pub mod name;

pub use duplicates::{DuplicateCandidate, DuplicateResolution, RemovalReason, RemovedDuplicate};
pub use group::ClinicalGroup;
pub use matching::MatchCandidate;
pub use name::NormalizedName;
