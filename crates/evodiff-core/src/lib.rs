//! Evodiff Core Library
//!
//! Orchestrates pairwise structural comparison across an ordered
//! sequence of program version snapshots: walks consecutive pairs,
//! writes per-version analysis-scope descriptors, and constructs one
//! comparison engine per pair for code artifacts and one for test
//! artifacts.

pub mod differ;
pub mod differencer;
pub mod domain;
pub mod pairs;
pub mod registry;
pub mod scope;
pub mod telemetry;
pub mod tracker;

pub use domain::{EvodiffError, Result, Version, VersionPair};

pub use differ::{DiffOutcome, Differ, PairDiff, GENERATED_FILE_PATTERNS};
pub use differencer::{ArtifactKind, Differencer, DifferencerFactory, FsDifferencerFactory};
pub use pairs::consecutive_pairs;
pub use registry::DifferencerRegistry;
pub use scope::{
    render_scope_config, write_scope_config, EXCLUSIONS_FILE, JUNIT_JAR, PRIMORDIAL_MODEL_JAR,
};
pub use telemetry::init_tracing;
pub use tracker::{FsRunTracker, MemoryRunTracker, RunMarker, RunTracker};

/// Evodiff version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
