//! Version snapshots and the adjacent-pair key type.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One snapshot of the analyzed program, with its compiled artifacts.
///
/// The build directory is expected to contain the packaged `code.jar`
/// and `tests.jar` artifacts produced by that version's build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Human-readable name, unique within the input sequence.
    pub name: String,

    /// Absolute build-output directory holding the packaged artifacts.
    pub build_dir: PathBuf,
}

impl Version {
    pub fn new(name: impl Into<String>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            build_dir: build_dir.into(),
        }
    }
}

/// Registry key scoping one comparison: an (older, newer) pair drawn
/// from consecutive positions of the input sequence.
///
/// Equality and hashing are structural over both members. `older`
/// always precedes `newer` in the original sequence; pairs are never
/// built from non-adjacent versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionPair {
    pub older: Version,
    pub newer: Version,
}

impl VersionPair {
    pub fn new(older: Version, newer: Version) -> Self {
        Self { older, newer }
    }

    /// Label used in logs and summaries, e.g. `v1-v2`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.older.name, self.newer.name)
    }
}

impl std::fmt::Display for VersionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
