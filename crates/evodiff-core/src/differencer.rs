//! Comparison-engine construction boundary.
//!
//! Engine internals (class-hierarchy diffing, call-graph analysis) live
//! behind [`DifferencerFactory`]: one constructor-like operation per
//! artifact kind, each taking the three resource paths an engine needs
//! and returning a ready handle or a construction error.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{EvodiffError, Result};

/// Which compiled artifact of a version a comparison targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Production classes (`code.jar`).
    Code,
    /// Test classes (`tests.jar`).
    Tests,
}

impl ArtifactKind {
    /// Packaged artifact file name inside a version's build directory.
    pub fn artifact_file(&self) -> &'static str {
        match self {
            ArtifactKind::Code => "code.jar",
            ArtifactKind::Tests => "tests.jar",
        }
    }

    /// Scope descriptor file name written into a version's build directory.
    pub fn scope_file(&self) -> &'static str {
        match self {
            ArtifactKind::Code => "wala-code.config",
            ArtifactKind::Tests => "wala-tests.config",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Code => write!(f, "code"),
            ArtifactKind::Tests => write!(f, "tests"),
        }
    }
}

/// Backend that constructs comparison engines.
///
/// Inject a real implementation that loads the analysis scopes, or a
/// stub for tests. Arguments are always (older scope, newer scope,
/// exclusions), in that order.
#[async_trait]
pub trait DifferencerFactory: Send + Sync {
    /// Engine handle type produced by this backend.
    type Engine: Send;

    /// Construct an engine comparing the production-code artifacts.
    async fn code_differencer(
        &self,
        older_scope: &Path,
        newer_scope: &Path,
        exclusions: &Path,
    ) -> Result<Self::Engine>;

    /// Construct an engine comparing the test artifacts.
    async fn test_differencer(
        &self,
        older_scope: &Path,
        newer_scope: &Path,
        exclusions: &Path,
    ) -> Result<Self::Engine>;
}

/// Opaque engine handle: the artifact kind plus the three input paths
/// the analysis phase will load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Differencer {
    kind: ArtifactKind,
    older_scope: PathBuf,
    newer_scope: PathBuf,
    exclusions: PathBuf,
}

impl Differencer {
    /// Build a handle, verifying each input path refers to an existing
    /// regular file.
    pub fn new(
        kind: ArtifactKind,
        older_scope: impl Into<PathBuf>,
        newer_scope: impl Into<PathBuf>,
        exclusions: impl Into<PathBuf>,
    ) -> Result<Self> {
        let handle = Self {
            kind,
            older_scope: older_scope.into(),
            newer_scope: newer_scope.into(),
            exclusions: exclusions.into(),
        };
        for path in [&handle.older_scope, &handle.newer_scope, &handle.exclusions] {
            if !path.is_file() {
                return Err(EvodiffError::EngineConstruction {
                    kind: kind.to_string(),
                    reason: format!("input is not a readable file: {}", path.display()),
                });
            }
        }
        Ok(handle)
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn older_scope(&self) -> &Path {
        &self.older_scope
    }

    pub fn newer_scope(&self) -> &Path {
        &self.newer_scope
    }

    pub fn exclusions(&self) -> &Path {
        &self.exclusions
    }
}

/// Default factory: validates inputs on construction and hands back
/// path-carrying [`Differencer`] handles.
#[derive(Debug, Default)]
pub struct FsDifferencerFactory;

impl FsDifferencerFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DifferencerFactory for FsDifferencerFactory {
    type Engine = Differencer;

    async fn code_differencer(
        &self,
        older_scope: &Path,
        newer_scope: &Path,
        exclusions: &Path,
    ) -> Result<Differencer> {
        Differencer::new(ArtifactKind::Code, older_scope, newer_scope, exclusions)
    }

    async fn test_differencer(
        &self,
        older_scope: &Path,
        newer_scope: &Path,
        exclusions: &Path,
    ) -> Result<Differencer> {
        Differencer::new(ArtifactKind::Tests, older_scope, newer_scope, exclusions)
    }
}
