//! Pairwise diff orchestration across an ordered version sequence.
//!
//! [`Differ`] walks consecutive version pairs, writes the analysis
//! scopes both engines need, constructs one code engine and one test
//! engine per pair, and records them in two pair-keyed registries.
//! Re-run suppression and stale-file cleanup are delegated to an
//! injected [`RunTracker`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::differencer::{ArtifactKind, DifferencerFactory};
use crate::domain::{Result, Version, VersionPair};
use crate::pairs::consecutive_pairs;
use crate::registry::DifferencerRegistry;
use crate::scope::{write_scope_config, EXCLUSIONS_FILE};
use crate::tracker::RunTracker;

/// File-name patterns this task generates into version build
/// directories. Handed to the run tracker so prior runs' leftovers are
/// removed before a fresh run.
pub const GENERATED_FILE_PATTERNS: &[&str] = &[
    "emptytrace.txt",
    "data-testslist-skipped-1.txt",
    "data-testslist-skipped-2.txt",
    "data-testout-*.txt",
    "data-trace-curr-*.txt",
    "wala-*.config",
];

/// Whether a [`Differ::run`] call actually executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOutcome {
    /// The full pairing and construction sequence ran to completion.
    Ran,
    /// A completed prior run suppressed execution; no side effects.
    Skipped,
}

/// Engines constructed for one adjacent pair.
#[derive(Debug)]
pub struct PairDiff<E> {
    pub pair: VersionPair,
    pub code: E,
    pub tests: E,
}

/// Orchestrates pairwise comparison over an ordered version sequence.
pub struct Differ<F: DifferencerFactory> {
    versions: Vec<Version>,
    config_dir: PathBuf,
    factory: F,
    tracker: Arc<dyn RunTracker>,
    code_differencers: DifferencerRegistry<F::Engine>,
    test_differencers: DifferencerRegistry<F::Engine>,
}

impl<F: DifferencerFactory> Differ<F> {
    pub fn new(
        versions: Vec<Version>,
        config_dir: impl Into<PathBuf>,
        factory: F,
        tracker: Arc<dyn RunTracker>,
    ) -> Self {
        Self {
            versions,
            config_dir: config_dir.into(),
            factory,
            tracker,
            code_differencers: DifferencerRegistry::new(),
            test_differencers: DifferencerRegistry::new(),
        }
    }

    /// Execute the pairing and construction sequence.
    ///
    /// Consults the tracker first: a completed prior run short-circuits
    /// to [`DiffOutcome::Skipped`] unless `force` is set. Otherwise
    /// stale generated files are removed, every consecutive pair is
    /// diffed in sequence order, and the job is marked complete.
    ///
    /// An error aborts the run immediately. Pairs diffed before the
    /// failure stay registered and no completion marker is written, so
    /// callers must not assume registry completeness after an `Err`.
    pub async fn run(&mut self, force: bool) -> Result<DiffOutcome> {
        if !self.tracker.should_run(force).await? {
            info!(versions = self.versions.len(), "Diff already completed, skipping");
            return Ok(DiffOutcome::Skipped);
        }

        self.tracker.clean_up().await?;

        if let Some(first) = self.versions.first() {
            info!(version = %first.name, "Skipping first version: initial anchor");
        }

        for pair in consecutive_pairs(&self.versions) {
            info!(pair = %pair.label(), "Diffing pair");
            let diff = self.diff_pair(&pair).await?;
            self.code_differencers.put(diff.pair.clone(), diff.code);
            self.test_differencers.put(diff.pair, diff.tests);
        }

        self.tracker.mark_as_run().await?;
        Ok(DiffOutcome::Ran)
    }

    /// Prepare and construct the engines for one pair: four scope
    /// descriptors (code and tests, for both versions), then one engine
    /// per artifact kind.
    async fn diff_pair(&self, pair: &VersionPair) -> Result<PairDiff<F::Engine>> {
        let code = ArtifactKind::Code;
        let older_code =
            write_scope_config(&pair.older, &self.config_dir, code.artifact_file(), code.scope_file())?;
        let newer_code =
            write_scope_config(&pair.newer, &self.config_dir, code.artifact_file(), code.scope_file())?;

        let tests = ArtifactKind::Tests;
        let older_tests =
            write_scope_config(&pair.older, &self.config_dir, tests.artifact_file(), tests.scope_file())?;
        let newer_tests =
            write_scope_config(&pair.newer, &self.config_dir, tests.artifact_file(), tests.scope_file())?;

        let exclusions = self.config_dir.join(EXCLUSIONS_FILE);

        let code_engine = self
            .factory
            .code_differencer(&older_code, &newer_code, &exclusions)
            .await?;
        let test_engine = self
            .factory
            .test_differencer(&older_tests, &newer_tests, &exclusions)
            .await?;

        Ok(PairDiff {
            pair: pair.clone(),
            code: code_engine,
            tests: test_engine,
        })
    }

    /// Code-artifact engines, keyed by pair in generation order.
    pub fn code_differencers(&self) -> &DifferencerRegistry<F::Engine> {
        &self.code_differencers
    }

    /// Test-artifact engines, keyed by pair in generation order.
    pub fn test_differencers(&self) -> &DifferencerRegistry<F::Engine> {
        &self.test_differencers
    }

    /// Consume the orchestrator, yielding `(code, tests)` registries
    /// for bulk downstream use.
    pub fn into_registries(
        self,
    ) -> (
        DifferencerRegistry<F::Engine>,
        DifferencerRegistry<F::Engine>,
    ) {
        (self.code_differencers, self.test_differencers)
    }
}
