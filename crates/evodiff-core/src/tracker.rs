//! Run tracking: re-run suppression and stale-artifact cleanup.
//!
//! The orchestrator never decides on its own whether a job already
//! completed; it asks an injected [`RunTracker`]. [`FsRunTracker`]
//! persists a completion marker on disk and deletes previously
//! generated files before a fresh run; [`MemoryRunTracker`] satisfies
//! the same contract without touching disk, for tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::{EvodiffError, Result};

/// Collaborator deciding whether a job runs, and cleaning up after
/// prior runs.
#[async_trait]
pub trait RunTracker: Send + Sync {
    /// `true` if the job should execute. A completed prior run
    /// suppresses execution unless `force` is set.
    async fn should_run(&self, force: bool) -> Result<bool>;

    /// Remove artifacts generated by prior runs so stale data cannot
    /// contaminate this one.
    async fn clean_up(&self) -> Result<()>;

    /// Record that the job completed successfully.
    async fn mark_as_run(&self) -> Result<()>;
}

/// Completion record persisted by [`FsRunTracker::mark_as_run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMarker {
    /// Job identity (name plus input digest).
    pub job: String,

    /// Unique identifier of the completing run.
    pub run_id: Uuid,

    /// When the run completed.
    pub finished_at: DateTime<Utc>,
}

/// Short content digest identifying a set of tracked build directories.
fn job_digest(build_dirs: &[PathBuf]) -> String {
    let mut hasher = Sha256::new();
    for dir in build_dirs {
        hasher.update(dir.to_string_lossy().as_bytes());
        hasher.update(b"\n");
    }
    let digest = hex::encode(hasher.finalize());
    digest[..12].to_string()
}

/// Translate a glob-lite file-name pattern (literal text plus `*`
/// wildcards) into an anchored regex.
fn pattern_to_regex(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{}$", body))
        .map_err(|e| EvodiffError::Tracker(format!("bad file pattern {:?}: {}", pattern, e)))
}

/// Filesystem-backed run tracker.
///
/// The marker file lives at `<state_dir>/<job>-<digest>.run`, where the
/// digest is derived from the tracked build directories, so distinct
/// version sequences track independently. `clean_up` walks every build
/// directory and removes regular files whose names match a configured
/// pattern; a missing directory is skipped.
pub struct FsRunTracker {
    marker_path: PathBuf,
    job: String,
    build_dirs: Vec<PathBuf>,
    patterns: Vec<Regex>,
}

impl FsRunTracker {
    pub fn new(
        state_dir: impl Into<PathBuf>,
        job: impl Into<String>,
        build_dirs: Vec<PathBuf>,
        patterns: &[&str],
    ) -> Result<Self> {
        let job = job.into();
        let state_dir = state_dir.into();
        let marker_path = state_dir.join(format!("{}-{}.run", job, job_digest(&build_dirs)));
        let patterns = patterns
            .iter()
            .map(|p| pattern_to_regex(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            marker_path,
            job,
            build_dirs,
            patterns,
        })
    }

    /// Path of the completion marker this tracker reads and writes.
    pub fn marker_path(&self) -> &Path {
        &self.marker_path
    }

    fn name_matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }
}

#[async_trait]
impl RunTracker for FsRunTracker {
    async fn should_run(&self, force: bool) -> Result<bool> {
        if force {
            return Ok(true);
        }
        Ok(!self.marker_path.is_file())
    }

    async fn clean_up(&self) -> Result<()> {
        for dir in &self.build_dirs {
            if !dir.is_dir() {
                continue;
            }
            for entry in std::fs::read_dir(dir)? {
                let entry = entry?;
                if !entry.file_type()?.is_file() {
                    continue;
                }
                let name = entry.file_name();
                if self.name_matches(&name.to_string_lossy()) {
                    std::fs::remove_file(entry.path())?;
                }
            }
        }
        Ok(())
    }

    async fn mark_as_run(&self) -> Result<()> {
        if let Some(parent) = self.marker_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let marker = RunMarker {
            job: self.job.clone(),
            run_id: Uuid::new_v4(),
            finished_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&marker)?;
        std::fs::write(&self.marker_path, content)?;
        Ok(())
    }
}

/// In-memory tracker fake: records calls, never touches disk.
#[derive(Debug, Default)]
pub struct MemoryRunTracker {
    state: Mutex<MemoryTrackerState>,
}

#[derive(Debug, Default)]
struct MemoryTrackerState {
    has_run: bool,
    clean_ups: usize,
    marks: usize,
}

impl MemoryRunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker that already considers the job completed.
    pub fn with_completed_run() -> Self {
        let tracker = Self::default();
        tracker.state.lock().unwrap().has_run = true;
        tracker
    }

    pub fn has_run(&self) -> bool {
        self.state.lock().unwrap().has_run
    }

    pub fn clean_up_count(&self) -> usize {
        self.state.lock().unwrap().clean_ups
    }

    pub fn mark_count(&self) -> usize {
        self.state.lock().unwrap().marks
    }
}

#[async_trait]
impl RunTracker for MemoryRunTracker {
    async fn should_run(&self, force: bool) -> Result<bool> {
        Ok(force || !self.state.lock().unwrap().has_run)
    }

    async fn clean_up(&self) -> Result<()> {
        self.state.lock().unwrap().clean_ups += 1;
        Ok(())
    }

    async fn mark_as_run(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.has_run = true;
        state.marks += 1;
        Ok(())
    }
}
