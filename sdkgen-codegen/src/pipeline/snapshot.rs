//! Phase snapshots for `--visualize`.
//!
//! The plugin records the IR, computed data and diagnostics after every phase
//! and can write each one to `<phase>.json`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard},
};

use eyre::{Result, WrapErr};
use sdkgen_ir::Package;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::analysis::ComputedData;

/// Pipeline state captured after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,
    /// Present from the lower phase onwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<Package>,
    /// Present from the analyze phase onwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Captures a [`PhaseSnapshot`] after each phase.
///
/// With an output directory, each snapshot is also written as soon as its
/// phase completes, so a failing later phase still leaves earlier snapshots
/// on disk.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.read().clone()
    }

    /// Write every captured snapshot into `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.read()
            .iter()
            .try_for_each(|snapshot| write_snapshot(dir.as_ref(), snapshot))
    }

    // A panicking writer cannot leave the Vec half-updated, so poisoning is
    // safe to ignore.
    fn read(&self) -> RwLockReadGuard<'_, Vec<PhaseSnapshot>> {
        self.snapshots.read().unwrap_or_else(|e| e.into_inner())
    }

    fn capture(&self, phase: &str, ctx: &CompilationContext) -> PhaseSnapshot {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            computed: ctx.computed.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(snapshot.clone());
        snapshot
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = self.capture(phase, ctx);
        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create snapshot directory {}", dir.display()))?;

    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json + "\n")
        .wrap_err_with(|| format!("failed to write snapshot {}", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote phase snapshot");
    Ok(())
}
