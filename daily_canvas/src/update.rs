//! Orchestration for `daily-canvas update`.
//!
//! Locates the canvas in the vault, applies the pure relocation from
//! [`crate::core::relocate`] and writes the document back when a group was
//! found. Skips are outcomes, not errors.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::journal::journal_path;
use crate::core::relocate::relocate_group_members;
use crate::io::canvas_store::{load_canvas, write_canvas};
use crate::io::config::DailyConfig;
use crate::io::vault::find_canvas;

/// Inputs for a single update run.
#[derive(Debug, Clone)]
pub struct UpdateRequest<'a> {
    pub vault_root: &'a Path,
    pub config: &'a DailyConfig,
    /// Calendar date the journal path is built from.
    pub date: NaiveDate,
}

/// Structured update outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No file named `canvas_name` exists in the vault. Nothing written.
    CanvasMissing { canvas_name: String },
    /// Canvas has no group labelled `group_name`. Nothing written.
    GroupMissing {
        canvas_path: PathBuf,
        group_name: String,
    },
    /// Canvas rewritten.
    Updated {
        canvas_path: PathBuf,
        journal_path: String,
        /// Node positions inside the group.
        relocated: Vec<usize>,
        /// Subset of `relocated` whose file reference changed this run.
        changed: Vec<usize>,
    },
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateOutcome::CanvasMissing { canvas_name } => {
                write!(f, "skipped: canvas {canvas_name} not found")
            }
            UpdateOutcome::GroupMissing {
                canvas_path,
                group_name,
            } => write!(
                f,
                "skipped: group {group_name} not found in {}",
                canvas_path.display()
            ),
            UpdateOutcome::Updated {
                canvas_path,
                journal_path,
                relocated,
                changed,
            } => write!(
                f,
                "updated: canvas={} journal={} relocated={} changed={}",
                canvas_path.display(),
                journal_path,
                relocated.len(),
                changed.len()
            ),
        }
    }
}

/// Run one read-relocate-write pass over the configured canvas.
pub fn run_update(request: &UpdateRequest<'_>) -> Result<UpdateOutcome> {
    let config = request.config;
    config.validate()?;

    let Some(canvas_path) = find_canvas(request.vault_root, &config.canvas_name)
        .context("locate canvas")?
    else {
        info!(canvas_name = %config.canvas_name, "canvas not found, skipping");
        return Ok(UpdateOutcome::CanvasMissing {
            canvas_name: config.canvas_name.clone(),
        });
    };

    let mut doc = load_canvas(&canvas_path)?
        .into_document(config.parse_policy())
        .with_context(|| format!("load canvas {}", canvas_path.display()))?;

    let target = journal_path(&config.journal_dir, request.date);
    debug!(journal_path = %target, "journal path computed");

    let summary = relocate_group_members(&mut doc, &config.group_name, &target);
    if !summary.group_found() {
        info!(
            group_name = %config.group_name,
            canvas = %canvas_path.display(),
            "group not found, skipping"
        );
        return Ok(UpdateOutcome::GroupMissing {
            canvas_path,
            group_name: config.group_name.clone(),
        });
    }

    write_canvas(&canvas_path, &doc)?;
    info!(
        canvas = %canvas_path.display(),
        journal_path = %target,
        relocated = summary.relocated.len(),
        changed = summary.changed.len(),
        "canvas updated"
    );
    Ok(UpdateOutcome::Updated {
        canvas_path,
        journal_path: target,
        relocated: summary.relocated,
        changed: summary.changed,
    })
}
