use crate::batch::Batch;
use crate::compress::{self, CompressionSummary};
use crate::config::ConfigStore;
use crate::error::{CompressionError, ConfigError, ValidationError};
use crate::select;
use std::path::Path;

/// Workflow position within one application session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A batch is built but not yet compressed.
    Selected,
    /// A summary is available; only reset leads out of here. The same batch
    /// cannot be compressed twice without re-selecting.
    Compressed,
}

/// Owner of the single mutable batch and the state machine around it.
///
/// The presentation layer holds one `Session` and calls into it; the gating
/// queries tell it which affordances to enable. There is no ambient state.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    batch: Batch,
    summary: Option<CompressionSummary>,
    /// Latched after an export-directory failure; selection stays blocked
    /// until a new directory has been configured.
    export_dir_required: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    pub fn summary(&self) -> Option<&CompressionSummary> {
        self.summary.as_ref()
    }

    pub fn needs_export_dir(&self) -> bool {
        self.export_dir_required
    }

    /// A new selection silently replaces an unprocessed batch, so selecting
    /// is permitted from both `Idle` and `Selected`. `Compressed` requires a
    /// reset first, and an export-directory failure blocks selection until
    /// reconfiguration.
    pub fn can_select(&self) -> bool {
        !self.export_dir_required && self.state != SessionState::Compressed
    }

    pub fn can_compress(&self) -> bool {
        self.state == SessionState::Selected
    }

    pub fn can_reset(&self) -> bool {
        !self.export_dir_required
            && matches!(self.state, SessionState::Selected | SessionState::Compressed)
    }

    /// Validates and adopts a new selection. On rejection the previous batch
    /// and state are left untouched.
    pub fn select(&mut self, paths: &[impl AsRef<Path>]) -> Result<&Batch, ValidationError> {
        let batch = select::select(paths)?;
        self.batch = batch;
        self.summary = None;
        self.state = SessionState::Selected;
        Ok(&self.batch)
    }

    /// Runs the compression pass over the working batch.
    ///
    /// `EmptyBatch` leaves the session where it was. `ExportDirectoryInvalid`
    /// drops all in-memory state back to `Idle` and latches the
    /// reconfiguration requirement.
    pub fn compress(&mut self, export_dir: &Path) -> Result<&CompressionSummary, CompressionError> {
        match compress::compress(&mut self.batch, export_dir) {
            Ok(summary) => {
                self.summary = Some(summary);
                self.state = SessionState::Compressed;
                Ok(self.summary.as_ref().unwrap())
            }
            Err(CompressionError::EmptyBatch) => Err(CompressionError::EmptyBatch),
            Err(err) => {
                // The compression stage already cleared the batch.
                self.summary = None;
                self.state = SessionState::Idle;
                self.export_dir_required = true;
                Err(err)
            }
        }
    }

    /// Clears all batch state and returns to `Idle`. Does not release the
    /// export-directory latch; only reconfiguration does.
    pub fn reset(&mut self) {
        self.batch.clear();
        self.summary = None;
        self.state = SessionState::Idle;
    }

    /// Persists a newly chosen export directory and unblocks selection.
    pub fn configure_export_dir(
        &mut self,
        store: &ConfigStore,
        dir: &str,
    ) -> Result<(), ConfigError> {
        store.write(dir)?;
        self.export_dir_required = false;
        Ok(())
    }
}
