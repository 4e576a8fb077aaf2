//! Dashboard upload state: current selection, progress, and message.
//!
//! DESIGN
//! ======
//! A rejected selection leaves `selected` empty so a stale valid file can
//! never be uploaded under a new error message.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use gateway::GatewayError;
use gateway::upload::{self, NO_FILE_SELECTED};

/// Metadata of the accepted selection; bytes are read at upload time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub size: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected: Option<Selection>,
    pub error: Option<String>,
    pub progress: Option<u8>,
    pub busy: bool,
}

impl UploadState {
    /// Apply a new file-input selection. `None` clears it.
    pub fn select(&mut self, file: Option<(&str, u64)>) {
        self.error = None;
        self.selected = None;
        let Some((name, size)) = file else {
            return;
        };
        match upload::validate_selection(name, size) {
            Ok(()) => self.selected = Some(Selection { name: name.to_owned(), size }),
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Begin an upload; returns false (with a message) when nothing is selected.
    pub fn start(&mut self) -> bool {
        if self.selected.is_none() {
            self.error = Some(NO_FILE_SELECTED.to_owned());
            return false;
        }
        self.error = None;
        self.busy = true;
        self.progress = Some(0);
        true
    }

    pub fn report(&mut self, percent: u8) {
        self.progress = Some(percent.min(100));
    }

    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.progress = None;
        self.error = Some(message);
    }

    /// Show the retry notice and restart the bar; `left` attempts remain.
    pub fn retrying(&mut self, left: u32) {
        self.error = Some(format!("Upload failed. Retrying... ({left} attempts left)"));
        self.progress = Some(0);
    }

    /// Record a failed attempt with `left` attempts remaining. Returns
    /// true when the caller should try again.
    ///
    /// An authorization failure ends the upload without a message: the
    /// gateway has already cleared the session and moved to `/login`.
    pub fn attempt_failed(&mut self, error: &GatewayError, left: u32) -> bool {
        if error.is_unauthorized() {
            self.busy = false;
            self.progress = None;
            self.error = None;
            return false;
        }
        if left > 0 {
            self.retrying(left);
            return true;
        }
        self.fail(upload::upload_failure_message(error));
        false
    }

    pub fn finish(&mut self) {
        self.busy = false;
        self.progress = None;
        self.error = None;
        self.selected = None;
    }
}
