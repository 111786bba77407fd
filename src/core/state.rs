//! # Controller State
//!
//! The state the controller loop reads after every render pass.
//!
//! ```text
//! ControllerState
//! ├── binding: ActionBinding     // action + prompt + preset for next input
//! ├── running: bool              // false once the quit action ran
//! ├── status: Option<Status>     // outcome of the last clone/cleanup
//! └── publications: usize        // bindings published in the current pass
//! ```
//!
//! It is handed to the component tree as `&mut` for the duration of one
//! render, so action screens can publish their binding. Nothing else holds
//! on to it.

use chrono::{DateTime, Local};

use crate::core::action::ActionBinding;

/// A status line shown under the screen until the next one replaces it.
#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub at: DateTime<Local>,
}

#[derive(Debug)]
pub struct ControllerState {
    pub binding: ActionBinding,
    pub running: bool,
    pub status: Option<Status>,
    publications: usize,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            binding: ActionBinding::default(),
            running: true,
            status: None,
            publications: 0,
        }
    }

    /// Replace the active binding. Called by action screens while rendering.
    pub fn publish(&mut self, binding: ActionBinding) {
        self.binding = binding;
        self.publications += 1;
    }

    /// Reset the per-pass publication count before a render.
    pub fn begin_pass(&mut self) {
        self.publications = 0;
    }

    /// Number of bindings published since the last `begin_pass`.
    pub fn publications(&self) -> usize {
        self.publications
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            at: Local::now(),
        });
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
