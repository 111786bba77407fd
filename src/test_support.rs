//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use crate::core::clone::{CloneError, CloneRequest, CloneService};
use crate::tui::controller::Controller;
use crate::tui::terminal::Terminal;

/// A terminal fed from a fixed list of lines. Reports EOF once they run out.
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    printed: String,
    clears: usize,
}

impl ScriptedTerminal {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            printed: String::new(),
            clears: 0,
        }
    }

    /// Everything printed so far, concatenated.
    pub fn printed(&self) -> &str {
        &self.printed
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Terminal for ScriptedTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.printed.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// A clone service that records calls instead of touching git.
pub struct RecordingService {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingService {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    /// Every call fails with `CloneError::Missing`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CloneService for RecordingService {
    fn name(&self) -> &str {
        "recording"
    }

    fn clone_repository(&self, request: &CloneRequest) -> Result<String, CloneError> {
        self.calls.borrow_mut().push("clone".to_string());
        if self.fail {
            return Err(CloneError::Missing(request.target_path()));
        }
        Ok(format!("Cloned {} into {}", request.repository, request.target))
    }

    fn cleanup(&self, request: &CloneRequest) -> Result<String, CloneError> {
        self.calls.borrow_mut().push("cleanup".to_string());
        if self.fail {
            return Err(CloneError::Missing(request.target_path()));
        }
        Ok(format!("Removed {}", request.target))
    }
}

pub fn test_request() -> CloneRequest {
    CloneRequest::new("git@example.com:me/dotfiles.git", "/tmp/dotmenu-test")
}

/// Creates a Controller with a scripted terminal and a recording service.
pub fn test_controller(inputs: &[&str]) -> Controller<ScriptedTerminal, RecordingService> {
    Controller::new(
        test_request(),
        ScriptedTerminal::new(inputs),
        RecordingService::new(),
    )
}
