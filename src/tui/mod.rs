//! # TUI Adapter
//!
//! The terminal-facing layer: a small tree of text components, the
//! controller loop that renders it and reads input, and the startup prompts.
//!
//! ## Rendering Model
//!
//! Every node keeps per-state header/body/footer children. Only the root's
//! state is ever switched; each parent pushes its state into its children as
//! it renders them, so one flag flip changes the whole screen:
//!
//! ```text
//! RootPane [menu]
//! ├── header (from default) → banner, repository, target
//! ├── body   (menu)         → MenuScreen      publishes menuAction
//! └── footer (from default) → status, rule
//! ```
//!
//! The action screen that ends up rendered is the one that decides what the
//! next line of input means.

pub mod action_component;
pub mod component;
pub mod components;
pub mod controller;
pub mod draw;
pub mod startup;
pub mod terminal;

use std::fmt;
use std::io;

use log::info;

use crate::core::clone::{CloneRequest, GitCloneService};
use crate::core::config::ResolvedConfig;
use crate::tui::controller::Controller;
use crate::tui::startup::StartupError;
use crate::tui::terminal::StdTerminal;

/// Why a run ended early.
#[derive(Debug)]
pub enum RunError {
    /// Startup was aborted or its prompts could not be read.
    Startup(StartupError),
    /// The terminal failed while the menu loop was running.
    Terminal(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Startup(e) => write!(f, "{e}"),
            RunError::Terminal(e) => write!(f, "menu terminal error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Startup(e) => Some(e),
            RunError::Terminal(e) => Some(e),
        }
    }
}

impl From<StartupError> for RunError {
    fn from(e: StartupError) -> Self {
        RunError::Startup(e)
    }
}

pub fn run(config: ResolvedConfig) -> Result<(), RunError> {
    let mut terminal = StdTerminal::new();
    let defaults = CloneRequest::new(config.repository, config.target);

    let request = if config.confirm {
        startup::confirm_request(&mut terminal, &defaults)?
    } else {
        info!("Skipping confirmation");
        defaults
    };

    let service = GitCloneService::new(config.git_program);
    let mut controller = Controller::new(request, terminal, service);
    controller.run().map_err(RunError::Terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_run_error_keeps_startup_and_loop_failures_apart() {
        let rejected = RunError::from(StartupError::Rejected {
            key: "Repository".to_string(),
            value: "nope".to_string(),
        });
        assert!(matches!(
            rejected,
            RunError::Startup(StartupError::Rejected { .. })
        ));
        assert_eq!(rejected.to_string(), "Repository: nope");

        let broken = RunError::Terminal(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(broken.to_string(), "menu terminal error: closed");
        assert!(broken.source().is_some());
    }
}
