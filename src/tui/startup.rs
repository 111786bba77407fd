//! # Startup
//!
//! Before the menu runs, the user gets to change the repository and target
//! and must then confirm both. Anything but `yes` aborts the program.
//!
//! ```text
//! Clone repository: (default: git@github.com:...) >
//! Target directory: (default: ~/.dotfiles) >
//!
//! Repository: git@github.com:...
//! Is this O.K.? (yes, no) > yes
//! ```

use std::fmt;
use std::io;

use log::info;

use crate::core::clone::CloneRequest;
use crate::tui::terminal::Terminal;

/// The only answer that confirms a value.
pub const AFFIRMATIVE: &str = "yes";

#[derive(Debug)]
pub enum StartupError {
    /// A confirmation was answered with something other than `yes`.
    Rejected { key: String, value: String },
    Io(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Rejected { key, value } => write!(f, "{key}: {value}"),
            StartupError::Io(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<io::Error> for StartupError {
    fn from(e: io::Error) -> Self {
        StartupError::Io(e)
    }
}

/// Ask for a value, offering `default` for an empty answer.
pub fn ask<T: Terminal>(terminal: &mut T, message: &str, default: &str) -> io::Result<String> {
    let mut prompt = message.to_string();
    if !default.is_empty() {
        prompt.push_str(&format!(" (default: {default})"));
    }
    prompt.push_str(" > ");
    terminal.print(&prompt)?;

    let answer = terminal.read_line()?;
    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

/// Show `key: value` and require a literal `yes`.
pub fn confirm<T: Terminal>(terminal: &mut T, key: &str, value: &str) -> Result<(), StartupError> {
    terminal.print(&format!("\n{key}: {value}\nIs this O.K.? ({AFFIRMATIVE}, no) > "))?;
    let answer = terminal.read_line()?;
    if answer.trim() != AFFIRMATIVE {
        return Err(StartupError::Rejected {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Let the user adjust and then confirm both values.
pub fn confirm_request<T: Terminal>(
    terminal: &mut T,
    defaults: &CloneRequest,
) -> Result<CloneRequest, StartupError> {
    let repository = ask(terminal, "Clone repository:", &defaults.repository)?;
    let target = ask(terminal, "Target directory:", &defaults.target)?;
    confirm(terminal, "Repository", &repository)?;
    confirm(terminal, "Target", &target)?;

    info!("Confirmed {} -> {}", repository, target);
    Ok(CloneRequest::new(repository, target))
}
