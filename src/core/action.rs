//! # Actions
//!
//! Every screen that expects input publishes an `ActionBinding` while it
//! renders. The binding names the `ActionKind` the controller runs on the
//! next line the user types, plus the prompt and preset shown for it.
//!
//! ```text
//! render()  →  ActionBinding published  →  input  →  dispatch(ActionKind)
//! ```
//!
//! The set of actions is closed. Parsing a name that is not one of them
//! yields `UnknownAction` instead of failing at dispatch time.

use std::fmt;
use std::str::FromStr;

/// Literal input that quits from any screen.
pub const QUIT_COMMAND: &str = "quit";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Runs once at startup, before any screen has published a binding.
    #[default]
    Default,
    Menu,
    Quit,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Default => "defaultAction",
            ActionKind::Menu => "menuAction",
            ActionKind::Quit => "quitAction",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for ActionKind {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "defaultAction" => Ok(ActionKind::Default),
            "menuAction" => Ok(ActionKind::Menu),
            "quitAction" => Ok(ActionKind::Quit),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// What the next input means and how to ask for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBinding {
    pub action: ActionKind,
    pub prompt: String,
    /// Returned by the prompt when the user just presses Enter.
    pub preset: String,
}

impl ActionBinding {
    pub fn new(action: ActionKind, prompt: impl Into<String>, preset: impl Into<String>) -> Self {
        Self {
            action,
            prompt: prompt.into(),
            preset: preset.into(),
        }
    }
}

/// Numbered entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    Clone,
    Cleanup,
}

impl MenuChoice {
    /// Parse a menu selection. Anything that is not one of the listed
    /// numbers is `None`; the caller redisplays the menu.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            0 => Some(MenuChoice::Quit),
            1 => Some(MenuChoice::Clone),
            9 => Some(MenuChoice::Cleanup),
            _ => None,
        }
    }
}
