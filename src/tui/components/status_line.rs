//! # StatusLine Component
//!
//! Shows the outcome of the last clone or cleanup, stamped with the local
//! time it happened. Renders nothing until the controller sets a status.
//!
//! Unlike the other leaves it has no props of its own: the text comes from
//! the `ControllerState` passed into `render`.

use crate::core::state::ControllerState;
use crate::tui::component::{Component, StateName};
use crate::tui::draw;

#[derive(Default)]
pub struct StatusLine {
    state: StateName,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for StatusLine {
    fn state(&self) -> &StateName {
        &self.state
    }

    fn switch_state(&mut self, state: StateName) {
        self.state = state;
    }

    fn render(&mut self, ctx: &mut ControllerState) -> String {
        match &ctx.status {
            Some(status) => format!(
                "{}[{}] {}\n",
                draw::indent(),
                status.at.format("%H:%M:%S"),
                status.text
            ),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_empty_without_status() {
        let mut line = StatusLine::new();
        assert_eq!(line.render(&mut ControllerState::new()), "");
    }

    #[test]
    fn test_status_line_shows_status() {
        let mut ctx = ControllerState::new();
        ctx.set_status("Cloned repo into /tmp/dots");
        let out = StatusLine::new().render(&mut ctx);

        assert!(out.starts_with(draw::indent()));
        assert!(out.contains("] Cloned repo into /tmp/dots\n"));
        // [HH:MM:SS]
        let stamp = &out[draw::indent().len()..draw::indent().len() + 10];
        assert!(stamp.starts_with('[') && stamp.ends_with(']'));
    }
}
