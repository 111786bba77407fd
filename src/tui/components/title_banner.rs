//! # TitleBanner Component
//!
//! The framed title at the top of every screen:
//!
//! ```text
//! ##################################################
//! # Dotfiles
//! ##################################################
//!
//! ```

use crate::core::state::ControllerState;
use crate::tui::component::{Component, StateName};
use crate::tui::draw;

pub struct TitleBanner {
    pub text: String,
    state: StateName,
}

impl TitleBanner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: StateName::DEFAULT,
        }
    }
}

impl Component for TitleBanner {
    fn state(&self) -> &StateName {
        &self.state
    }

    fn switch_state(&mut self, state: StateName) {
        self.state = state;
    }

    fn render(&mut self, _ctx: &mut ControllerState) -> String {
        draw::banner(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_banner_renders_banner() {
        let mut title = TitleBanner::new("Dotfiles");
        let out = title.render(&mut ControllerState::new());
        assert_eq!(out, draw::banner("Dotfiles"));
        assert!(out.contains("# Dotfiles\n"));
    }
}
