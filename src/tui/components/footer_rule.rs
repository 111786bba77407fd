use crate::core::state::ControllerState;
use crate::tui::component::{Component, StateName};
use crate::tui::draw;

/// Blank line followed by a double rule. Closes every screen.
#[derive(Default)]
pub struct FooterRule {
    state: StateName,
}

impl FooterRule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for FooterRule {
    fn state(&self) -> &StateName {
        &self.state
    }

    fn switch_state(&mut self, state: StateName) {
        self.state = state;
    }

    fn render(&mut self, _ctx: &mut ControllerState) -> String {
        let rule = draw::rule_line();
        format!("\n{rule}{rule}")
    }
}
