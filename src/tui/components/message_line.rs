use crate::core::state::ControllerState;
use crate::tui::component::{Component, StateName};
use crate::tui::draw;

/// An indented line of text. An empty text renders a blank (indented) line.
pub struct MessageLine {
    pub text: String,
    state: StateName,
}

impl MessageLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: StateName::DEFAULT,
        }
    }
}

impl Component for MessageLine {
    fn state(&self) -> &StateName {
        &self.state
    }

    fn switch_state(&mut self, state: StateName) {
        self.state = state;
    }

    fn render(&mut self, _ctx: &mut ControllerState) -> String {
        format!("{}{}\n", draw::indent(), self.text)
    }
}
