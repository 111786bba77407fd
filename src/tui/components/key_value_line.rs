use crate::core::state::ControllerState;
use crate::tui::component::{Component, StateName};
use crate::tui::draw;

/// One `* key: value` line.
pub struct KeyValueLine {
    pub key: String,
    pub value: String,
    state: StateName,
}

impl KeyValueLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            state: StateName::DEFAULT,
        }
    }
}

impl Component for KeyValueLine {
    fn state(&self) -> &StateName {
        &self.state
    }

    fn switch_state(&mut self, state: StateName) {
        self.state = state;
    }

    fn render(&mut self, _ctx: &mut ControllerState) -> String {
        format!("{}* {}: {}\n", draw::indent(), self.key, self.value)
    }
}
