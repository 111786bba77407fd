//! # MenuScreen
//!
//! The main menu. Publishes the menu action, so the next line the user
//! types is read as a menu selection.

use crate::core::action::{ActionBinding, ActionKind};
use crate::tui::action_component::ActionComponent;
use crate::tui::component::StateName;
use crate::tui::components::MessageLine;

pub struct MenuScreen;

impl MenuScreen {
    pub const PROMPT: &'static str = "Please select";

    /// Option lines in display order. The numbers match `MenuChoice::parse`.
    pub const OPTIONS: [&'static str; 3] = ["0) Quit", "1) Clone Repository", "9) Cleanup"];

    pub fn build() -> ActionComponent {
        let mut screen = ActionComponent::new(ActionBinding::new(ActionKind::Menu, Self::PROMPT, ""));
        let body = screen.node_mut().body(StateName::DEFAULT);
        for option in Self::OPTIONS {
            body.push(Box::new(MessageLine::new(option)));
        }
        screen
    }
}
