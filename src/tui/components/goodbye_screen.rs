use crate::core::action::{ActionBinding, ActionKind};
use crate::tui::action_component::ActionComponent;
use crate::tui::component::StateName;
use crate::tui::components::MessageLine;

/// Last screen of a run. Publishes the quit action, which tells the
/// controller loop to stop instead of reading more input.
pub struct GoodbyeScreen;

impl GoodbyeScreen {
    pub const MESSAGE: &'static str = "Good by";

    pub fn build() -> ActionComponent {
        let mut screen = ActionComponent::new(ActionBinding::new(ActionKind::Quit, "", ""));
        screen
            .node_mut()
            .body(StateName::DEFAULT)
            .push(Box::new(MessageLine::new(Self::MESSAGE)));
        screen
    }
}
