//! # Action Components
//!
//! A `Composite` that claims the next user input. Rendering it publishes
//! its `ActionBinding` to the controller state before the children render.
//!
//! Only screens reachable under the root's current state get rendered, so in
//! a well-formed tree exactly one action component publishes per pass. The
//! controller checks that count after every render.

use crate::core::action::ActionBinding;
use crate::core::state::ControllerState;
use crate::tui::component::{Component, Composite, StateName};

pub struct ActionComponent {
    binding: ActionBinding,
    node: Composite,
}

impl ActionComponent {
    pub fn new(binding: ActionBinding) -> Self {
        Self {
            binding,
            node: Composite::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn binding(&self) -> &ActionBinding {
        &self.binding
    }

    /// The wrapped node, for attaching children.
    pub fn node_mut(&mut self) -> &mut Composite {
        &mut self.node
    }
}

impl Component for ActionComponent {
    fn state(&self) -> &StateName {
        self.node.state()
    }

    fn switch_state(&mut self, state: StateName) {
        self.node.switch_state(state);
    }

    fn render(&mut self, ctx: &mut ControllerState) -> String {
        ctx.publish(self.binding.clone());
        self.node.render(ctx)
    }
}
