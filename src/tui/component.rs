use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::core::state::ControllerState;

/// Name of a content variant, e.g. `default`, `menu`, `quit`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateName(Cow<'static, str>);

impl StateName {
    /// Fallback for every slot a state leaves empty.
    pub const DEFAULT: StateName = StateName(Cow::Borrowed("default"));
    pub const MENU: StateName = StateName(Cow::Borrowed("menu"));
    pub const QUIT: StateName = StateName(Cow::Borrowed("quit"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }
}

impl Default for StateName {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of the text view tree.
///
/// Every node carries the state it renders with. Parents overwrite their
/// children's state right before rendering them, so flipping the root is
/// enough to switch the whole visible tree.
///
/// `render` takes the controller state so action screens can publish their
/// binding while they are on screen.
pub trait Component {
    fn state(&self) -> &StateName;

    /// Set the state of this node only. Children pick it up during `render`.
    fn switch_state(&mut self, state: StateName);

    fn render(&mut self, ctx: &mut ControllerState) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Header,
    Body,
    Footer,
}

impl Slot {
    /// Render order.
    pub const ALL: [Slot; 3] = [Slot::Header, Slot::Body, Slot::Footer];
}

/// Children registered for one state.
#[derive(Default)]
pub struct Slots {
    pub header: Vec<Box<dyn Component>>,
    pub body: Vec<Box<dyn Component>>,
    pub footer: Vec<Box<dyn Component>>,
}

impl Slots {
    pub fn get(&self, slot: Slot) -> &Vec<Box<dyn Component>> {
        match slot {
            Slot::Header => &self.header,
            Slot::Body => &self.body,
            Slot::Footer => &self.footer,
        }
    }

    pub fn get_mut(&mut self, slot: Slot) -> &mut Vec<Box<dyn Component>> {
        match slot {
            Slot::Header => &mut self.header,
            Slot::Body => &mut self.body,
            Slot::Footer => &mut self.footer,
        }
    }
}

/// A branch node: per-state header/body/footer children with fallback to
/// the `default` state.
///
/// ```text
/// states
/// ├── default → { header: [..], body: [],   footer: [..] }
/// ├── menu    → { header: [],   body: [..], footer: []   }   header/footer from default
/// └── quit    → { header: [],   body: [..], footer: []   }
/// ```
///
/// Fallback is per slot and all-or-nothing: a state with any body children
/// renders only those, never merged with `default`'s body.
#[derive(Default)]
pub struct Composite {
    states: HashMap<StateName, Slots>,
    state: StateName,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children of `state`, created empty on first access.
    pub fn slots(&mut self, state: StateName) -> &mut Slots {
        self.states.entry(state).or_default()
    }

    pub fn header(&mut self, state: StateName) -> &mut Vec<Box<dyn Component>> {
        &mut self.slots(state).header
    }

    pub fn body(&mut self, state: StateName) -> &mut Vec<Box<dyn Component>> {
        &mut self.slots(state).body
    }

    pub fn footer(&mut self, state: StateName) -> &mut Vec<Box<dyn Component>> {
        &mut self.slots(state).footer
    }

    #[cfg(test)]
    pub(crate) fn has_state(&self, state: &StateName) -> bool {
        self.states.contains_key(state)
    }

    /// Render one slot for the current state, falling back to `default`.
    pub fn render_slot(&mut self, slot: Slot, ctx: &mut ControllerState) -> String {
        let current = self.state.clone();
        let source = match self.states.get(&current) {
            Some(slots) if !slots.get(slot).is_empty() => current.clone(),
            _ => StateName::DEFAULT,
        };

        let Some(children) = self.states.get_mut(&source).map(|s| s.get_mut(slot)) else {
            return String::new();
        };

        let mut out = String::new();
        for child in children.iter_mut() {
            child.switch_state(current.clone());
            out.push_str(&child.render(ctx));
        }
        out
    }
}

impl Component for Composite {
    fn state(&self) -> &StateName {
        &self.state
    }

    fn switch_state(&mut self, state: StateName) {
        self.state = state;
    }

    fn render(&mut self, ctx: &mut ControllerState) -> String {
        let mut out = String::new();
        for slot in Slot::ALL {
            out.push_str(&self.render_slot(slot, ctx));
        }
        out
    }
}
