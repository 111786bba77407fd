//! # RootPane Component
//!
//! The whole screen. Built once at startup and never restructured; the
//! controller only flips its state between `default`, `menu` and `quit`.
//!
//! ```text
//! default  header: TitleBanner, Repository, Target, blank line
//!          footer: StatusLine, FooterRule
//! menu     body:   MenuScreen      (header/footer from default)
//! quit     body:   GoodbyeScreen   (header/footer from default)
//! ```

use crate::core::clone::CloneRequest;
use crate::core::state::ControllerState;
use crate::tui::component::{Component, Composite, StateName};
use crate::tui::components::{
    FooterRule, GoodbyeScreen, KeyValueLine, MenuScreen, MessageLine, StatusLine, TitleBanner,
};

pub const TITLE: &str = "Dotfiles";

pub struct RootPane {
    node: Composite,
}

impl RootPane {
    pub fn new(request: &CloneRequest) -> Self {
        let mut node = Composite::new();

        let header = node.header(StateName::DEFAULT);
        header.push(Box::new(TitleBanner::new(TITLE)));
        header.push(Box::new(KeyValueLine::new("Repository", &request.repository)));
        header.push(Box::new(KeyValueLine::new("Target", &request.target)));
        header.push(Box::new(MessageLine::new("")));

        let footer = node.footer(StateName::DEFAULT);
        footer.push(Box::new(StatusLine::new()));
        footer.push(Box::new(FooterRule::new()));

        node.body(StateName::MENU).push(Box::new(MenuScreen::build()));
        node.body(StateName::QUIT).push(Box::new(GoodbyeScreen::build()));

        Self { node }
    }
}

impl Component for RootPane {
    fn state(&self) -> &StateName {
        self.node.state()
    }

    fn switch_state(&mut self, state: StateName) {
        self.node.switch_state(state);
    }

    fn render(&mut self, ctx: &mut ControllerState) -> String {
        self.node.render(ctx)
    }
}
