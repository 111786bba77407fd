//! # Controller
//!
//! Drives the menu:
//!
//! ```text
//! ┌─► clear ─► dispatch(input) ─► render + print ─► quit published? ── yes ─► done
//! │                                                     │ no
//! └──────────────────── input = prompt_user() ◄─────────┘
//! ```
//!
//! `dispatch` runs whichever action the previous render published. The
//! literal input `quit` overrides that from any screen.

use std::io;

use log::{debug, info, warn};

use crate::core::action::{ActionBinding, ActionKind, MenuChoice, QUIT_COMMAND};
use crate::core::clone::{CloneRequest, CloneService};
use crate::core::state::ControllerState;
use crate::tui::component::{Component, StateName};
use crate::tui::components::RootPane;
use crate::tui::terminal::Terminal;

pub struct Controller<T: Terminal, S: CloneService> {
    root: RootPane,
    state: ControllerState,
    request: CloneRequest,
    terminal: T,
    service: S,
}

impl<T: Terminal, S: CloneService> Controller<T, S> {
    pub fn new(request: CloneRequest, terminal: T, service: S) -> Self {
        Self {
            root: RootPane::new(&request),
            state: ControllerState::new(),
            request,
            terminal,
            service,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// State the root pane will render with next.
    pub fn screen(&self) -> &StateName {
        self.root.state()
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run until the quit screen has been shown.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Menu loop starting (service: {})", self.service.name());
        let mut input = String::new();

        while self.state.running {
            self.terminal.clear_screen()?;
            self.dispatch(&input);

            let screen = self.render();
            self.terminal.print(&screen)?;

            if self.state.binding.action == ActionKind::Quit {
                self.state.running = false;
                break;
            }
            input = self.prompt_user()?;
        }

        info!("Menu loop finished");
        Ok(())
    }

    /// Run the active action against `input`.
    pub fn dispatch(&mut self, input: &str) {
        if input == QUIT_COMMAND {
            self.state.binding.action = ActionKind::Quit;
        }
        debug!("Dispatching {} with input {:?}", self.state.binding.action, input);

        match self.state.binding.action {
            ActionKind::Default => self.root.switch_state(StateName::MENU),
            ActionKind::Menu => self.menu_action(input),
            ActionKind::Quit => {
                self.root.switch_state(StateName::QUIT);
                self.state.running = false;
            }
        }
    }

    fn menu_action(&mut self, input: &str) {
        match MenuChoice::parse(input) {
            Some(MenuChoice::Quit) => {
                self.root.switch_state(StateName::QUIT);
                return;
            }
            Some(MenuChoice::Clone) => {
                let outcome = self.service.clone_repository(&self.request);
                self.record("Clone", outcome);
            }
            Some(MenuChoice::Cleanup) => {
                let outcome = self.service.cleanup(&self.request);
                self.record("Cleanup", outcome);
            }
            None => debug!("Unrecognized menu selection {:?}", input),
        }
        self.root.switch_state(StateName::MENU);
    }

    fn record<E: std::fmt::Display>(&mut self, what: &str, outcome: Result<String, E>) {
        match outcome {
            Ok(summary) => {
                info!("{} succeeded: {}", what, summary);
                self.state.set_status(summary);
            }
            Err(e) => {
                warn!("{} failed: {}", what, e);
                self.state.set_status(format!("{what} failed: {e}"));
            }
        }
    }

    /// Render the root pane. The screen visible now decides the next binding.
    pub fn render(&mut self) -> String {
        self.state.begin_pass();
        let out = self.root.render(&mut self.state);
        if self.state.publications() != 1 {
            warn!(
                "{} action bindings published while rendering {}",
                self.state.publications(),
                self.root.state()
            );
        }
        out
    }

    /// Ask for the next input. Empty input takes the preset; closed stdin quits.
    pub fn prompt_user(&mut self) -> io::Result<String> {
        let ActionBinding { prompt, preset, .. } = &self.state.binding;
        let mut text = prompt.clone();
        if !preset.is_empty() {
            text.push_str(&format!(" (default: {preset})"));
        }
        text.push_str(" > ");
        self.terminal.print(&text)?;

        match self.terminal.read_line() {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    Ok(self.state.binding.preset.clone())
                } else {
                    Ok(line.to_string())
                }
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Input closed, quitting");
                Ok(QUIT_COMMAND.to_string())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingService, ScriptedTerminal, test_controller, test_request};
    use crate::tui::components::GoodbyeScreen;

    /// Controller that has already shown the menu once.
    fn controller_on_menu(
        inputs: &[&str],
    ) -> Controller<ScriptedTerminal, RecordingService> {
        let mut controller = test_controller(inputs);
        controller.dispatch("");
        controller.render();
        assert_eq!(controller.state().binding.action, ActionKind::Menu);
        controller
    }

    #[test]
    fn test_startup_dispatch_switches_to_menu() {
        let mut controller = test_controller(&[]);
        assert_eq!(controller.screen(), &StateName::DEFAULT);
        controller.dispatch("");
        assert_eq!(controller.screen(), &StateName::MENU);
        assert!(controller.state().running);
    }

    #[test]
    fn test_menu_zero_switches_to_quit_then_stops_after_render() {
        let mut controller = controller_on_menu(&[]);
        controller.dispatch("0");

        assert_eq!(controller.screen(), &StateName::QUIT);
        // Still running until the goodbye screen publishes the quit action
        assert!(controller.state().running);
        assert_eq!(controller.state().binding.action, ActionKind::Menu);

        let out = controller.render();
        assert!(out.contains(GoodbyeScreen::MESSAGE));
        assert_eq!(controller.state().binding.action, ActionKind::Quit);
    }

    #[test]
    fn test_literal_quit_overrides_any_action() {
        for warmup in [false, true] {
            let mut controller = test_controller(&[]);
            if warmup {
                controller.dispatch("");
                controller.render();
            }
            controller.dispatch("quit");

            assert_eq!(controller.state().binding.action, ActionKind::Quit);
            assert!(!controller.state().running);
            assert_eq!(controller.screen(), &StateName::QUIT);
            assert!(controller.render().contains(GoodbyeScreen::MESSAGE));
        }
    }

    #[test]
    fn test_garbage_input_stays_on_menu() {
        let mut controller = controller_on_menu(&[]);
        controller.dispatch("abc");

        assert_eq!(controller.screen(), &StateName::MENU);
        assert!(controller.state().running);
        assert!(controller.state().status.is_none());
        assert!(controller.service().calls().is_empty());
    }

    #[test]
    fn test_clone_choice_calls_service_and_sets_status() {
        let mut controller = controller_on_menu(&[]);
        controller.dispatch("1");

        assert_eq!(controller.screen(), &StateName::MENU);
        assert_eq!(controller.service().calls(), vec!["clone".to_string()]);
        let status = controller.state().status.clone().unwrap();
        assert!(status.text.starts_with("Cloned"));
        assert!(controller.render().contains(&status.text));
    }

    #[test]
    fn test_cleanup_choice_calls_service() {
        let mut controller = controller_on_menu(&[]);
        controller.dispatch("9");

        assert_eq!(controller.screen(), &StateName::MENU);
        assert_eq!(controller.service().calls(), vec!["cleanup".to_string()]);
    }

    #[test]
    fn test_service_failure_stays_on_menu() {
        let mut controller = Controller::new(
            test_request(),
            ScriptedTerminal::new(&[]),
            RecordingService::failing(),
        );
        controller.dispatch("");
        controller.render();
        controller.dispatch("1");

        assert_eq!(controller.screen(), &StateName::MENU);
        assert!(controller.state().running);
        let status = controller.state().status.clone().unwrap();
        assert!(status.text.starts_with("Clone failed:"));
    }

    #[test]
    fn test_each_render_publishes_exactly_once() {
        let mut controller = test_controller(&[]);
        for input in ["", "abc", "1", "9", "0"] {
            controller.dispatch(input);
            controller.render();
            assert_eq!(controller.state().publications(), 1);
        }
    }

    #[test]
    fn test_prompt_user_prints_prompt_and_returns_input() {
        let mut controller = controller_on_menu(&["  1  "]);
        let input = controller.prompt_user().unwrap();

        assert_eq!(input, "1");
        assert_eq!(controller.terminal().printed(), "Please select > ");
    }

    #[test]
    fn test_prompt_user_empty_input_takes_preset() {
        let mut controller = test_controller(&[""]);
        controller.state.binding = ActionBinding::new(ActionKind::Menu, "Pick", "9");
        let input = controller.prompt_user().unwrap();

        assert_eq!(input, "9");
        assert_eq!(controller.terminal().printed(), "Pick (default: 9) > ");
    }

    #[test]
    fn test_prompt_user_eof_quits() {
        let mut controller = controller_on_menu(&[]);
        assert_eq!(controller.prompt_user().unwrap(), QUIT_COMMAND);
    }

    #[test]
    fn test_run_clone_then_quit() {
        let mut controller = test_controller(&["1", "0"]);
        controller.run().unwrap();

        assert_eq!(controller.service().calls(), vec!["clone".to_string()]);
        assert_eq!(controller.screen(), &StateName::QUIT);
        // menu, menu after clone, goodbye
        assert_eq!(controller.terminal().clears(), 3);
        let printed = controller.terminal().printed();
        assert!(printed.ends_with(&controller_tail()));
        assert!(printed.contains(GoodbyeScreen::MESSAGE));
    }

    #[test]
    fn test_run_menu_zero_leaves_controller_stopped() {
        let mut controller = test_controller(&["0"]);
        controller.run().unwrap();

        assert!(!controller.state().running);
        assert_eq!(controller.state().binding.action, ActionKind::Quit);
    }

    #[test]
    fn test_run_garbled_input_redisplays_menu() {
        // What the terminal hands over for a line of invalid UTF-8
        let mut controller = test_controller(&["\u{FFFD}\u{FFFD}", "0"]);
        controller.run().unwrap();

        assert_eq!(controller.terminal().clears(), 3);
        assert!(controller.service().calls().is_empty());
        let printed = controller.terminal().printed();
        assert_eq!(printed.matches("1) Clone Repository").count(), 2);
        assert!(printed.contains(GoodbyeScreen::MESSAGE));
    }

    #[test]
    fn test_run_stops_on_closed_input() {
        let mut controller = test_controller(&["abc"]);
        controller.run().unwrap();

        assert_eq!(controller.screen(), &StateName::QUIT);
        assert!(!controller.state().running);
        assert!(controller.terminal().printed().contains(GoodbyeScreen::MESSAGE));
    }

    fn controller_tail() -> String {
        let rule = crate::tui::draw::rule_line();
        format!("\n{rule}{rule}")
    }
}
