//! # TUI Components
//!
//! The concrete nodes of the text view tree.
//!
//! ## Leaves
//!
//! Render a fixed piece of text from their props:
//! - `TitleBanner`: framed title
//! - `KeyValueLine`: `* key: value`
//! - `MessageLine`: indented free text
//! - `StatusLine`: last clone/cleanup outcome, read from the controller state
//! - `FooterRule`: closing double rule
//!
//! ## Screens
//!
//! Built on `ActionComponent`, so rendering them decides what the next
//! input means:
//! - `MenuScreen`: numbered options
//! - `GoodbyeScreen`: farewell, ends the loop
//!
//! ## Root
//!
//! - `RootPane`: wires everything above into one tree keyed by state
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_banner.rs
//! ├── key_value_line.rs
//! ├── message_line.rs
//! ├── status_line.rs
//! ├── footer_rule.rs
//! ├── menu_screen.rs
//! ├── goodbye_screen.rs
//! └── root_pane.rs
//! ```

mod footer_rule;
mod goodbye_screen;
mod key_value_line;
mod menu_screen;
mod message_line;
pub mod root_pane;
mod status_line;
mod title_banner;

pub use footer_rule::FooterRule;
pub use goodbye_screen::GoodbyeScreen;
pub use key_value_line::KeyValueLine;
pub use menu_screen::MenuScreen;
pub use message_line::MessageLine;
pub use root_pane::RootPane;
pub use status_line::StatusLine;
pub use title_banner::TitleBanner;
