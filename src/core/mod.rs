//! # Core Application Logic
//!
//! Everything dotmenu decides lives here. It knows nothing about the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ControllerState      │
//!                    │  • ActionKind / binding │
//!                    │  • CloneService         │
//!                    │  • Config               │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (text UI)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ControllerState`, what the controller loop reads after every render
//! - [`action`]: `ActionKind`, `ActionBinding` and `MenuChoice`
//! - [`clone`]: the `CloneService` seam and its git implementation
//! - [`config`]: layered settings

pub mod action;
pub mod clone;
pub mod config;
pub mod state;
