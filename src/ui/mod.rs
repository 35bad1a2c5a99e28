//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state and the event loop (select → await →
//!   feedback)
//! - **[`screens`]** — stateless render functions for the options screen,
//!   the feedback screen, and the status bar
//! - **[`theme`]** — centralized color palette used by all screens
//! - **[`constants`]** — canvas dimensions and layout rows
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Game`](crate::game::Game) and a notation backend, then call
//! [`App::run`](app::App::run) to start the event loop.

pub mod app;
pub mod constants;
pub mod screens;
pub mod theme;

pub use app::{App, GameState};
