//! Service layer: prompt rendering and terminal sessions.

pub mod prompt_renderer;
pub mod terminal_session;

pub use prompt_renderer::{render, PromptRenderer};
pub use terminal_session::TerminalSession;
