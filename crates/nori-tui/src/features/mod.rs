//! Feature slices for the TUI (state/update/render per slice).

pub mod chat;
pub mod input;
pub mod sidebar;
pub mod statusline;
pub mod transcript;
