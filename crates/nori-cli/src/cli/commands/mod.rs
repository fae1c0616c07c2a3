//! CLI command handlers.

pub mod ask;
pub mod backend;
pub mod categories;
pub mod chat;
pub mod config;
