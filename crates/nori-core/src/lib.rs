//! Core Nori library (session model, backend client, config).

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod export;
pub mod logging;
pub mod recommendations;
pub mod session;
