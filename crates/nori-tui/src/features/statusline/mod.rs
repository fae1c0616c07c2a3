//! Status line feature slice.
//!
//! Shows backend reachability, the loaded model, and key hints.

mod render;
mod state;

pub use render::render_status_line;
pub use state::{BackendStatus, StatusLine};
