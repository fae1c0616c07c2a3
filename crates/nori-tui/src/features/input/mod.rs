//! Message input feature slice.

mod render;
mod state;

pub use render::{INPUT_HEIGHT, InputView, render_input};
pub use state::InputState;
