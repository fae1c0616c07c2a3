//! Chat transcript feature slice.
//!
//! - `cell.rs`: display cells and their ids
//! - `state.rs`: cell list, notices, scroll
//! - `render.rs`: line layout and the welcome card

mod cell;
mod render;
mod state;

pub use cell::{CellId, ChatCell, clock_stamp};
pub use render::{render_transcript, transcript_lines};
pub use state::{PAGE_SCROLL_LINES, TranscriptState};
