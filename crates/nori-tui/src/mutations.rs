//! Requests from overlays back to the reducer.
//!
//! Overlay key handlers only see `&TuiState`; anything that changes the
//! rest of the state is returned as a `StateMutation` and applied by
//! `update::apply_mutations`.

use nori_core::session::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// Confirmed conversation reset.
    ClearConversation,
    PickCategory(Category),
    Export,
    Shuffle,
    ShowModelInfo,
    CheckHealth,
    Quit,
}
