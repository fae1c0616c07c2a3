//! Sidebar feature slice: category picker, history, recommended questions.

mod render;
mod state;
mod update;

pub use render::{SIDEBAR_WIDTH, render_sidebar};
pub use state::{RemoteRecommendations, SidebarEntry, SidebarState};
pub use update::{activate_selection, ask_recommended, pick_category, set_category, switch_tab};
