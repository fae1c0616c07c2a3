use nori_core::session::Category;
use ratatui::style::Color;

/// Accent colour of a category (header, bot messages, sidebar).
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Health => Color::Green,
        Category::Travel => Color::Cyan,
        Category::Investment => Color::Yellow,
        Category::Legal => Color::Magenta,
    }
}

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Health => "🏥",
        Category::Travel => "✈️",
        Category::Investment => "💰",
        Category::Legal => "⚖️",
    }
}

/// User messages use the playground's amber.
pub const USER_COLOR: Color = Color::LightYellow;
pub const NOTICE_COLOR: Color = Color::LightBlue;
pub const MUTED_COLOR: Color = Color::DarkGray;
