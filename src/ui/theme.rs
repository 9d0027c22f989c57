use crate::highlight::Highlight;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub title: Color,

    // Bar colors, one per highlight
    pub emerald: Color,
    pub amber: Color,
    pub slate: Color,
    pub rose: Color,
    pub purple: Color,
    pub blue: Color,
    pub cyan: Color,
    pub bar: Color,
}

impl Theme {
    pub fn highlight(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Found | Highlight::Sorted => self.emerald,
            Highlight::Comparing => self.amber,
            Highlight::Eliminated => self.slate,
            Highlight::Swapping => self.rose,
            Highlight::Pivot => self.purple,
            Highlight::Current => self.blue,
            Highlight::Range => self.cyan,
            Highlight::Default => self.bar,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    title: Color::Rgb(249, 226, 175),

    emerald: Color::Rgb(52, 211, 153),
    amber: Color::Rgb(251, 191, 36),
    slate: Color::Rgb(71, 85, 105),
    rose: Color::Rgb(251, 113, 133),
    purple: Color::Rgb(192, 132, 252),
    blue: Color::Rgb(96, 165, 250),
    cyan: Color::Rgb(34, 211, 238),
    bar: Color::Rgb(148, 163, 184),
};
