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
    pub bar_bg: Color,
    pub pivot: Color,       // Pink for the pivot cell
    pub swapped: Color,     // Orange for the pair just swapped
    pub small_value: Color, // Values that regenerate when clicked
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the cursor
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal cells
    bar_bg: Color::Rgb(50, 50, 70),
    pivot: Color::Rgb(245, 194, 231),
    swapped: Color::Rgb(250, 179, 135),
    small_value: Color::Rgb(166, 227, 161),
};
