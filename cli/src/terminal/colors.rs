use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const LABEL: Color = Color::BrightGreen;
pub const CLEARED: Color = Color::BrightRed;
pub const TIMESTAMP: Color = Color::Blue;
pub const NO_MATCH: Color = Color::BrightBlack;
