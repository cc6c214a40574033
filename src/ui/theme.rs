//! Color theme constants.

use ratatui::style::Color;

/// Borders of unfocused containers and widgets
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border and text of the focused widget
pub const COLOR_FOCUS: Color = Color::LightCyan;

/// Card titles
pub const COLOR_HEADER: Color = Color::White;

/// Status bar hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Unknown component/action placeholders and load errors
pub const COLOR_ERROR: Color = Color::Red;

/// Loading indicator
pub const COLOR_ACTIVE: Color = Color::LightGreen;
