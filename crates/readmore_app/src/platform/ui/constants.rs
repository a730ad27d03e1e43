use ratatui::style::Color;

pub const APP_TITLE: &str = "ReadMore";
pub const HEADLINE: &str = "Find your next great pick";
pub const TAGS_HEADING: &str = "Select Categories:";

pub const KEY_HELP_TAGS: &str = "←→ Move | Space Toggle | Enter/s Search | Tab Results | q Quit";
pub const KEY_HELP_RESULTS: &str = "↑↓←→ Move | Enter/o Open | s Search | Tab Tags | q Quit";

/// Rows taken by one result card, borders included.
pub const CARD_HEIGHT: u16 = 10;
/// Terminal widths at which the result grid gains a second and third column.
pub const TWO_COLUMN_WIDTH: u16 = 80;
pub const THREE_COLUMN_WIDTH: u16 = 120;
/// Blank columns between two tag chips.
pub const TAG_GAP: u16 = 1;

pub const ACCENT: Color = Color::Magenta;
pub const MUTED: Color = Color::DarkGray;
pub const TEXT: Color = Color::Gray;
