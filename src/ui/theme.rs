use ratatui::style::Color;

pub const PRIMARY_BLUE: Color = Color::Rgb(0x1e, 0x3a, 0x5f);
pub const ACCENT_GOLD: Color = Color::Rgb(0xf0, 0xb4, 0x29);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const FOCUS_BORDER: Color = Color::Rgb(0xf0, 0xb4, 0x29);
