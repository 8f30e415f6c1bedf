use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const NAME_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const BUTTON_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_FILL: Color = Color::Rgb(0x26, 0x26, 0x26);
