use ratatui::style::Color;

pub const BLOOM_GREEN: Color = Color::Rgb(0x9a, 0xc0, 0x9a);
pub const BLOOM_PINK: Color = Color::Rgb(0xd9, 0x9a, 0xa5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FIELD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
