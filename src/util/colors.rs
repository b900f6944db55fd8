use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0060a5fa);
pub const SECONDARY: Color = Color::from_u32(0x00a855f7);
pub const NEUTRAL: Color = Color::from_u32(0x00475569);
pub const TEXT: Color = Color::from_u32(0x00e2e8f0);
pub const BACKGROUND: Color = Color::from_u32(0x000f172a);
pub const SUCCESS: Color = Color::from_u32(0x0016a34a);
pub const ERROR: Color = Color::from_u32(0x00fca5a5);
