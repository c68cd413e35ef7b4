use crate::Rgb;

pub const PRIMARY: Rgb = Rgb(0x3b82f6);
pub const SECONDARY: Rgb = Rgb(0x8b5cf6);
pub const ACCENT: Rgb = Rgb(0xec4899);
pub const SUCCESS: Rgb = Rgb(0x10b981);
pub const WARNING: Rgb = Rgb(0xf59e0b);

/// Secondary text on the dark tooltip panel.
pub const MUTED: Rgb = Rgb(0x9ca3af);

/// Fallback colors, cycled when a record carries no usable color of its own.
pub const CYCLE: [Rgb; 5] = [PRIMARY, SUCCESS, SECONDARY, WARNING, ACCENT];
