//! Colours and metrics shared by the widgets.

use doily_core::Rgba;

pub const PANEL_BG: Rgba = Rgba::opaque(0x24, 0x26, 0x2c);
pub const GALLERY_BG: Rgba = Rgba::opaque(0x1c, 0x1d, 0x22);
pub const DIVIDER: Rgba = Rgba::opaque(0x3a, 0x3d, 0x46);

pub const TEXT: Rgba = Rgba::opaque(0xdd, 0xdf, 0xe6);
pub const TEXT_DISABLED: Rgba = Rgba::opaque(0x6c, 0x70, 0x7a);

pub const BUTTON_BG: Rgba = Rgba::opaque(0x34, 0x38, 0x42);
pub const BUTTON_HOVER: Rgba = Rgba::opaque(0x40, 0x46, 0x54);
pub const BUTTON_PRESS: Rgba = Rgba::opaque(0x2a, 0x2d, 0x35);
pub const BUTTON_DISABLED: Rgba = Rgba::opaque(0x2b, 0x2d, 0x33);

pub const ACCENT: Rgba = Rgba::opaque(0x33, 0x99, 0xff);
pub const TRACK: Rgba = Rgba::opaque(0x26, 0x33, 0x4d);
pub const BORDER: Rgba = Rgba::opaque(0x59, 0x73, 0x99);

/// Gallery selection outline.
pub const SELECTION: Rgba = Rgba::RED;
pub const SELECTION_WIDTH: f32 = 5.0;

pub const FONT_SIZE: f32 = 13.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const CORNER_RADIUS: f32 = 4.0;
pub const GAP: f32 = 8.0;

/// Alpha used by the pen's translucent mode.
pub const TRANSLUCENT_ALPHA: u8 = 128;
