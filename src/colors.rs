//! Embed colors
//!
//! Semantic accent colors for Discord embeds. Keeping them in one place keeps
//! every command's replies visually consistent.

use std::fmt;

/// Largest value Discord accepts for an embed color
pub const MAX_EMBED_COLOR: u32 = 0xFF_FF_FF;

pub const COLOR_BLUE: u32 = 0x3498db;
pub const COLOR_PURPLE: u32 = 0x9b59b6;
pub const COLOR_ORANGE: u32 = 0xf39c12;
pub const COLOR_GREEN: u32 = 0x2ecc71;
pub const COLOR_RED: u32 = 0xe74c3c;

/// Named embed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedColor {
    /// Informational replies (server info, weather forecasts)
    Blue,
    /// Fortune-style replies (8-ball)
    Purple,
    /// Games of chance (coin flips)
    Orange,
    /// Success
    Green,
    /// Errors and user lookups
    Red,
}

impl EmbedColor {
    pub const ALL: [EmbedColor; 5] = [
        EmbedColor::Blue,
        EmbedColor::Purple,
        EmbedColor::Orange,
        EmbedColor::Green,
        EmbedColor::Red,
    ];

    /// 24-bit RGB value
    pub const fn rgb(self) -> u32 {
        match self {
            EmbedColor::Blue => COLOR_BLUE,
            EmbedColor::Purple => COLOR_PURPLE,
            EmbedColor::Orange => COLOR_ORANGE,
            EmbedColor::Green => COLOR_GREEN,
            EmbedColor::Red => COLOR_RED,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EmbedColor::Blue => "Blue",
            EmbedColor::Purple => "Purple",
            EmbedColor::Orange => "Orange",
            EmbedColor::Green => "Green",
            EmbedColor::Red => "Red",
        }
    }

    /// Split into red, green and blue channels
    pub const fn channels(self) -> (u8, u8, u8) {
        let rgb = self.rgb();
        ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl From<EmbedColor> for u32 {
    fn from(color: EmbedColor) -> Self {
        color.rgb()
    }
}

impl fmt::Display for EmbedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.rgb())
    }
}
