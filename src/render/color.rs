//=========================================================================
// Color
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Rgba ================================================================

/// 8-bit RGBA color.
///
/// Serialized as a `[r, g, b, a]` array so config files stay compact:
///
/// ```toml
/// background = [30, 30, 30, 255]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<Rgba> for femtovg::Color {
    fn from(c: Rgba) -> Self {
        femtovg::Color::rgba(c.r, c.g, c.b, c.a)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        color: Rgba,
    }

    #[test]
    fn deserializes_from_array() {
        let holder: Holder = toml::from_str("color = [255, 0, 0, 96]").unwrap();
        assert_eq!(holder.color, Rgba::rgba(255, 0, 0, 96));
    }

    #[test]
    fn rejects_short_array() {
        assert!(toml::from_str::<Holder>("color = [255, 0, 0]").is_err());
    }

    #[test]
    fn with_alpha_keeps_channels() {
        assert_eq!(Rgba::WHITE.with_alpha(10), Rgba::rgba(255, 255, 255, 10));
    }
}
