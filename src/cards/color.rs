//! Card colors.

use serde::{Deserialize, Serialize};

/// The color printed on a card's pips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Upper-case name (`RED`, `BLACK`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Black => (0, 0, 0),
        }
    }

    /// Six hex digits prefixed with `#`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Red => "#FF0000",
            Color::Black => "#000000",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Black => "Black",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_payload() {
        assert_eq!(Color::Red.rgb(), (255, 0, 0));
        assert_eq!(Color::Black.rgb(), (0, 0, 0));
        assert_eq!(Color::Red.hex(), "#FF0000");
        assert_eq!(Color::Black.hex(), "#000000");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Red.to_string(), "Red");
        assert_eq!(Color::Black.to_string(), "Black");
        assert_eq!(Color::Black.name(), "BLACK");
    }

    #[test]
    fn test_hex_matches_rgb() {
        for color in Color::ALL {
            let (r, g, b) = color.rgb();
            assert_eq!(color.hex(), format!("#{r:02X}{g:02X}{b:02X}"));
        }
    }
}
