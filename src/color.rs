//! Opaque RGB colors.

use std::fmt;

/// Opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black, the default drawing color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Light gray used for grid lines.
    pub const GRID_GRAY: Self = Self::new(220, 220, 220);

    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// CSS functional notation, e.g. `rgb(0,0,255)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_constants() {
        assert_eq!(Rgb::default(), Rgb::BLACK);
        assert_eq!(Rgb::RED.r, 255);
        assert_eq!(Rgb::GREEN.g, 255);
        assert_eq!(Rgb::BLUE.b, 255);
    }

    #[test]
    fn test_array_conversion() {
        let c = Rgb::new(12, 34, 56);
        assert_eq!(Rgb::from_array(c.to_array()), c);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(220, 220, 220).to_string(), "rgb(220,220,220)");
    }
}
