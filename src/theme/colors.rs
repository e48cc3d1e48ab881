//! Colors - Bordados Theme Colors

use gpui::{Rgba, rgb};

/// Bordados color palette - All colors are accessed via associated functions
pub struct BordadosColors;

impl BordadosColors {
    // Tones
    /// Primary - Blue (buttons, highlights)
    pub fn primary() -> Rgba { rgb(0x0d6efd) }
    /// Primary hovered
    pub fn primary_hover() -> Rgba { rgb(0x0b5ed7) }
    /// Primary pressed
    pub fn primary_active() -> Rgba { rgb(0x0a58ca) }
    /// Secondary - Gray (content band)
    pub fn secondary() -> Rgba { rgb(0x6c757d) }
    /// Light (header, asides)
    pub fn light() -> Rgba { rgb(0xf8f9fa) }
    /// Dark
    pub fn dark() -> Rgba { rgb(0x212529) }
    /// White
    pub fn white() -> Rgba { rgb(0xffffff) }
    /// Black
    pub fn black() -> Rgba { rgb(0x000000) }

    // Text colors
    /// Body text
    pub fn text_primary() -> Rgba { rgb(0x212529) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x6c757d) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xced4da) }

    /// Look up a color by its CSS-ish name
    pub fn named(name: &str) -> Option<Rgba> {
        let color = match name.to_ascii_lowercase().as_str() {
            "primary" | "blue" => Self::primary(),
            "secondary" | "gray" | "grey" => Self::secondary(),
            "light" => Self::light(),
            "dark" => Self::dark(),
            "white" => Self::white(),
            "black" => Self::black(),
            _ => return None,
        };
        Some(color)
    }

    /// Parse a palette name or a `#rrggbb` hex color
    pub fn parse(value: &str) -> Option<Rgba> {
        match value.strip_prefix('#') {
            Some(hex) if hex.len() == 6 => u32::from_str_radix(hex, 16).ok().map(rgb),
            Some(_) => None,
            None => Self::named(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(BordadosColors::parse("black"), Some(BordadosColors::black()));
        assert_eq!(BordadosColors::parse("Light"), Some(BordadosColors::light()));
        assert_eq!(BordadosColors::parse("#0d6efd"), Some(BordadosColors::primary()));
    }

    #[test]
    fn rejects_unknown_colors() {
        assert_eq!(BordadosColors::parse("chartreuse"), None);
        assert_eq!(BordadosColors::parse("#fff"), None);
        assert_eq!(BordadosColors::parse("#zzzzzz"), None);
    }
}
