//! Style values
//!
//! Typed stand-ins for the CSS-like strings components accept as options:
//! lengths, text alignment and borders.

use std::fmt;
use std::str::FromStr;

use gpui::{DefiniteLength, Length, Rgba, px, relative};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::theme::colors::BordadosColors;

/// A box length: `auto`, absolute pixels or a percentage of the parent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    #[default]
    Auto,
    Px(f32),
    Percent(f32),
}

impl Dimension {
    /// `100%`
    pub const FULL: Dimension = Dimension::Percent(100.0);

    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Dimension::Auto);
        }

        let invalid = || Error::InvalidDimension {
            value: value.to_string(),
        };
        let number = |s: &str| -> Result<f32> {
            let n: f32 = s.trim().parse().map_err(|_| invalid())?;
            if n.is_finite() && n >= 0.0 { Ok(n) } else { Err(invalid()) }
        };

        if let Some(n) = trimmed.strip_suffix("px") {
            Ok(Dimension::Px(number(n)?))
        } else if let Some(n) = trimmed.strip_suffix('%') {
            Ok(Dimension::Percent(number(n)?))
        } else {
            Ok(Dimension::Px(number(trimmed)?))
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => f.write_str("auto"),
            Dimension::Px(n) => write!(f, "{n}px"),
            Dimension::Percent(n) => write!(f, "{n}%"),
        }
    }
}

impl TryFrom<String> for Dimension {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Dimension> for String {
    fn from(value: Dimension) -> Self {
        value.to_string()
    }
}

impl From<Dimension> for Length {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Auto => Length::Auto,
            Dimension::Px(n) => Length::Definite(DefiniteLength::from(px(n))),
            Dimension::Percent(n) => Length::Definite(relative(n / 100.0)),
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for TextAlign {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "left" | "start" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" | "end" => Ok(TextAlign::Right),
            _ => Err(Error::InvalidAlign {
                value: value.to_string(),
            }),
        }
    }
}

/// A solid border around a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Rgba,
}

impl Border {
    /// `0px solid black`
    pub fn none() -> Self {
        Self {
            width: 0.0,
            color: BordadosColors::black(),
        }
    }

    pub fn solid(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::none()
    }
}

impl FromStr for Border {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidBorder {
            value: value.to_string(),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Border::none());
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [width, style, color] = parts.as_slice() else {
            return Err(invalid());
        };
        if !style.eq_ignore_ascii_case("solid") {
            return Err(invalid());
        }

        let width = match width.parse::<Dimension>().map_err(|_| invalid())? {
            Dimension::Px(n) => n,
            _ => return Err(invalid()),
        };
        let color = BordadosColors::parse(color).ok_or_else(invalid)?;

        Ok(Border::solid(width, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_parses_css_forms() {
        assert_eq!("auto".parse::<Dimension>().ok(), Some(Dimension::Auto));
        assert_eq!("".parse::<Dimension>().ok(), Some(Dimension::Auto));
        assert_eq!("100px".parse::<Dimension>().ok(), Some(Dimension::Px(100.0)));
        assert_eq!("200".parse::<Dimension>().ok(), Some(Dimension::Px(200.0)));
        assert_eq!("33%".parse::<Dimension>().ok(), Some(Dimension::Percent(33.0)));
        assert_eq!(" 12.5px ".parse::<Dimension>().ok(), Some(Dimension::Px(12.5)));
    }

    #[test]
    fn dimension_rejects_garbage() {
        assert!("wide".parse::<Dimension>().is_err());
        assert!("-4px".parse::<Dimension>().is_err());
        assert!("px".parse::<Dimension>().is_err());
    }

    #[test]
    fn dimension_displays_back() {
        assert_eq!(Dimension::Px(100.0).to_string(), "100px");
        assert_eq!(Dimension::FULL.to_string(), "100%");
        assert_eq!(Dimension::Auto.to_string(), "auto");
    }

    #[test]
    fn dimension_converts_to_gpui_length() {
        assert_eq!(Length::from(Dimension::Auto), Length::Auto);
        assert_eq!(
            Length::from(Dimension::Percent(50.0)),
            Length::Definite(relative(0.5))
        );
    }

    #[test]
    fn align_parses_case_insensitively() {
        assert_eq!("Center".parse::<TextAlign>().ok(), Some(TextAlign::Center));
        assert_eq!("".parse::<TextAlign>().ok(), Some(TextAlign::Left));
        assert!("justify".parse::<TextAlign>().is_err());
    }

    #[test]
    fn border_default_is_invisible_black() {
        let border = Border::default();
        assert!(!border.is_visible());
        assert_eq!(border.color, BordadosColors::black());
        assert_eq!("0px solid black".parse::<Border>().ok(), Some(border));
    }

    #[test]
    fn border_parses_width_and_color() {
        let border: Border = "2px solid #212529".parse().expect("valid border");
        assert_eq!(border, Border::solid(2.0, BordadosColors::dark()));
        assert!("2px dashed black".parse::<Border>().is_err());
        assert!("2% solid black".parse::<Border>().is_err());
        assert!("thick".parse::<Border>().is_err());
    }
}
