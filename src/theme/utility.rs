//! Utility classes
//!
//! A small, typed subset of bootstrap-style utility classes. Components that
//! accept free-form `class_name` options collect tokens into a [`ClassList`],
//! which applies the recognized ones to any GPUI [`Styled`] element.

use std::fmt;

use gpui::{Rgba, SharedString, Styled, px, relative};

use crate::theme::colors::BordadosColors;
use crate::theme::typography::{CONTAINER_LG_MAX_WIDTH, spacing};

/// Color tone used by `bg-*` and `text-*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Light,
    Dark,
}

impl Tone {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Tone::Primary),
            "secondary" => Some(Tone::Secondary),
            "light" => Some(Tone::Light),
            "dark" => Some(Tone::Dark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Light => "light",
            Tone::Dark => "dark",
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            Tone::Primary => BordadosColors::primary(),
            Tone::Secondary => BordadosColors::secondary(),
            Tone::Light => BordadosColors::light(),
            Tone::Dark => BordadosColors::dark(),
        }
    }

    /// `bg-<tone>`
    pub fn background_class(self) -> SharedString {
        format!("bg-{}", self.name()).into()
    }
}

/// Drop shadow size used by `shadow-*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowSize {
    Sm,
    Md,
    Lg,
}

impl ShadowSize {
    pub fn class(self) -> SharedString {
        match self {
            ShadowSize::Sm => "shadow-sm",
            ShadowSize::Md => "shadow-md",
            ShadowSize::Lg => "shadow-lg",
        }
        .into()
    }
}

/// A recognized utility class
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Utility {
    Background(Tone),
    TextColor(Tone),
    Shadow(ShadowSize),
    /// `col-N`: N twelfths of the parent width
    Column(u8),
    FullWidth,
    FullHeight,
    HalfHeight,
    /// `p-N`
    Padding(u8),
    /// `gap-N`
    Gap(u8),
    Flex,
    FlexColumn,
    FlexRow,
    JustifyBetween,
    JustifyCenter,
    JustifyEnd,
    ItemsCenter,
    ContainerLg,
    Fixed,
}

impl Utility {
    /// Parse one class token
    pub fn parse(token: &str) -> Option<Self> {
        let utility = match token {
            "shadow-sm" => Utility::Shadow(ShadowSize::Sm),
            "shadow" | "shadow-md" => Utility::Shadow(ShadowSize::Md),
            "shadow-lg" => Utility::Shadow(ShadowSize::Lg),
            "w-100" => Utility::FullWidth,
            "h-100" => Utility::FullHeight,
            "h-50" => Utility::HalfHeight,
            "d-flex" => Utility::Flex,
            "flex-column" => Utility::FlexColumn,
            "flex-row" => Utility::FlexRow,
            "justify-content-between" => Utility::JustifyBetween,
            "justify-content-center" => Utility::JustifyCenter,
            "justify-content-end" => Utility::JustifyEnd,
            "align-items-center" => Utility::ItemsCenter,
            "container-lg" => Utility::ContainerLg,
            "position-fixed" => Utility::Fixed,
            _ => return Self::parse_parameterized(token),
        };
        Some(utility)
    }

    fn parse_parameterized(token: &str) -> Option<Self> {
        let step = |s: &str| s.parse::<u8>().ok().filter(|n| *n <= 5);

        if let Some(tone) = token.strip_prefix("bg-") {
            Tone::parse(tone).map(Utility::Background)
        } else if let Some(tone) = token.strip_prefix("text-") {
            Tone::parse(tone).map(Utility::TextColor)
        } else if let Some(n) = token.strip_prefix("col-") {
            n.parse::<u8>()
                .ok()
                .filter(|n| (1..=12).contains(n))
                .map(Utility::Column)
        } else if let Some(n) = token.strip_prefix("p-") {
            step(n).map(Utility::Padding)
        } else if let Some(n) = token.strip_prefix("gap-") {
            step(n).map(Utility::Gap)
        } else {
            None
        }
    }

    /// Apply this utility to an element
    pub fn apply<E: Styled>(self, el: E) -> E {
        match self {
            Utility::Background(tone) => el.bg(tone.color()),
            Utility::TextColor(tone) => el.text_color(tone.color()),
            Utility::Shadow(ShadowSize::Sm) => el.shadow_sm(),
            Utility::Shadow(ShadowSize::Md) => el.shadow_md(),
            Utility::Shadow(ShadowSize::Lg) => el.shadow_lg(),
            Utility::Column(n) => el.w(relative(f32::from(n) / 12.0)),
            Utility::FullWidth => el.w_full(),
            Utility::FullHeight => el.h_full(),
            Utility::HalfHeight => el.h(relative(0.5)),
            Utility::Padding(n) => el.p(px(spacing(n))),
            Utility::Gap(n) => el.gap(px(spacing(n))),
            Utility::Flex => el.flex(),
            Utility::FlexColumn => el.flex_col(),
            Utility::FlexRow => el.flex_row(),
            Utility::JustifyBetween => el.justify_between(),
            Utility::JustifyCenter => el.justify_center(),
            Utility::JustifyEnd => el.justify_end(),
            Utility::ItemsCenter => el.items_center(),
            Utility::ContainerLg => el.w_full().max_w(px(CONTAINER_LG_MAX_WIDTH)).mx_auto(),
            Utility::Fixed => el.absolute(),
        }
    }
}

/// An ordered list of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<SharedString>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a space separated class string
    pub fn parse(classes: &str) -> Self {
        Self(classes.split_whitespace().map(|t| SharedString::from(t.to_string())).collect())
    }

    /// Append every token of `classes`; blank input adds nothing
    pub fn push(&mut self, classes: impl AsRef<str>) {
        self.0.extend(
            classes
                .as_ref()
                .split_whitespace()
                .map(|t| SharedString::from(t.to_string())),
        );
    }

    pub fn push_opt(&mut self, classes: Option<impl AsRef<str>>) {
        if let Some(classes) = classes {
            self.push(classes);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[SharedString] {
        &self.0
    }

    /// Recognized utilities in token order
    pub fn utilities(&self) -> Vec<Utility> {
        self.0
            .iter()
            .filter_map(|token| {
                let utility = Utility::parse(token);
                if utility.is_none() {
                    tracing::debug!(class = %token, "Ignoring unknown utility class");
                }
                utility
            })
            .collect()
    }

    /// Apply every recognized utility to `el`
    pub fn apply<E: Styled>(&self, el: E) -> E {
        self.utilities()
            .into_iter()
            .fold(el, |el, utility| utility.apply(el))
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layout_tokens() {
        assert_eq!(Utility::parse("bg-light"), Some(Utility::Background(Tone::Light)));
        assert_eq!(Utility::parse("text-dark"), Some(Utility::TextColor(Tone::Dark)));
        assert_eq!(Utility::parse("shadow-md"), Some(Utility::Shadow(ShadowSize::Md)));
        assert_eq!(Utility::parse("shadow"), Some(Utility::Shadow(ShadowSize::Md)));
        assert_eq!(Utility::parse("col-3"), Some(Utility::Column(3)));
        assert_eq!(Utility::parse("p-5"), Some(Utility::Padding(5)));
        assert_eq!(Utility::parse("gap-2"), Some(Utility::Gap(2)));
        assert_eq!(Utility::parse("container-lg"), Some(Utility::ContainerLg));
    }

    #[test]
    fn rejects_out_of_range_and_unknown_tokens() {
        assert_eq!(Utility::parse("col-0"), None);
        assert_eq!(Utility::parse("col-13"), None);
        assert_eq!(Utility::parse("p-6"), None);
        assert_eq!(Utility::parse("bg-rainbow"), None);
        assert_eq!(Utility::parse("z-3"), None);
    }

    #[test]
    fn class_list_joins_with_single_spaces() {
        let mut classes = ClassList::new();
        classes.push("");
        classes.push_opt(Some("bg-light"));
        classes.push_opt(None::<&str>);
        classes.push("  shadow-md   col-3 ");
        assert_eq!(classes.to_string(), "bg-light shadow-md col-3");
        assert_eq!(classes.tokens().len(), 3);
    }

    #[test]
    fn empty_class_list_displays_empty() {
        let classes = ClassList::parse("   ");
        assert!(classes.is_empty());
        assert_eq!(classes.to_string(), "");
    }

    #[test]
    fn utilities_skip_unknown_tokens_in_order() {
        let classes = ClassList::parse("bg-secondary position-fixed z-2 w-100 p-5");
        assert_eq!(
            classes.utilities(),
            vec![
                Utility::Background(Tone::Secondary),
                Utility::Fixed,
                Utility::FullWidth,
                Utility::Padding(5),
            ]
        );
    }
}
