//! Select options
//!
//! Entries shown by the sort selector: an icon key, a label and a numeric value.

use gpui::SharedString;
use serde::{Deserialize, Serialize};

use crate::assets::BootstrapIcon;

/// A selectable entry with icon, label and numeric value
///
/// `value` is expected to be unique within a list but nothing enforces it;
/// labels may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Icon registry key
    pub icon: SharedString,
    pub label: SharedString,
    pub value: u32,
}

impl OptionItem {
    pub fn new(icon: impl Into<SharedString>, label: impl Into<SharedString>, value: u32) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            value,
        }
    }
}

/// The catalog's sort orders, alphabetical first then by date
pub fn sort_options() -> Vec<OptionItem> {
    vec![
        OptionItem::new(BootstrapIcon::SortAlphaDown.name(), "Ascendente", 1),
        OptionItem::new(BootstrapIcon::SortAlphaUp.name(), "Descendente", 2),
        OptionItem::new(BootstrapIcon::CaretUpFill.name(), "Ascendente", 3),
        OptionItem::new(BootstrapIcon::CaretDownFill.name(), "Descendente", 4),
    ]
}
