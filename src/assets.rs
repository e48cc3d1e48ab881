//! Embedded assets for Bordados
//!
//! Uses rust-embed to bundle the logo and the bootstrap icon subset at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Asset path of the company logo (served at `/Logo.svg` on the web)
pub const LOGO_ASSET: &str = "Logo.svg";

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "*.svg"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Bootstrap icons bundled with the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapIcon {
    /// Favorites toggle
    HeartFill,
    /// Upload action
    PlusCircleFill,
    /// A to Z
    SortAlphaDown,
    /// Z to A
    SortAlphaUp,
    /// Oldest first
    CaretUpFill,
    /// Newest first
    CaretDownFill,
}

impl BootstrapIcon {
    pub const ALL: [BootstrapIcon; 6] = [
        BootstrapIcon::HeartFill,
        BootstrapIcon::PlusCircleFill,
        BootstrapIcon::SortAlphaDown,
        BootstrapIcon::SortAlphaUp,
        BootstrapIcon::CaretUpFill,
        BootstrapIcon::CaretDownFill,
    ];

    /// Registry key, spelled like the react-bootstrap-icons export
    pub fn name(self) -> &'static str {
        match self {
            BootstrapIcon::HeartFill => "HeartFill",
            BootstrapIcon::PlusCircleFill => "PlusCircleFill",
            BootstrapIcon::SortAlphaDown => "SortAlphaDown",
            BootstrapIcon::SortAlphaUp => "SortAlphaUp",
            BootstrapIcon::CaretUpFill => "CaretUpFill",
            BootstrapIcon::CaretDownFill => "CaretDownFill",
        }
    }

    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            BootstrapIcon::HeartFill => "icons/bootstrap/heart-fill.svg",
            BootstrapIcon::PlusCircleFill => "icons/bootstrap/plus-circle-fill.svg",
            BootstrapIcon::SortAlphaDown => "icons/bootstrap/sort-alpha-down.svg",
            BootstrapIcon::SortAlphaUp => "icons/bootstrap/sort-alpha-up.svg",
            BootstrapIcon::CaretUpFill => "icons/bootstrap/caret-up-fill.svg",
            BootstrapIcon::CaretDownFill => "icons/bootstrap/caret-down-fill.svg",
        }
        .into()
    }
}
