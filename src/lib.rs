//! Bordados GUI Library
//!
//! Components and pages for the Bordados embroidery catalog, built on GPUI
//! and gpui-component.

pub mod app;
pub mod assets;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod logging;
pub mod states;
pub mod theme;
