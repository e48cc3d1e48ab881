//! State Management Layer
//!
//! Process-wide settings installed as GPUI globals at startup.

mod config;
mod i18n;

pub use config::*;
pub use i18n::*;
