//! Primitive Components
//!
//! Basic building blocks: icons, buttons, inputs and the logo.

pub mod button;
pub mod icon;
pub mod logo;
pub mod select_field;
pub mod text_field;
