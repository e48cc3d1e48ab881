//! Theme - Colors, typography and utility classes

pub mod colors;
pub mod typography;
pub mod utility;
