//! Layout Components
//!
//! Aside containers, the fixed header and the main band.

pub mod aside_left;
pub mod container_aside;
pub mod header;
pub mod main_section;
