//! Components - Reusable UI Components
//!
//! Pure UI components that don't do I/O.

pub mod layout;
pub mod primitives;
