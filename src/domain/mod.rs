//! Domain Models
//!
//! Plain values passed down the component tree.

pub mod option_item;
pub mod style;

pub use option_item::*;
pub use style::*;
