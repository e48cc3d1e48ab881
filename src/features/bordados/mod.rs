//! Bordados catalog feature

pub mod page;
