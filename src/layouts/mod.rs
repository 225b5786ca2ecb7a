//! Layout implementations

pub mod basic;
pub mod json;
pub mod simple;

pub use basic::BasicLayout;
pub use json::JsonLayout;
pub use simple::SimpleLayout;

// Re-export the trait next to its implementations
pub use crate::core::{Layout, NullLayout};
