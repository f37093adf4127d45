//! Utility modules shared across the generator.

pub mod html;
pub mod log;
pub mod slug;
