//! Core types and constants for pulse
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod content;
mod env_config;
mod slug;

pub use constants::*;
pub use content::*;
pub use env_config::*;
pub use slug::*;
