//! Platform abstraction layer
//!
//! Turns host input and timing into the plain values the sim consumes:
//! - Held direction keys -> direction vector
//! - Frame timestamps -> clamped per-frame dt

pub mod input;
pub mod time;

pub use input::{HeldKeys, Key};
pub use time::FrameClock;
