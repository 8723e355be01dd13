//! Domain logic and core data structures
//!
//! This module contains pure identity and geometry types that are
//! independent of drawing and of the machine model.

pub mod control;
pub mod core;

pub use control::{ALPHABET_LEN, HitTarget, InvalidLetter, Letter};
pub use core::{HitRegion, Position};
