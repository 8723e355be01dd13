//! Static configuration for the machine display
//!
//! Holds the geometry table (where every control sits and how large its
//! hit region is) and the visual style (colors, font sizes, baselines).
//! Both are plain data injected into the view at construction.

pub mod layout;
pub mod style;

pub use layout::{GeometryTable, LayoutError, LayoutSpec};
pub use style::{KeyStyle, LampStyle, Rgb, RotorStyle, Style};
