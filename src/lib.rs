//! Enigma View: display and interaction layer of a cipher-machine simulator
//!
//! Renders the keyboard, lampboard and rotor windows of the machine,
//! resolves pointer events to machine controls, and mirrors the state of
//! an external machine model back onto the display.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::{EnigmaView, MachineModel, PanelTestModel, ViewError, ViewPhase};
pub use config::{GeometryTable, LayoutSpec, Style};
pub use domain::{HitTarget, Letter, Position};
pub use input::{MachineCommand, PointerEvent, PointerKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
