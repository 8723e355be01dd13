pub mod pointer;

pub use pointer::{MachineCommand, PointerEvent, PointerKind};
