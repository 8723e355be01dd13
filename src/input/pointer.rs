//! Pointer events and the machine commands they resolve to
//!
//! The surrounding event loop delivers raw pointer presses and releases
//! in window coordinates. The view resolves each one against the geometry
//! table and turns a hit into at most one [`MachineCommand`].

use crate::app::model::MachineModel;
use crate::domain::control::Letter;
use crate::domain::core::Position;

/// Pointer transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Up,
}

/// Pointer event in window pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Position,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Position::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Position::new(x, y),
        }
    }
}

/// Command issued to the machine model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineCommand {
    KeyPressed(Letter),
    KeyReleased(Letter),
    RotorClicked(usize),
}

impl MachineCommand {
    /// Forwards this command to the model
    pub fn apply<M: MachineModel + ?Sized>(self, model: &mut M) {
        match self {
            MachineCommand::KeyPressed(letter) => model.key_pressed(letter),
            MachineCommand::KeyReleased(letter) => model.key_released(letter),
            MachineCommand::RotorClicked(index) => model.rotor_clicked(index),
        }
    }
}
