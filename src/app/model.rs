//! Contract between the display and the machine model
//!
//! The cipher logic lives outside this crate. The view only needs three
//! fire-and-forget commands and three side-effect-free queries.

use crate::domain::control::Letter;

/// Narrow query/command interface of the machine model
///
/// Queries must be pure and immediately reflect every command issued
/// before them. All calls happen on the display's single thread.
pub trait MachineModel {
    /// A key was pressed on the keyboard
    fn key_pressed(&mut self, letter: Letter);

    /// A key was released
    fn key_released(&mut self, letter: Letter);

    /// A rotor's click zone was clicked
    fn rotor_clicked(&mut self, index: usize);

    fn is_key_down(&self, letter: Letter) -> bool;

    fn is_lamp_on(&self, letter: Letter) -> bool;

    /// Letter currently visible in a rotor window
    fn rotor_letter(&self, index: usize) -> char;
}

impl<M: MachineModel + ?Sized> MachineModel for Box<M> {
    fn key_pressed(&mut self, letter: Letter) {
        (**self).key_pressed(letter);
    }

    fn key_released(&mut self, letter: Letter) {
        (**self).key_released(letter);
    }

    fn rotor_clicked(&mut self, index: usize) {
        (**self).rotor_clicked(index);
    }

    fn is_key_down(&self, letter: Letter) -> bool {
        (**self).is_key_down(letter)
    }

    fn is_lamp_on(&self, letter: Letter) -> bool {
        (**self).is_lamp_on(letter)
    }

    fn rotor_letter(&self, index: usize) -> char {
        (**self).rotor_letter(index)
    }
}
