//! Panel test model
//!
//! A stand-in for the real machine model used by the snapshot binary and
//! by integration tests. It performs no enciphering: a held key lights
//! the lamp of the same letter, and clicking a rotor advances it by one.

use tracing::{trace, warn};

use crate::app::model::MachineModel;
use crate::domain::control::{ALPHABET_LEN, Letter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelTestModel {
    keys: [bool; ALPHABET_LEN],
    lamps: [bool; ALPHABET_LEN],
    rotors: Vec<Letter>,
}

impl PanelTestModel {
    /// Creates a model with all keys up, all lamps off and every rotor at A
    pub fn new(rotor_count: usize) -> Self {
        Self {
            keys: [false; ALPHABET_LEN],
            lamps: [false; ALPHABET_LEN],
            rotors: vec![Letter::ALL[0]; rotor_count],
        }
    }

    /// Sets a rotor directly, ignoring slots that do not exist
    pub fn set_rotor(&mut self, index: usize, letter: Letter) {
        if let Some(slot) = self.rotors.get_mut(index) {
            *slot = letter;
        }
    }

    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }
}

impl MachineModel for PanelTestModel {
    fn key_pressed(&mut self, letter: Letter) {
        trace!(%letter, "Panel key down");
        self.keys[letter.index()] = true;
        self.lamps[letter.index()] = true;
    }

    fn key_released(&mut self, letter: Letter) {
        trace!(%letter, "Panel key up");
        self.keys[letter.index()] = false;
        self.lamps[letter.index()] = false;
    }

    fn rotor_clicked(&mut self, index: usize) {
        match self.rotors.get_mut(index) {
            Some(slot) => {
                let next = (slot.index() + 1) % ALPHABET_LEN;
                *slot = Letter::ALL[next];
                trace!(index, letter = %slot, "Panel rotor advanced");
            }
            None => warn!(index, "Click on rotor slot the panel does not have"),
        }
    }

    fn is_key_down(&self, letter: Letter) -> bool {
        self.keys[letter.index()]
    }

    fn is_lamp_on(&self, letter: Letter) -> bool {
        self.lamps[letter.index()]
    }

    fn rotor_letter(&self, index: usize) -> char {
        self.rotors.get(index).map_or('?', |letter| letter.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn starts_idle() {
        let model = PanelTestModel::new(3);
        assert_eq!(model.rotor_count(), 3);
        for l in Letter::ALL {
            assert!(!model.is_key_down(l));
            assert!(!model.is_lamp_on(l));
        }
        assert_eq!(model.rotor_letter(0), 'A');
    }

    #[test]
    fn held_key_lights_own_lamp() {
        let mut model = PanelTestModel::new(3);
        model.key_pressed(letter('K'));
        assert!(model.is_key_down(letter('K')));
        assert!(model.is_lamp_on(letter('K')));
        assert!(!model.is_lamp_on(letter('L')));

        model.key_released(letter('K'));
        assert!(!model.is_key_down(letter('K')));
        assert!(!model.is_lamp_on(letter('K')));
    }

    #[test]
    fn rotor_wraps_after_z() {
        let mut model = PanelTestModel::new(3);
        model.set_rotor(1, letter('Z'));
        model.rotor_clicked(1);
        assert_eq!(model.rotor_letter(1), 'A');
        model.rotor_clicked(1);
        assert_eq!(model.rotor_letter(1), 'B');
        assert_eq!(model.rotor_letter(0), 'A');
    }

    #[test]
    fn unknown_rotor_is_ignored() {
        let mut model = PanelTestModel::new(1);
        model.rotor_clicked(5);
        model.set_rotor(5, letter('Q'));
        assert_eq!(model, PanelTestModel::new(1));
        assert_eq!(model.rotor_letter(5), '?');
    }
}
