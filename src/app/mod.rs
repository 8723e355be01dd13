//! Application orchestration layer
//!
//! The view coordinates between pointer input, the geometry table, the
//! widgets and the external machine model.

pub mod model;
pub mod panel;
pub mod view;

pub use model::MachineModel;
pub use panel::PanelTestModel;
pub use view::{EnigmaView, ViewError, ViewPhase};
