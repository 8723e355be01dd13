//! The machine view
//!
//! Owns the widget registry, the geometry table and the model. Pointer
//! events are resolved here by linear scans over the geometry table and
//! forwarded to the model as commands; `update` then pulls the complete
//! model state back into every widget.

use thiserror::Error;
use tiny_skia::Pixmap;
use tracing::{debug, info, trace};

use crate::app::model::MachineModel;
use crate::config::layout::{GeometryTable, LayoutError, LayoutSpec};
use crate::config::style::Style;
use crate::domain::control::{ALPHABET_LEN, HitTarget, Letter};
use crate::domain::core::Position;
use crate::input::pointer::{MachineCommand, PointerEvent, PointerKind};
use crate::ui::assets::AssetError;
use crate::ui::renderer::{RenderError, Scene, SceneRenderer};
use crate::ui::text::TextMetrics;
use crate::ui::widgets::{Key, Lamp, RotorWindow, Widget};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("Asset loading failed: {0}")]
    Asset(#[from] AssetError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Lifecycle of the view
///
/// `Constructed` until the first `update`, `Displaying` from then on.
/// There is no terminal phase; the view lives until the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Constructed,
    Displaying,
}

/// Display and interaction layer of the machine simulator
///
/// Widget membership is fixed at construction: one key and one lamp per
/// letter, one rotor window per rotor slot of the layout.
pub struct EnigmaView<M: MachineModel> {
    model: M,
    layout: GeometryTable,
    style: Style,
    metrics: Box<dyn TextMetrics>,
    background: Option<Pixmap>,
    keys: [Key; ALPHABET_LEN],
    lamps: [Lamp; ALPHABET_LEN],
    rotors: Vec<RotorWindow>,
    phase: ViewPhase,
}

impl<M: MachineModel> EnigmaView<M> {
    /// Builds the full scene for a validated layout
    ///
    /// Widgets are created in paint order: keys, then lamps, then rotors,
    /// all on top of the background.
    pub fn new(model: M, layout: GeometryTable, style: Style, metrics: Box<dyn TextMetrics>) -> Self {
        let key_radius = layout.key_radius();
        let lamp_radius = layout.lamp_radius();

        let keys = Letter::ALL.map(|letter| {
            Key::new(letter, layout.key_position(letter), key_radius, &style.key, metrics.as_ref())
        });

        let lamps = Letter::ALL.map(|letter| {
            Lamp::new(letter, layout.lamp_position(letter), lamp_radius, &style.lamp, metrics.as_ref())
        });

        let rotors: Vec<RotorWindow> = (0..layout.rotor_count())
            .filter_map(|index| {
                layout
                    .rotor_position(index)
                    .map(|origin| RotorWindow::new(index, origin, &style.rotor, metrics.as_ref()))
            })
            .collect();

        let (width, height) = layout.window_size();
        info!(
            width,
            height,
            keys = keys.len(),
            lamps = lamps.len(),
            rotors = rotors.len(),
            "Machine view constructed"
        );

        Self {
            model,
            layout,
            style,
            metrics,
            background: None,
            keys,
            lamps,
            rotors,
            phase: ViewPhase::Constructed,
        }
    }

    /// Validates a raw layout, then builds the view
    pub fn from_spec(
        model: M,
        spec: LayoutSpec,
        style: Style,
        metrics: Box<dyn TextMetrics>,
    ) -> Result<Self, ViewError> {
        let layout = GeometryTable::new(spec)?;
        Ok(Self::new(model, layout, style, metrics))
    }

    /// Places a background image under every widget
    pub fn with_background(mut self, background: Pixmap) -> Self {
        self.background = Some(background);
        self
    }

    /// Handles a pointer press
    ///
    /// Keys are scanned first in alphabet order, then rotors in slot
    /// order; the first hit wins. Presses in dead space are ignored.
    pub fn pointer_down(&mut self, point: Position) -> Option<MachineCommand> {
        let command = match self.layout.resolve(point)? {
            HitTarget::Key(letter) => MachineCommand::KeyPressed(letter),
            HitTarget::Rotor(index) => MachineCommand::RotorClicked(index),
        };
        Some(self.issue(command, point))
    }

    /// Handles a pointer release
    ///
    /// Only keys react to releases; rotors are click-only.
    pub fn pointer_up(&mut self, point: Position) -> Option<MachineCommand> {
        let letter = self.layout.find_key(point)?;
        Some(self.issue(MachineCommand::KeyReleased(letter), point))
    }

    /// Dispatches a pointer event to the press or release handler
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<MachineCommand> {
        let command = match event.kind {
            PointerKind::Down => self.pointer_down(event.position),
            PointerKind::Up => self.pointer_up(event.position),
        };
        if command.is_none() {
            trace!(kind = ?event.kind, x = event.position.x, y = event.position.y, "Pointer event outside all controls");
        }
        command
    }

    fn issue(&mut self, command: MachineCommand, point: Position) -> MachineCommand {
        debug!(?command, x = point.x, y = point.y, "Pointer resolved");
        command.apply(&mut self.model);
        command
    }

    /// Re-reads the complete model state into every widget
    ///
    /// Always a full refresh, never a delta, so calling it twice with an
    /// unchanged model leaves every widget as it was.
    pub fn update(&mut self) {
        for letter in Letter::ALL {
            self.keys[letter.index()].set_down(self.model.is_key_down(letter));
            self.lamps[letter.index()].set_lit(self.model.is_lamp_on(letter));
        }
        for (index, rotor) in self.rotors.iter_mut().enumerate() {
            rotor.set_letter(self.model.rotor_letter(index), self.metrics.as_ref());
        }
        self.phase = ViewPhase::Displaying;
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn key(&self, letter: Letter) -> &Key {
        &self.keys[letter.index()]
    }

    pub fn lamp(&self, letter: Letter) -> &Lamp {
        &self.lamps[letter.index()]
    }

    pub fn rotor(&self, index: usize) -> Option<&RotorWindow> {
        self.rotors.get(index)
    }

    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// All widgets from bottom to top
    pub fn widgets(&self) -> Vec<Widget<'_>> {
        self.keys
            .iter()
            .map(Widget::Key)
            .chain(self.lamps.iter().map(Widget::Lamp))
            .chain(self.rotors.iter().map(Widget::Rotor))
            .collect()
    }

    /// Snapshot of the current display for the renderer
    pub fn scene(&self) -> Scene<'_> {
        let (width, height) = self.layout.window_size();
        Scene {
            width,
            height,
            backdrop: self.style.backdrop,
            background: self.background.as_ref(),
            widgets: self.widgets(),
        }
    }

    /// Paints the current display
    pub fn render(&self, renderer: &SceneRenderer) -> Result<Pixmap, ViewError> {
        Ok(renderer.render(&self.scene())?)
    }

    pub fn layout(&self) -> &GeometryTable {
        &self.layout
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access for callers that drive the model directly
    ///
    /// Call `update` afterwards to bring the display back in sync.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::style::Rgb;
    use crate::ui::text::ApproxMetrics;

    /// Model that records every command and answers queries from tables
    #[derive(Debug, Default)]
    struct RecordingModel {
        commands: Vec<MachineCommand>,
        keys_down: Vec<Letter>,
        lamps_on: Vec<Letter>,
        rotor_letters: Vec<char>,
    }

    impl MachineModel for RecordingModel {
        fn key_pressed(&mut self, letter: Letter) {
            self.commands.push(MachineCommand::KeyPressed(letter));
        }

        fn key_released(&mut self, letter: Letter) {
            self.commands.push(MachineCommand::KeyReleased(letter));
        }

        fn rotor_clicked(&mut self, index: usize) {
            self.commands.push(MachineCommand::RotorClicked(index));
        }

        fn is_key_down(&self, letter: Letter) -> bool {
            self.keys_down.contains(&letter)
        }

        fn is_lamp_on(&self, letter: Letter) -> bool {
            self.lamps_on.contains(&letter)
        }

        fn rotor_letter(&self, index: usize) -> char {
            self.rotor_letters.get(index).copied().unwrap_or('A')
        }
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn view() -> EnigmaView<RecordingModel> {
        EnigmaView::new(
            RecordingModel::default(),
            GeometryTable::standard(),
            Style::default(),
            Box::new(ApproxMetrics::default()),
        )
    }

    fn display_state(view: &EnigmaView<RecordingModel>) -> (Vec<bool>, Vec<bool>, Vec<char>, Vec<Rgb>) {
        let keys = Letter::ALL.iter().map(|&l| view.key(l).is_down()).collect();
        let lamps = Letter::ALL.iter().map(|&l| view.lamp(l).is_lit()).collect();
        let rotors = (0..view.rotor_count()).map(|i| view.rotor(i).unwrap().letter()).collect();
        let colors = view.widgets().iter().map(|w| w.label().color()).collect();
        (keys, lamps, rotors, colors)
    }

    #[test]
    fn registry_is_complete_after_construction() {
        let view = view();
        assert_eq!(view.phase(), ViewPhase::Constructed);
        for l in Letter::ALL {
            assert_eq!(view.key(l).letter(), l);
            assert_eq!(view.lamp(l).letter(), l);
        }
        assert_eq!(view.rotor_count(), 3);
        assert!(view.rotor(3).is_none());
        for i in 0..3 {
            assert_eq!(view.rotor(i).unwrap().letter(), 'A');
            assert_eq!(view.rotor(i).unwrap().index(), i);
        }
    }

    #[test]
    fn widgets_in_paint_order() {
        let view = view();
        let widgets = view.widgets();
        assert_eq!(widgets.len(), 26 + 26 + 3);
        assert!(widgets[..26].iter().all(|w| matches!(w, Widget::Key(_))));
        assert!(widgets[26..52].iter().all(|w| matches!(w, Widget::Lamp(_))));
        assert!(widgets[52..].iter().all(|w| matches!(w, Widget::Rotor(_))));
        assert_eq!(widgets[0].origin(), view.layout().key_position(letter('A')));
        assert_eq!(widgets[26].origin(), view.layout().lamp_position(letter('A')));
    }

    #[test]
    fn press_and_release_on_key() {
        let mut view = view();
        let a = view.layout().key_position(letter('A'));

        assert_eq!(view.pointer_down(a), Some(MachineCommand::KeyPressed(letter('A'))));
        assert_eq!(view.pointer_up(a), Some(MachineCommand::KeyReleased(letter('A'))));
        assert_eq!(
            view.model().commands,
            vec![
                MachineCommand::KeyPressed(letter('A')),
                MachineCommand::KeyReleased(letter('A')),
            ]
        );

        view.update();
        assert!(!view.key(letter('A')).is_down());
    }

    #[test]
    fn press_in_rotor_zone_clicks_rotor_only() {
        let mut view = view();
        let p = Position::new(250.0, 120.0);

        assert_eq!(view.pointer_down(p), Some(MachineCommand::RotorClicked(0)));
        assert_eq!(view.pointer_up(p), None);
        assert_eq!(view.model().commands, vec![MachineCommand::RotorClicked(0)]);
    }

    #[test]
    fn dead_space_issues_nothing() {
        let mut view = view();
        let p = Position::new(10.0, 10.0);
        assert_eq!(view.handle_pointer(PointerEvent::down(p.x, p.y)), None);
        assert_eq!(view.handle_pointer(PointerEvent::up(p.x, p.y)), None);

        // Lamps are display-only
        let lamp = view.layout().lamp_position(letter('E'));
        assert_eq!(view.pointer_down(lamp), None);
        assert!(view.model().commands.is_empty());
    }

    #[test]
    fn release_anywhere_on_key_circle() {
        let mut view = view();
        let z = view.layout().key_position(letter('Z'));
        let rim = Position::new(z.x, z.y - 24.0);
        assert_eq!(
            view.handle_pointer(PointerEvent::up(rim.x, rim.y)),
            Some(MachineCommand::KeyReleased(letter('Z')))
        );
    }

    #[test]
    fn update_mirrors_model() {
        let mut view = view();
        {
            let model = view.model_mut();
            model.keys_down = vec![letter('B'), letter('X')];
            model.lamps_on = vec![letter('Q')];
            model.rotor_letters = vec!['Q', 'E', 'V'];
        }
        view.update();

        assert_eq!(view.phase(), ViewPhase::Displaying);
        for l in Letter::ALL {
            assert_eq!(view.key(l).is_down(), view.model().is_key_down(l), "key {l}");
            assert_eq!(view.lamp(l).is_lit(), view.model().is_lamp_on(l), "lamp {l}");
        }
        for i in 0..view.rotor_count() {
            assert_eq!(view.rotor(i).unwrap().letter(), view.model().rotor_letter(i));
        }
        let style = Style::default();
        assert_eq!(Widget::Key(view.key(letter('B'))).label().color(), style.key.down_color);
        assert_eq!(Widget::Lamp(view.lamp(letter('Q'))).label().color(), style.lamp.on_color);
    }

    #[test]
    fn update_is_idempotent() {
        let mut view = view();
        view.model_mut().keys_down = vec![letter('M')];
        view.model_mut().rotor_letters = vec!['W', 'I', 'Z'];

        view.update();
        let first = display_state(&view);
        view.update();
        let second = display_state(&view);
        assert_eq!(first, second);
    }

    #[test]
    fn update_clears_previous_state() {
        let mut view = view();
        view.model_mut().lamps_on = vec![letter('T')];
        view.update();
        assert!(view.lamp(letter('T')).is_lit());

        view.model_mut().lamps_on.clear();
        view.update();
        assert!(!view.lamp(letter('T')).is_lit());
    }

    #[test]
    fn rotor_label_recentered_after_update() {
        let mut view = view();
        view.model_mut().rotor_letters = vec!['W', 'A', 'A'];
        view.update();

        let origin = view.layout().rotor_position(0).unwrap();
        let label = Widget::Rotor(view.rotor(0).unwrap()).label();
        let start = label.baseline_origin(origin);
        assert!((start.x + label.width() / 2.0 - origin.x).abs() < 1e-4);
    }

    #[test]
    fn from_spec_rejects_bad_layout() {
        let mut spec = LayoutSpec::standard();
        spec.rotors.clear();
        let result = EnigmaView::from_spec(
            RecordingModel::default(),
            spec,
            Style::default(),
            Box::new(ApproxMetrics::default()),
        );
        assert!(matches!(result, Err(ViewError::Layout(LayoutError::NoRotors))));
    }

    #[test]
    fn render_produces_window_sized_pixmap() {
        let view = view();
        let pixmap = view.render(&SceneRenderer::new()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (818, 694));
    }
}
