use enigma_view::ui::{ApproxMetrics, SceneRenderer, Widget};
use enigma_view::{
    EnigmaView, GeometryTable, Letter, MachineCommand, MachineModel, PanelTestModel, PointerEvent,
    Style, ViewPhase,
};

fn letter(ch: char) -> Letter {
    Letter::from_char(ch).unwrap()
}

fn panel_view() -> EnigmaView<PanelTestModel> {
    let layout = GeometryTable::standard();
    let model = PanelTestModel::new(layout.rotor_count());
    EnigmaView::new(model, layout, Style::default(), Box::new(ApproxMetrics::default()))
}

#[test]
fn typing_a_letter_round_trip() {
    let mut view = panel_view();
    let g = view.layout().key_position(letter('G'));

    assert_eq!(
        view.handle_pointer(PointerEvent::down(g.x, g.y)),
        Some(MachineCommand::KeyPressed(letter('G')))
    );
    view.update();
    assert_eq!(view.phase(), ViewPhase::Displaying);
    assert!(view.key(letter('G')).is_down());
    assert!(view.lamp(letter('G')).is_lit());

    assert_eq!(
        view.handle_pointer(PointerEvent::up(g.x, g.y)),
        Some(MachineCommand::KeyReleased(letter('G')))
    );
    view.update();
    assert!(!view.key(letter('G')).is_down());
    assert!(!view.lamp(letter('G')).is_lit());
}

#[test]
fn clicking_rotors_advances_windows() {
    let mut view = panel_view();
    let middle = view.layout().rotor_position(1).unwrap();

    for _ in 0..3 {
        view.handle_pointer(PointerEvent::down(middle.x, middle.y + 40.0));
        view.handle_pointer(PointerEvent::up(middle.x, middle.y + 40.0));
    }
    view.update();

    assert_eq!(view.rotor(0).unwrap().letter(), 'A');
    assert_eq!(view.rotor(1).unwrap().letter(), 'D');
    assert_eq!(view.rotor(2).unwrap().letter(), 'A');
    assert_eq!(view.model().rotor_letter(1), 'D');
}

#[test]
fn display_lags_model_until_update() {
    let mut view = panel_view();
    view.model_mut().key_pressed(letter('P'));
    assert!(!view.lamp(letter('P')).is_lit());

    view.update();
    assert!(view.lamp(letter('P')).is_lit());
}

/// Panel model that also counts every command it receives
struct CountingModel {
    panel: PanelTestModel,
    received: usize,
}

impl MachineModel for CountingModel {
    fn key_pressed(&mut self, letter: Letter) {
        self.received += 1;
        self.panel.key_pressed(letter);
    }

    fn key_released(&mut self, letter: Letter) {
        self.received += 1;
        self.panel.key_released(letter);
    }

    fn rotor_clicked(&mut self, index: usize) {
        self.received += 1;
        self.panel.rotor_clicked(index);
    }

    fn is_key_down(&self, letter: Letter) -> bool {
        self.panel.is_key_down(letter)
    }

    fn is_lamp_on(&self, letter: Letter) -> bool {
        self.panel.is_lamp_on(letter)
    }

    fn rotor_letter(&self, index: usize) -> char {
        self.panel.rotor_letter(index)
    }
}

#[test]
fn sweep_never_issues_more_than_one_command() {
    let layout = GeometryTable::standard();
    let model = CountingModel {
        panel: PanelTestModel::new(layout.rotor_count()),
        received: 0,
    };
    let mut view = EnigmaView::new(model, layout, Style::default(), Box::new(ApproxMetrics::default()));
    let (width, height) = view.layout().window_size();

    let mut issued = 0;
    for y in (0..height).step_by(7) {
        for x in (0..width).step_by(7) {
            for event in [PointerEvent::down(x as f32, y as f32), PointerEvent::up(x as f32, y as f32)] {
                let before = view.model().received;
                let command = view.handle_pointer(event);
                let delta = view.model().received - before;

                assert!(delta <= 1, "({x}, {y}) sent {delta} commands");
                assert_eq!(delta, usize::from(command.is_some()), "({x}, {y}) reported {command:?}");
                issued += delta;
            }
        }
    }
    view.update();

    assert!(issued > 0);
    for l in Letter::ALL {
        assert!(!view.key(l).is_down());
    }
}

#[test]
fn snapshot_shows_lit_lamp_face() {
    let mut view = panel_view();
    let k = view.layout().key_position(letter('K'));
    view.pointer_down(k);
    view.update();

    let widgets = view.widgets();
    let lamp = widgets
        .iter()
        .find(|w| matches!(w, Widget::Lamp(l) if l.letter() == letter('K')))
        .unwrap();
    assert_eq!(lamp.label().color(), Style::default().lamp.on_color);

    let pixmap = view.render(&SceneRenderer::new()).unwrap();
    let center = view.layout().lamp_position(letter('K'));
    let pixel = pixmap
        .pixel(center.x as u32, center.y as u32)
        .unwrap()
        .demultiply();
    let face = Style::default().lamp.face_color;
    assert!((pixel.red() as i16 - face.r as i16).abs() <= 2);
    assert!((pixel.green() as i16 - face.g as i16).abs() <= 2);
}
