//! Compound display widgets
//!
//! Every widget is a base shape plus one centered text label, anchored at
//! a fixed origin taken from the geometry table. Widgets are passive: they
//! never look at pointer events and never decide machine behavior, they
//! only display the state pushed into them by the view.

use crate::config::style::{KeyStyle, LampStyle, Rgb, RotorStyle};
use crate::domain::control::Letter;
use crate::domain::core::Position;
use crate::ui::text::TextMetrics;

/// Base shape of a widget, relative to its origin
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled circle centered on the origin, with an outline
    Disc {
        radius: f32,
        fill: Rgb,
        border: Rgb,
        border_width: f32,
    },
    /// Filled rectangle centered on the origin
    Block { width: f32, height: f32, fill: Rgb },
}

/// Single-line text anchored relative to a widget origin
///
/// `offset` points from the widget origin to the left end of the
/// baseline, so the label is horizontally centered when
/// `offset.x == -width / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    px: f32,
    color: Rgb,
    width: f32,
    offset: Position,
}

impl Label {
    fn centered(text: String, px: f32, color: Rgb, baseline_dy: f32, metrics: &dyn TextMetrics) -> Self {
        let mut label = Self {
            text: String::new(),
            px,
            color,
            width: 0.0,
            offset: Position::new(0.0, baseline_dy),
        };
        label.set_text(text, metrics);
        label
    }

    /// Replaces the text and re-centers it over the origin
    fn set_text(&mut self, text: String, metrics: &dyn TextMetrics) {
        self.width = metrics.advance_width(&text, self.px);
        self.offset.x = -self.width / 2.0;
        self.text = text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Absolute baseline start for a widget anchored at `origin`
    pub fn baseline_origin(&self, origin: Position) -> Position {
        Position::new(origin.x + self.offset.x, origin.y + self.offset.y)
    }
}

/// A keyboard key: round cap with a letter whose color shows up/down
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    letter: Letter,
    origin: Position,
    base: Shape,
    label: Label,
    down: bool,
    up_color: Rgb,
    down_color: Rgb,
}

impl Key {
    pub fn new(letter: Letter, origin: Position, radius: f32, style: &KeyStyle, metrics: &dyn TextMetrics) -> Self {
        Self {
            letter,
            origin,
            base: Shape::Disc {
                radius,
                fill: style.face_color,
                border: style.border_color,
                border_width: style.border_width,
            },
            label: Label::centered(
                letter.to_string(),
                style.font_px,
                style.up_color,
                style.label_dy,
                metrics,
            ),
            down: false,
            up_color: style.up_color,
            down_color: style.down_color,
        }
    }

    /// Shows the key as pressed or released
    ///
    /// Only the label color changes; the geometry stays fixed.
    pub fn set_down(&mut self, down: bool) {
        self.down = down;
        self.label.color = if down { self.down_color } else { self.up_color };
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }
}

/// A lampboard lamp: round window with a letter that lights up
#[derive(Debug, Clone, PartialEq)]
pub struct Lamp {
    letter: Letter,
    origin: Position,
    base: Shape,
    label: Label,
    lit: bool,
    off_color: Rgb,
    on_color: Rgb,
}

impl Lamp {
    pub fn new(letter: Letter, origin: Position, radius: f32, style: &LampStyle, metrics: &dyn TextMetrics) -> Self {
        Self {
            letter,
            origin,
            base: Shape::Disc {
                radius,
                fill: style.face_color,
                border: style.border_color,
                border_width: style.border_width,
            },
            label: Label::centered(
                letter.to_string(),
                style.font_px,
                style.off_color,
                style.label_dy,
                metrics,
            ),
            lit: false,
            off_color: style.off_color,
            on_color: style.on_color,
        }
    }

    /// Switches the lamp on or off
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
        self.label.color = if lit { self.on_color } else { self.off_color };
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }
}

/// The setting window of one rotor, showing its visible letter
#[derive(Debug, Clone, PartialEq)]
pub struct RotorWindow {
    index: usize,
    origin: Position,
    base: Shape,
    label: Label,
    letter: char,
}

impl RotorWindow {
    pub fn new(index: usize, origin: Position, style: &RotorStyle, metrics: &dyn TextMetrics) -> Self {
        let letter = style.initial_letter;
        Self {
            index,
            origin,
            base: Shape::Block {
                width: style.width,
                height: style.height,
                fill: style.face_color,
            },
            label: Label::centered(
                letter.to_string(),
                style.font_px,
                style.text_color,
                style.label_dy,
                metrics,
            ),
            letter,
        }
    }

    /// Shows a new letter in the window
    ///
    /// Glyph widths differ, so the label is re-centered on every call.
    pub fn set_letter(&mut self, letter: char, metrics: &dyn TextMetrics) {
        self.letter = letter;
        self.label.set_text(letter.to_string(), metrics);
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Closed set of widgets placed in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget<'a> {
    Key(&'a Key),
    Lamp(&'a Lamp),
    Rotor(&'a RotorWindow),
}

impl<'a> Widget<'a> {
    pub fn origin(&self) -> Position {
        match self {
            Widget::Key(key) => key.origin,
            Widget::Lamp(lamp) => lamp.origin,
            Widget::Rotor(rotor) => rotor.origin,
        }
    }

    pub fn base(&self) -> &'a Shape {
        match self {
            Widget::Key(key) => &key.base,
            Widget::Lamp(lamp) => &lamp.base,
            Widget::Rotor(rotor) => &rotor.base,
        }
    }

    pub fn label(&self) -> &'a Label {
        match self {
            Widget::Key(key) => &key.label,
            Widget::Lamp(lamp) => &lamp.label,
            Widget::Rotor(rotor) => &rotor.label,
        }
    }
}
