use crate::domain::control::{ALPHABET_LEN, HitTarget, Letter};
use crate::domain::core::{HitRegion, Position};
use thiserror::Error;

/// Key anchors in alphabet order (A..Z) for the stock machine
const STANDARD_KEYS: [(f32, f32); ALPHABET_LEN] = [
    (140.0, 566.0), // A
    (471.0, 640.0), // B
    (319.0, 639.0), // C
    (294.0, 567.0), // D
    (268.0, 495.0), // E
    (371.0, 567.0), // F
    (448.0, 567.0), // G
    (523.0, 567.0), // H
    (650.0, 496.0), // I
    (598.0, 567.0), // J
    (674.0, 567.0), // K
    (699.0, 641.0), // L
    (624.0, 641.0), // M
    (547.0, 640.0), // N
    (725.0, 497.0), // O
    (92.0, 639.0),  // P
    (115.0, 494.0), // Q
    (345.0, 495.0), // R
    (217.0, 566.0), // S
    (420.0, 496.0), // T
    (574.0, 496.0), // U
    (395.0, 639.0), // V
    (192.0, 494.0), // W
    (242.0, 639.0), // X
    (168.0, 639.0), // Y
    (497.0, 496.0), // Z
];

/// Lamp anchors in alphabet order (A..Z) for the stock machine
const STANDARD_LAMPS: [(f32, f32); ALPHABET_LEN] = [
    (144.0, 332.0), // A
    (472.0, 403.0), // B
    (321.0, 402.0), // C
    (296.0, 333.0), // D
    (272.0, 265.0), // E
    (372.0, 333.0), // F
    (448.0, 334.0), // G
    (524.0, 334.0), // H
    (650.0, 266.0), // I
    (600.0, 335.0), // J
    (676.0, 335.0), // K
    (700.0, 403.0), // L
    (624.0, 403.0), // M
    (549.0, 403.0), // N
    (725.0, 267.0), // O
    (94.0, 401.0),  // P
    (121.0, 264.0), // Q
    (347.0, 265.0), // R
    (220.0, 332.0), // S
    (423.0, 265.0), // T
    (574.0, 266.0), // U
    (397.0, 402.0), // V
    (197.0, 264.0), // W
    (246.0, 402.0), // X
    (170.0, 401.0), // Y
    (499.0, 265.0), // Z
];

/// Rotor window anchors, left to right
const STANDARD_ROTORS: [(f32, f32); 3] = [(244.0, 94.0), (329.0, 94.0), (412.0, 94.0)];

/// Raw layout description before validation
///
/// Plain data so alternate layouts can be assembled in tests or by an
/// embedding application. Turn it into a [`GeometryTable`] with
/// [`GeometryTable::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub window_width: u32,
    pub window_height: u32,
    pub keys: [Position; ALPHABET_LEN],
    pub lamps: [Position; ALPHABET_LEN],
    pub rotors: Vec<Position>,
    pub key_radius: f32,
    pub lamp_radius: f32,
    pub rotor_frame_width: f32,
    pub rotor_frame_height: f32,
}

impl LayoutSpec {
    pub const WINDOW_WIDTH: u32 = 818;
    pub const WINDOW_HEIGHT: u32 = 694;
    pub const KEY_RADIUS: f32 = 24.0;
    pub const LAMP_RADIUS: f32 = 23.0;
    pub const ROTOR_FRAME_WIDTH: f32 = 40.0;
    pub const ROTOR_FRAME_HEIGHT: f32 = 100.0;

    /// The stock three-rotor machine layout
    pub fn standard() -> Self {
        Self {
            window_width: Self::WINDOW_WIDTH,
            window_height: Self::WINDOW_HEIGHT,
            keys: STANDARD_KEYS.map(|(x, y)| Position::new(x, y)),
            lamps: STANDARD_LAMPS.map(|(x, y)| Position::new(x, y)),
            rotors: STANDARD_ROTORS
                .iter()
                .map(|&(x, y)| Position::new(x, y))
                .collect(),
            key_radius: Self::KEY_RADIUS,
            lamp_radius: Self::LAMP_RADIUS,
            rotor_frame_width: Self::ROTOR_FRAME_WIDTH,
            rotor_frame_height: Self::ROTOR_FRAME_HEIGHT,
        }
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Layout must define at least one rotor")]
    NoRotors,
    #[error("Window size {width}x{height} is empty")]
    EmptyWindow { width: u32, height: u32 },
    #[error("Dimension '{name}' must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("{control} at ({x}, {y}) lies outside the {width}x{height} window")]
    OutOfWindow {
        control: String,
        x: f32,
        y: f32,
        width: u32,
        height: u32,
    },
    #[error("Hit regions of {first} and {second} overlap")]
    OverlappingRegions { first: String, second: String },
}

/// Immutable lookup from control identity to screen geometry
///
/// Every letter has exactly one key anchor and one lamp anchor; every
/// rotor slot `0..rotor_count()` has exactly one window anchor. The table
/// is validated once at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryTable {
    spec: LayoutSpec,
}

impl GeometryTable {
    /// Validates a layout and freezes it into a table
    ///
    /// Rejects empty windows, non-positive sizes, anchors whose region
    /// leaves the window, and any overlap between interactive regions, so
    /// that hit-testing can never match more than one control.
    pub fn new(spec: LayoutSpec) -> Result<Self, LayoutError> {
        if spec.window_width == 0 || spec.window_height == 0 {
            return Err(LayoutError::EmptyWindow {
                width: spec.window_width,
                height: spec.window_height,
            });
        }
        if spec.rotors.is_empty() {
            return Err(LayoutError::NoRotors);
        }

        for (name, value) in [
            ("key_radius", spec.key_radius),
            ("lamp_radius", spec.lamp_radius),
            ("rotor_frame_width", spec.rotor_frame_width),
            ("rotor_frame_height", spec.rotor_frame_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimension { name, value });
            }
        }

        let table = Self { spec };

        let key_radius = table.key_radius();
        let lamp_radius = table.lamp_radius();
        for letter in Letter::ALL {
            let key = table.key_position(letter);
            table.check_inside(format!("key {letter}"), key, key_radius, key_radius)?;
            let lamp = table.lamp_position(letter);
            table.check_inside(format!("lamp {letter}"), lamp, lamp_radius, lamp_radius)?;
        }
        let (half_width, half_height) = table.rotor_half_extent();
        for (index, &anchor) in table.spec.rotors.iter().enumerate() {
            table.check_inside(format!("rotor {index}"), anchor, half_width, half_height)?;
        }

        let regions: Vec<(String, HitRegion)> = Letter::ALL
            .iter()
            .map(|&letter| (format!("key {letter}"), table.key_region(letter)))
            .chain((0..table.rotor_count()).filter_map(|index| {
                table
                    .rotor_region(index)
                    .map(|region| (format!("rotor {index}"), region))
            }))
            .collect();

        for (i, (first, a)) in regions.iter().enumerate() {
            for (second, b) in &regions[i + 1..] {
                if a.overlaps(b) {
                    return Err(LayoutError::OverlappingRegions {
                        first: first.clone(),
                        second: second.clone(),
                    });
                }
            }
        }

        Ok(table)
    }

    /// The stock layout, equal to `GeometryTable::new(LayoutSpec::standard())`
    pub fn standard() -> Self {
        Self {
            spec: LayoutSpec::standard(),
        }
    }

    fn check_inside(
        &self,
        control: String,
        anchor: Position,
        half_width: f32,
        half_height: f32,
    ) -> Result<(), LayoutError> {
        let (width, height) = self.window_size();
        let inside = anchor.is_finite()
            && anchor.x - half_width >= 0.0
            && anchor.y - half_height >= 0.0
            && anchor.x + half_width <= width as f32
            && anchor.y + half_height <= height as f32;
        if inside {
            Ok(())
        } else {
            Err(LayoutError::OutOfWindow {
                control,
                x: anchor.x,
                y: anchor.y,
                width,
                height,
            })
        }
    }

    /// Window size as (width, height)
    pub fn window_size(&self) -> (u32, u32) {
        (self.spec.window_width, self.spec.window_height)
    }

    /// Number of rotor windows
    pub fn rotor_count(&self) -> usize {
        self.spec.rotors.len()
    }

    pub fn key_radius(&self) -> f32 {
        self.spec.key_radius
    }

    pub fn lamp_radius(&self) -> f32 {
        self.spec.lamp_radius
    }

    /// Half width and half height of a rotor click zone
    pub fn rotor_half_extent(&self) -> (f32, f32) {
        (self.spec.rotor_frame_width / 2.0, self.spec.rotor_frame_height / 2.0)
    }

    /// Anchor of the key for a letter
    pub fn key_position(&self, letter: Letter) -> Position {
        self.spec.keys[letter.index()]
    }

    /// Anchor of the lamp for a letter
    pub fn lamp_position(&self, letter: Letter) -> Position {
        self.spec.lamps[letter.index()]
    }

    /// Anchor of a rotor window, or None past the last slot
    pub fn rotor_position(&self, index: usize) -> Option<Position> {
        self.spec.rotors.get(index).copied()
    }

    /// Circular hit region of a key
    pub fn key_region(&self, letter: Letter) -> HitRegion {
        HitRegion::Circle {
            center: self.key_position(letter),
            radius: self.spec.key_radius,
        }
    }

    /// Rectangular click zone of a rotor, or None past the last slot
    pub fn rotor_region(&self, index: usize) -> Option<HitRegion> {
        let (half_width, half_height) = self.rotor_half_extent();
        self.rotor_position(index).map(|center| HitRegion::Frame {
            center,
            half_width,
            half_height,
        })
    }

    /// First key, in alphabet order, whose circle contains the point
    pub fn find_key(&self, point: Position) -> Option<Letter> {
        Letter::ALL
            .into_iter()
            .find(|&letter| self.key_region(letter).contains(point))
    }

    /// First rotor, in slot order, whose click zone strictly contains the point
    pub fn find_rotor(&self, point: Position) -> Option<usize> {
        (0..self.rotor_count()).find(|&index| {
            self.rotor_region(index)
                .is_some_and(|region| region.contains(point))
        })
    }

    /// Resolves a point to at most one control
    ///
    /// Keys are scanned before rotors, so a key wins if both could match.
    pub fn resolve(&self, point: Position) -> Option<HitTarget> {
        self.find_key(point)
            .map(HitTarget::Key)
            .or_else(|| self.find_rotor(point).map(HitTarget::Rotor))
    }
}

impl Default for GeometryTable {
    fn default() -> Self {
        Self::standard()
    }
}
