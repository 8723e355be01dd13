use tiny_skia::Color;

/// Opaque 8-bit RGB color usable in constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_color(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

/// Look of a keyboard key
#[derive(Debug, Clone, PartialEq)]
pub struct KeyStyle {
    pub border_width: f32,
    pub border_color: Rgb,
    pub face_color: Rgb,
    pub up_color: Rgb,
    pub down_color: Rgb,
    pub font_px: f32,
    /// Offset from the key center down to the label baseline
    pub label_dy: f32,
}

/// Look of a lampboard lamp
#[derive(Debug, Clone, PartialEq)]
pub struct LampStyle {
    pub border_width: f32,
    pub border_color: Rgb,
    pub face_color: Rgb,
    pub off_color: Rgb,
    pub on_color: Rgb,
    pub font_px: f32,
    pub label_dy: f32,
}

/// Look of a rotor setting window
#[derive(Debug, Clone, PartialEq)]
pub struct RotorStyle {
    pub width: f32,
    pub height: f32,
    pub face_color: Rgb,
    pub text_color: Rgb,
    pub font_px: f32,
    pub label_dy: f32,
    /// Letter shown before the first synchronization with the model
    pub initial_letter: char,
}

/// Complete visual style for the machine display
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub key: KeyStyle,
    pub lamp: LampStyle,
    pub rotor: RotorStyle,
    /// Canvas fill used when no background image is loaded
    pub backdrop: Rgb,
}

impl Default for KeyStyle {
    fn default() -> Self {
        Self {
            border_width: 3.0,
            border_color: Rgb::hex(0xCCCCCC),
            face_color: Rgb::hex(0x666666),
            up_color: Rgb::hex(0xCCCCCC),
            down_color: Rgb::hex(0xCC3333),
            font_px: 28.0,
            label_dy: 10.0,
        }
    }
}

impl Default for LampStyle {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_color: Rgb::hex(0x111111),
            face_color: Rgb::hex(0x333333),
            off_color: Rgb::hex(0x666666),
            on_color: Rgb::hex(0xFFFF99),
            font_px: 24.0,
            label_dy: 9.0,
        }
    }
}

impl Default for RotorStyle {
    fn default() -> Self {
        Self {
            width: 24.0,
            height: 26.0,
            face_color: Rgb::hex(0xBBAA77),
            text_color: Rgb::BLACK,
            font_px: 24.0,
            label_dy: 9.0,
            initial_letter: 'A',
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            key: KeyStyle::default(),
            lamp: LampStyle::default(),
            rotor: RotorStyle::default(),
            backdrop: Rgb::hex(0x1A1A1A),
        }
    }
}
