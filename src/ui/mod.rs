pub mod assets;
pub mod renderer;
pub mod text;
pub mod widgets;

pub use assets::{AssetError, load_background};
pub use renderer::{RenderError, Scene, SceneRenderer};
pub use text::{ApproxMetrics, GlyphFont, TextMetrics};
pub use widgets::{Key, Label, Lamp, RotorWindow, Shape, Widget};
