//! Scene rendering for the machine display
//!
//! Paints the background and every widget into a tiny-skia pixmap. The
//! scene description is assembled by the view, which keeps painting
//! separate from state handling and makes both testable on their own.

use tiny_skia::{
    FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Rect as SkiaRect, Stroke, Transform,
};
use tracing::debug;

use crate::config::style::Rgb;
use crate::domain::core::Position;
use crate::ui::text::GlyphFont;
use crate::ui::widgets::{Label, Shape, Widget};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to create {width}x{height} pixmap for rendering")]
    PixmapCreationFailed { width: u32, height: u32 },

    #[error("Invalid shape geometry at ({x}, {y})")]
    InvalidShape { x: f32, y: f32 },

    #[error("PNG encoding failed: {reason}")]
    EncodingFailed { reason: String },
}

/// Everything needed to paint one frame, in paint order
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    pub width: u32,
    pub height: u32,
    /// Canvas fill painted under the background image
    pub backdrop: Rgb,
    pub background: Option<&'a Pixmap>,
    /// Widgets from bottom to top
    pub widgets: Vec<Widget<'a>>,
}

/// Paints scenes with tiny-skia, rasterizing labels when a font is attached
#[derive(Debug, Default)]
pub struct SceneRenderer {
    font: Option<GlyphFont>,
}

impl SceneRenderer {
    /// Create a renderer that draws shapes only
    pub fn new() -> Self {
        Self { font: None }
    }

    /// Create a renderer that also draws labels with the given font
    pub fn with_font(font: GlyphFont) -> Self {
        Self { font: Some(font) }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Render a scene to a new pixmap of the scene's size
    pub fn render(&self, scene: &Scene<'_>) -> Result<Pixmap, RenderError> {
        let mut pixmap = Pixmap::new(scene.width, scene.height).ok_or(
            RenderError::PixmapCreationFailed {
                width: scene.width,
                height: scene.height,
            },
        )?;

        pixmap.fill(scene.backdrop.to_color());

        if let Some(background) = scene.background {
            pixmap.draw_pixmap(
                0,
                0,
                background.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }

        for widget in &scene.widgets {
            self.render_shape(&mut pixmap, widget.origin(), widget.base())?;
            self.render_label(&mut pixmap, widget.origin(), widget.label());
        }

        debug!(
            widgets = scene.widgets.len(),
            labels = self.has_font(),
            "Rendered scene"
        );

        Ok(pixmap)
    }

    /// Render a base shape centered on the widget origin
    fn render_shape(&self, pixmap: &mut Pixmap, origin: Position, shape: &Shape) -> Result<(), RenderError> {
        let invalid = RenderError::InvalidShape {
            x: origin.x,
            y: origin.y,
        };

        match *shape {
            Shape::Disc {
                radius,
                fill,
                border,
                border_width,
            } => {
                let path = PathBuilder::from_circle(origin.x, origin.y, radius).ok_or(invalid)?;

                pixmap.fill_path(&path, &solid(fill), FillRule::Winding, Transform::identity(), None);

                if border_width > 0.0 {
                    let stroke = Stroke {
                        width: border_width,
                        ..Stroke::default()
                    };
                    pixmap.stroke_path(&path, &solid(border), &stroke, Transform::identity(), None);
                }
            }
            Shape::Block {
                width,
                height,
                fill,
            } => {
                let rect = SkiaRect::from_xywh(
                    origin.x - width / 2.0,
                    origin.y - height / 2.0,
                    width,
                    height,
                )
                .ok_or(invalid)?;

                pixmap.fill_rect(rect, &solid(fill), Transform::identity(), None);
            }
        }

        Ok(())
    }

    /// Render a label if a font is attached
    fn render_label(&self, pixmap: &mut Pixmap, origin: Position, label: &Label) {
        if let Some(font) = &self.font {
            font.draw_text(
                pixmap,
                label.text(),
                label.px(),
                label.baseline_origin(origin),
                label.color(),
            );
        }
    }

    /// Convert pixmap to a PNG byte stream
    pub fn encode_png(&self, pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
        pixmap.encode_png().map_err(|e| RenderError::EncodingFailed {
            reason: e.to_string(),
        })
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_color());
    paint.anti_alias = true;
    paint
}
