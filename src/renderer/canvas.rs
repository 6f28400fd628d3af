//! HTML canvas 2D backend (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette::to_css;
use super::shapes::DrawCommand;

/// Rasterizes draw commands onto a canvas, scaling field units to pixels
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the canvas' 2D context; `None` if the browser refuses one
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())?;
        Some(Self { canvas, ctx })
    }

    /// Draw a frame whose coordinates span `field_width` x `field_height`
    pub fn draw(&self, commands: &[DrawCommand], field_width: f32, field_height: f32) {
        let ctx = &self.ctx;
        let sx = self.canvas.width() as f64 / field_width as f64;
        let sy = self.canvas.height() as f64 / field_height as f64;
        let _ = ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);

        for command in commands {
            match command {
                DrawCommand::Clear { color } => {
                    ctx.set_fill_style_str(&to_css(*color));
                    ctx.fill_rect(0.0, 0.0, field_width as f64, field_height as f64);
                }
                DrawCommand::Rect { min, size, color } => {
                    ctx.set_fill_style_str(&to_css(*color));
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&to_css(*color));
                    ctx.begin_path();
                    let _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    ctx.fill();
                }
                DrawCommand::Ellipse {
                    center,
                    radii,
                    color,
                } => {
                    ctx.set_fill_style_str(&to_css(*color));
                    ctx.begin_path();
                    let _ = ctx.ellipse(
                        center.x as f64,
                        center.y as f64,
                        radii.x as f64,
                        radii.y as f64,
                        0.0,
                        0.0,
                        TAU,
                    );
                    ctx.fill();
                }
                DrawCommand::Polygon { points, color } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.set_fill_style_str(&to_css(*color));
                    ctx.begin_path();
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in rest {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                    ctx.close_path();
                    ctx.fill();
                }
                DrawCommand::Text {
                    pos,
                    text,
                    size,
                    color,
                } => {
                    ctx.set_font(&format!("{}px Arial", size.round() as i32));
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    ctx.set_fill_style_str(&to_css(*color));
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}
