use crate::dom;
use crate::trail::{SpriteModel, SpriteTransform};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A persistent 2D canvas that is cleared and fully redrawn every tick.
pub struct SpriteCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    target: Option<web::HtmlElement>,
    sprites: Vec<web::HtmlCanvasElement>,
}

impl SpriteCanvas {
    /// Create the canvas inside `target` (or the body), sized to it (or the viewport).
    pub fn attach(
        document: &web::Document,
        target: Option<&web::HtmlElement>,
    ) -> anyhow::Result<Self> {
        let host = match target {
            Some(el) => el.clone(),
            None => dom::document_body(document)?,
        };
        let canvas: web::HtmlCanvasElement = dom::create_element(document, "canvas")?;
        let ctx = context_2d(&canvas)?;
        dom::style_passive_layer(&canvas, target.is_none());
        host.append_child(&canvas)
            .map_err(|e| anyhow!("attach canvas failed: {:?}", e))?;
        let surface = Self {
            canvas,
            ctx,
            target: target.cloned(),
            sprites: Vec::new(),
        };
        surface.resize();
        Ok(surface)
    }

    pub fn resize(&self) {
        dom::sync_canvas_size(&self.canvas, self.target.as_ref());
    }

    /// Pre-render every glyph the model can emit.
    pub fn load_sprites<M: SpriteModel>(
        &mut self,
        document: &web::Document,
        model: &M,
    ) -> anyhow::Result<()> {
        let font = model.sprite_font();
        self.ctx.set_font(font);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align("center");
        let sprites = model
            .sprite_glyphs()
            .iter()
            .map(|(glyph, color)| self.render_glyph(document, glyph, color.as_deref(), font))
            .collect::<anyhow::Result<Vec<_>>>()?;
        self.sprites = sprites;
        Ok(())
    }

    fn render_glyph(
        &self,
        document: &web::Document,
        glyph: &str,
        color: Option<&str>,
        font: &str,
    ) -> anyhow::Result<web::HtmlCanvasElement> {
        let metrics = self
            .ctx
            .measure_text(glyph)
            .map_err(|e| anyhow!("measureText failed: {:?}", e))?;
        let ascent = metrics.actual_bounding_box_ascent();
        let sprite: web::HtmlCanvasElement = dom::create_element(document, "canvas")?;
        sprite.set_width(metrics.width().ceil().max(1.0) as u32);
        sprite.set_height((ascent * 2.0).ceil().max(1.0) as u32);

        let sctx = context_2d(&sprite)?;
        sctx.set_text_align("center");
        sctx.set_font(font);
        sctx.set_text_baseline("middle");
        if let Some(color) = color {
            sctx.set_fill_style_str(color);
        }
        sctx.fill_text(glyph, sprite.width() as f64 / 2.0, ascent)
            .map_err(|e| anyhow!("fillText failed: {:?}", e))?;
        Ok(sprite)
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    pub fn draw(&self, sprite: usize, t: SpriteTransform) {
        let Some(image) = self.sprites.get(sprite) else {
            return;
        };
        self.ctx.save();
        _ = self.ctx.translate(t.translate.x as f64, t.translate.y as f64);
        _ = self.ctx.scale(t.scale as f64, t.scale as f64);
        if t.rotation != 0.0 {
            _ = self.ctx.rotate(t.rotation as f64);
        }
        _ = self.ctx.draw_image_with_html_canvas_element(
            image,
            -(image.width() as f64) / 2.0,
            -(image.height() as f64) / 2.0,
        );
        self.ctx.restore();
    }
}

impl Drop for SpriteCanvas {
    fn drop(&mut self) {
        self.canvas.remove();
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext(2d) failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected 2d context type: {:?}", e))
}
