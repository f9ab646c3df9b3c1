use crate::dom;
use crate::trail::{glyph_css, FairyDust, ParticleField};
use web_sys as web;

/// One absolutely positioned node per particle inside a passive layer.
///
/// Nodes are discarded and recreated on every draw.
pub struct GlyphOverlay {
    document: web::Document,
    root: web::HtmlElement,
}

impl GlyphOverlay {
    pub fn attach(
        document: &web::Document,
        host: &web::HtmlElement,
        page_wide: bool,
    ) -> anyhow::Result<Self> {
        let root: web::HtmlElement = dom::create_element(document, "div")?;
        dom::style_passive_layer(&root, page_wide);
        _ = root.set_attribute("aria-hidden", "true");
        host.append_child(&root)
            .map_err(|e| anyhow::anyhow!("attach overlay failed: {:?}", e))?;
        Ok(Self {
            document: document.clone(),
            root,
        })
    }

    pub fn draw(&self, field: &ParticleField<FairyDust>) {
        self.root.set_text_content(None);
        let model = field.model();
        let size = model.config().particle_size;
        for p in field.particles() {
            let span: web::HtmlElement = match dom::create_element(&self.document, "span") {
                Ok(s) => s,
                Err(e) => {
                    log::debug!("[fairy-dust] glyph node skipped: {:?}", e);
                    continue;
                }
            };
            _ = span.set_attribute("style", &glyph_css(p, size, model.color(p.token)));
            span.set_text_content(Some(model.character(p.token)));
            _ = self.root.append_child(&span);
        }
    }
}

impl Drop for GlyphOverlay {
    fn drop(&mut self) {
        self.root.remove();
    }
}
