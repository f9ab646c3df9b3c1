mod canvas;
mod overlay;

pub use canvas::SpriteCanvas;
pub use overlay::GlyphOverlay;
