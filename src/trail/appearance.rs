use crate::constants::GLYPH_OPACITY_TRANSITION;
use crate::trail::particle::Particle;
use glam::Vec2;

/// Canvas transform for one sprite: translate, then scale, then rotate (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteTransform {
    pub translate: Vec2,
    pub scale: f32,
    pub rotation: f32,
}

/// Inline style for a glyph node whose box is centred on the particle.
///
/// Opacity follows the normalized life span; the node never takes pointer input.
pub fn glyph_css<T>(particle: &Particle<T>, size: f32, color: &str) -> String {
    let half = size / 2.0;
    format!(
        "position:absolute;top:{:.2}px;left:{:.2}px;font-size:{}px;color:{};transform:scale({:.3});opacity:{:.3};pointer-events:none;transition:{};",
        particle.position.y - half,
        particle.position.x - half,
        size,
        color,
        particle.scale,
        particle.life_span.clamp(0.0, 1.0),
        GLYPH_OPACITY_TRANSITION,
    )
}
