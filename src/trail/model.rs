use crate::trail::appearance::SpriteTransform;
use crate::trail::particle::Particle;
use glam::Vec2;
use rand::Rng;

/// Spawn and per-tick rules for one flavor of trail.
///
/// A model never mixes decay rules: the fade model multiplies its life span
/// down, the countdown models subtract one frame per tick.
pub trait TrailModel {
    type Token: Copy;

    /// Particles spawned per pointer-move event.
    fn burst(&self) -> usize;

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, at: Vec2) -> Particle<Self::Token>;

    /// Advance `particle` by one tick. Returns `false` once it has expired.
    fn step<R: Rng + ?Sized>(&self, rng: &mut R, particle: &mut Particle<Self::Token>) -> bool;
}

/// Models drawn as pre-rendered sprites on a canvas.
pub trait SpriteModel: TrailModel<Token = usize> {
    /// Glyph text and optional fill color for each sprite index.
    fn sprite_glyphs(&self) -> Vec<(String, Option<String>)>;

    fn sprite_font(&self) -> &str;

    fn sprite_transform(&self, particle: &Particle<usize>) -> SpriteTransform;
}

/// +1 or -1 with equal probability.
#[inline]
pub fn coin_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Uniform index into a non-empty set.
#[inline]
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    if len <= 1 {
        0
    } else {
        rng.gen_range(0..len)
    }
}
