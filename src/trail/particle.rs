use glam::Vec2;

/// One transient trail element.
///
/// `token` selects what is drawn (a glyph/color pair or a sprite index) and is
/// fixed at spawn, as are the initial velocity and the sampled scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle<T> {
    pub position: Vec2,
    pub velocity: Vec2,
    pub token: T,
    pub life_span: f32,
    pub initial_life_span: f32,
    pub scale: f32,
    pub rotation_sign: f32,
    pub age: u32,
}

impl<T> Particle<T> {
    pub fn new(position: Vec2, velocity: Vec2, token: T, life_span: f32, scale: f32) -> Self {
        Self {
            position,
            velocity,
            token,
            life_span,
            initial_life_span: life_span,
            scale,
            rotation_sign: 1.0,
            age: 0,
        }
    }

    pub fn with_rotation_sign(mut self, sign: f32) -> Self {
        self.rotation_sign = sign;
        self
    }

    /// Remaining life as a fraction of the initial value, floored at zero.
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        if self.initial_life_span > 0.0 {
            (self.life_span / self.initial_life_span).max(0.0)
        } else {
            0.0
        }
    }
}
