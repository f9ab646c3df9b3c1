use crate::constants::{FADE_DECELERATION, FADE_INITIAL_LIFE, FADE_SCALE_MAX, FADE_SCALE_MIN};
use crate::trail::config::{ConfigError, FairyDustConfig};
use crate::trail::model::{coin_sign, pick_index, TrailModel};
use crate::trail::particle::Particle;
use glam::Vec2;
use rand::Rng;

/// Indices into the configured character and color sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub character: usize,
    pub color: usize,
}

/// Fade model: life decays multiplicatively, motion decelerates under gravity.
#[derive(Clone, Debug)]
pub struct FairyDust {
    config: FairyDustConfig,
}

impl FairyDust {
    pub fn new(config: FairyDustConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FairyDustConfig {
        &self.config
    }

    pub fn character(&self, glyph: Glyph) -> &str {
        self.config
            .character_set
            .get(glyph.character)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn color(&self, glyph: Glyph) -> &str {
        self.config
            .colors
            .get(glyph.color)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl TrailModel for FairyDust {
    type Token = Glyph;

    fn burst(&self) -> usize {
        self.config.particle_count
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, at: Vec2) -> Particle<Glyph> {
        let glyph = Glyph {
            character: pick_index(rng, self.config.character_set.len()),
            color: pick_index(rng, self.config.colors.len()),
        };
        let range = self.config.initial_velocity;
        let vx = range.sample(rng) * coin_sign(rng);
        let vy = range.sample(rng) * coin_sign(rng);
        let scale = FADE_SCALE_MIN + rng.gen::<f32>() * (FADE_SCALE_MAX - FADE_SCALE_MIN);
        Particle::new(at, Vec2::new(vx, vy), glyph, FADE_INITIAL_LIFE, scale)
    }

    fn step<R: Rng + ?Sized>(&self, _rng: &mut R, p: &mut Particle<Glyph>) -> bool {
        let life = p.life_span * self.config.fade_speed;
        if life <= self.config.expiry_threshold {
            return false;
        }
        p.position.x += p.velocity.x;
        p.position.y += p.velocity.y + self.config.gravity;
        p.life_span = life;
        p.velocity *= FADE_DECELERATION;
        p.age += 1;
        true
    }
}
