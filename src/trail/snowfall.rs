use crate::constants::{
    SNOW_DRIFT_X_MAX, SNOW_FALL_Y_MIN, SNOW_FALL_Y_SPAN, SNOW_LIFT_Y_DIVISOR, SNOW_SWAY_X,
};
use crate::trail::appearance::SpriteTransform;
use crate::trail::config::{ConfigError, SnowflakeConfig};
use crate::trail::model::{coin_sign, pick_index, SpriteModel, TrailModel};
use crate::trail::particle::Particle;
use glam::Vec2;
use rand::Rng;

/// Countdown model: flakes fall, sway and shrink over a frame-count life span.
#[derive(Clone, Debug)]
pub struct Snowfall {
    config: SnowflakeConfig,
}

impl Snowfall {
    pub fn new(config: SnowflakeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }
}

impl TrailModel for Snowfall {
    type Token = usize;

    fn burst(&self) -> usize {
        self.config.particle_count
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, at: Vec2) -> Particle<usize> {
        let sprite = pick_index(rng, self.config.emoji.len());
        let vx = coin_sign(rng) * rng.gen::<f32>() * SNOW_DRIFT_X_MAX;
        let vy = SNOW_FALL_Y_MIN + rng.gen::<f32>() * SNOW_FALL_Y_SPAN;
        let life = self.config.life_span.sample(rng);
        Particle::new(at, Vec2::new(vx, vy), sprite, life, 1.0)
    }

    fn step<R: Rng + ?Sized>(&self, rng: &mut R, p: &mut Particle<usize>) -> bool {
        p.position += p.velocity;
        p.life_span -= 1.0;
        p.age += 1;
        p.velocity.x += coin_sign(rng) * SNOW_SWAY_X;
        p.velocity.y -= rng.gen::<f32>() / SNOW_LIFT_Y_DIVISOR;
        p.scale = p.life_fraction();
        p.life_span >= 0.0
    }
}

impl SpriteModel for Snowfall {
    fn sprite_glyphs(&self) -> Vec<(String, Option<String>)> {
        self.config.emoji.iter().map(|e| (e.clone(), None)).collect()
    }

    fn sprite_font(&self) -> &str {
        &self.config.font
    }

    fn sprite_transform(&self, p: &Particle<usize>) -> SpriteTransform {
        SpriteTransform {
            translate: p.position,
            scale: p.life_fraction(),
            rotation: 0.0,
        }
    }
}
