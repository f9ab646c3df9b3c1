use crate::constants::{
    CHAR_LAUNCH_SPEED_MAX, CHAR_SCALE_GAIN, CHAR_SPIN_DIVISOR, CHAR_SWAY_X, CHAR_SWAY_Y,
};
use crate::trail::appearance::SpriteTransform;
use crate::trail::config::{CharacterConfig, ConfigError};
use crate::trail::model::{coin_sign, pick_index, SpriteModel, TrailModel};
use crate::trail::particle::Particle;
use glam::Vec2;
use rand::Rng;

/// Countdown model: characters scatter in all directions, spinning and shrinking.
#[derive(Clone, Debug)]
pub struct CharacterTrail {
    config: CharacterConfig,
}

impl CharacterTrail {
    pub fn new(config: CharacterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Fill color for the sprite at `index`; colors repeat when there are fewer than characters.
    pub fn sprite_color(&self, index: usize) -> &str {
        let colors = &self.config.colors;
        colors
            .get(index % colors.len().max(1))
            .map(String::as_str)
            .unwrap_or_default()
    }

    #[inline]
    fn remaining_fraction(p: &Particle<usize>) -> f32 {
        if p.initial_life_span > 0.0 {
            (p.initial_life_span - p.age as f32) / p.initial_life_span
        } else {
            0.0
        }
    }
}

impl TrailModel for CharacterTrail {
    type Token = usize;

    fn burst(&self) -> usize {
        self.config.particle_count
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, at: Vec2) -> Particle<usize> {
        let offset = Vec2::new(self.config.cursor_offset.x, self.config.cursor_offset.y);
        let sprite = pick_index(rng, self.config.characters.len());
        let vx = coin_sign(rng) * rng.gen::<f32>() * CHAR_LAUNCH_SPEED_MAX;
        let vy = coin_sign(rng) * rng.gen::<f32>() * CHAR_LAUNCH_SPEED_MAX;
        let life = self.config.life_span.sample(rng);
        let spin = coin_sign(rng);
        Particle::new(at + offset, Vec2::new(vx, vy), sprite, life, CHAR_SCALE_GAIN)
            .with_rotation_sign(spin)
    }

    fn step<R: Rng + ?Sized>(&self, rng: &mut R, p: &mut Particle<usize>) -> bool {
        p.position += p.velocity;
        p.life_span -= 1.0;
        p.age += 1;
        p.velocity.x += coin_sign(rng) * CHAR_SWAY_X;
        p.velocity.y += coin_sign(rng) * CHAR_SWAY_Y;
        p.scale = (Self::remaining_fraction(p) * CHAR_SCALE_GAIN).max(0.0);
        p.life_span >= 0.0
    }
}

impl SpriteModel for CharacterTrail {
    fn sprite_glyphs(&self) -> Vec<(String, Option<String>)> {
        self.config
            .characters
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), Some(self.sprite_color(i).to_string())))
            .collect()
    }

    fn sprite_font(&self) -> &str {
        &self.config.font
    }

    fn sprite_transform(&self, p: &Particle<usize>) -> SpriteTransform {
        let remaining_ticks = p.initial_life_span - p.age as f32;
        let degrees = p.rotation_sign * remaining_ticks / CHAR_SPIN_DIVISOR;
        SpriteTransform {
            translate: p.position,
            scale: (Self::remaining_fraction(p) * CHAR_SCALE_GAIN).max(0.0),
            rotation: degrees.to_radians(),
        }
    }
}
