use crate::constants::{COUNTDOWN_LIFE_MAX, COUNTDOWN_LIFE_MIN, FADE_EXPIRY_THRESHOLD};
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{0}` must contain at least one entry")]
    EmptySet(&'static str),
    #[error("fadeSpeed must lie strictly between 0 and 1, got {0}")]
    FadeSpeed(f32),
    #[error("expiryThreshold must lie in [0, 1), got {0}")]
    ExpiryThreshold(f32),
    #[error("initialVelocity needs 0 <= min <= max, got min={min} max={max}")]
    VelocityRange { min: f32, max: f32 },
    #[error("lifeSpan needs min < max, got min={min} max={max}")]
    LifeSpanRange { min: u32, max: u32 },
    #[error("particleSize must be positive, got {0}")]
    ParticleSize(f32),
    #[error("`{field}` must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("invalid options: {0}")]
    Options(String),
}

/// Per-axis launch speed range; the sign of each axis is flipped independently.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VelocityRange {
    pub min: f32,
    pub max: f32,
}

impl VelocityRange {
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen::<f32>() * (self.max - self.min) + self.min
    }

    fn validate(&self) -> Result<(), ConfigError> {
        finite("initialVelocity.min", self.min)?;
        finite("initialVelocity.max", self.max)?;
        if self.min < 0.0 || self.min > self.max {
            return Err(ConfigError::VelocityRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Integer frame-count life span, `min` inclusive and `max` exclusive.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LifeSpanRange {
    pub min: u32,
    pub max: u32,
}

impl Default for LifeSpanRange {
    fn default() -> Self {
        Self {
            min: COUNTDOWN_LIFE_MIN,
            max: COUNTDOWN_LIFE_MAX,
        }
    }
}

impl LifeSpanRange {
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.min..self.max) as f32
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::LifeSpanRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CursorOffset {
    pub x: f32,
    pub y: f32,
}

/// Options for the DOM-node fairy dust trail.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FairyDustConfig {
    pub colors: Vec<String>,
    pub character_set: Vec<String>,
    pub particle_size: f32,
    pub particle_count: usize,
    pub gravity: f32,
    pub fade_speed: f32,
    pub initial_velocity: VelocityRange,
    pub expiry_threshold: f32,
}

impl Default for FairyDustConfig {
    fn default() -> Self {
        Self {
            colors: strings(&["#D61C59", "#E7D84B", "#1B8798"]),
            character_set: strings(&["✨", "⭐", "🌟", "★", "*"]),
            particle_size: 21.0,
            particle_count: 5,
            gravity: 0.02,
            fade_speed: 0.98,
            initial_velocity: VelocityRange { min: 0.5, max: 1.5 },
            expiry_threshold: FADE_EXPIRY_THRESHOLD,
        }
    }
}

impl FairyDustConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("colors", &self.colors)?;
        non_empty("characterSet", &self.character_set)?;
        finite("particleSize", self.particle_size)?;
        if self.particle_size <= 0.0 {
            return Err(ConfigError::ParticleSize(self.particle_size));
        }
        finite("gravity", self.gravity)?;
        finite("fadeSpeed", self.fade_speed)?;
        if self.fade_speed <= 0.0 || self.fade_speed >= 1.0 {
            return Err(ConfigError::FadeSpeed(self.fade_speed));
        }
        finite("expiryThreshold", self.expiry_threshold)?;
        if !(0.0..1.0).contains(&self.expiry_threshold) {
            return Err(ConfigError::ExpiryThreshold(self.expiry_threshold));
        }
        self.initial_velocity.validate()
    }
}

/// Options for the canvas snowflake trail.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SnowflakeConfig {
    pub emoji: Vec<String>,
    pub font: String,
    pub particle_count: usize,
    pub life_span: LifeSpanRange,
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            emoji: strings(&["❄️"]),
            font: "12px serif".to_string(),
            particle_count: 1,
            life_span: LifeSpanRange::default(),
        }
    }
}

impl SnowflakeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("emoji", &self.emoji)?;
        self.life_span.validate()
    }
}

/// Options for the canvas character trail.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CharacterConfig {
    pub characters: Vec<String>,
    pub colors: Vec<String>,
    pub font: String,
    pub cursor_offset: CursorOffset,
    pub particle_count: usize,
    pub life_span: LifeSpanRange,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            characters: strings(&["h", "e", "l", "l", "o"]),
            colors: strings(&["#6622CC", "#A755C2", "#B07C9E", "#B59194", "#D2A1B8"]),
            font: "15px serif".to_string(),
            cursor_offset: CursorOffset::default(),
            particle_count: 1,
            life_span: LifeSpanRange::default(),
        }
    }
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("characters", &self.characters)?;
        non_empty("colors", &self.colors)?;
        finite("cursorOffset.x", self.cursor_offset.x)?;
        finite("cursorOffset.y", self.cursor_offset.y)?;
        self.life_span.validate()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn non_empty(field: &'static str, items: &[String]) -> Result<(), ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::EmptySet(field));
    }
    Ok(())
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    Ok(())
}
