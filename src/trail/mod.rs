pub mod appearance;
pub mod characters;
pub mod config;
pub mod fairy_dust;
pub mod field;
pub mod lifecycle;
pub mod model;
pub mod pacing;
pub mod particle;
pub mod snowfall;

pub use appearance::*;
pub use characters::CharacterTrail;
pub use config::*;
pub use fairy_dust::{FairyDust, Glyph};
pub use field::ParticleField;
pub use lifecycle::*;
pub use model::{SpriteModel, TrailModel};
pub use pacing::FramePacer;
pub use particle::Particle;
pub use snowfall::Snowfall;
