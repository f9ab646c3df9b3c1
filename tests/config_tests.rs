// Host-side tests for option parsing and validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod trail {
    pub mod appearance {
        include!("../src/trail/appearance.rs");
    }
    pub mod characters {
        include!("../src/trail/characters.rs");
    }
    pub mod config {
        include!("../src/trail/config.rs");
    }
    pub mod fairy_dust {
        include!("../src/trail/fairy_dust.rs");
    }
    pub mod field {
        include!("../src/trail/field.rs");
    }
    pub mod lifecycle {
        include!("../src/trail/lifecycle.rs");
    }
    pub mod model {
        include!("../src/trail/model.rs");
    }
    pub mod pacing {
        include!("../src/trail/pacing.rs");
    }
    pub mod particle {
        include!("../src/trail/particle.rs");
    }
    pub mod snowfall {
        include!("../src/trail/snowfall.rs");
    }
}

use trail::characters::CharacterTrail;
use trail::config::*;
use trail::fairy_dust::FairyDust;
use trail::snowfall::Snowfall;

#[test]
fn defaults_are_valid() {
    assert!(FairyDustConfig::default().validate().is_ok());
    assert!(SnowflakeConfig::default().validate().is_ok());
    assert!(CharacterConfig::default().validate().is_ok());
}

#[test]
fn fairy_dust_defaults_match_the_published_effect() {
    let c = FairyDustConfig::default();
    assert_eq!(c.colors, ["#D61C59", "#E7D84B", "#1B8798"]);
    assert_eq!(c.character_set.len(), 5);
    assert_eq!(c.particle_size, 21.0);
    assert_eq!(c.particle_count, 5);
    assert_eq!(c.gravity, 0.02);
    assert_eq!(c.fade_speed, 0.98);
    assert_eq!(c.initial_velocity, VelocityRange { min: 0.5, max: 1.5 });
}

#[test]
fn partial_options_fill_in_defaults() {
    let c: FairyDustConfig = serde_json::from_str(
        r##"{
            "colors": ["#FF0000", "#00FF00", "#0000FF"],
            "characterSet": ["✨", "⭐", "🌟"],
            "particleSize": 24,
            "particleCount": 2,
            "gravity": 0.015,
            "fadeSpeed": 0.97,
            "initialVelocity": { "min": 0.7, "max": 2.0 }
        }"##,
    )
    .expect("parse");
    assert_eq!(c.particle_count, 2);
    assert_eq!(c.particle_size, 24.0);
    assert_eq!(c.character_set, ["✨", "⭐", "🌟"]);
    assert_eq!(c.expiry_threshold, FairyDustConfig::default().expiry_threshold);
    assert!(c.validate().is_ok());

    let s: SnowflakeConfig = serde_json::from_str(r#"{ "particleCount": 3 }"#).expect("parse");
    assert_eq!(s.particle_count, 3);
    assert_eq!(s.emoji, ["❄️"]);
    assert_eq!(s.life_span, LifeSpanRange { min: 80, max: 140 });

    let ch: CharacterConfig = serde_json::from_str(
        r#"{ "characters": ["a", "b"], "font": "20px Arial", "cursorOffset": { "x": 3 } }"#,
    )
    .expect("parse");
    assert_eq!(ch.font, "20px Arial");
    assert_eq!(ch.cursor_offset, CursorOffset { x: 3.0, y: 0.0 });
    assert_eq!(ch.colors.len(), 5);
}

#[test]
fn unknown_option_keys_are_rejected() {
    let parsed = serde_json::from_str::<FairyDustConfig>(r#"{ "particleCont": 3 }"#);
    assert!(parsed.is_err());
}

#[test]
fn empty_sets_fail_at_construction() {
    let err = FairyDust::new(FairyDustConfig {
        character_set: vec![],
        ..FairyDustConfig::default()
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::EmptySet("characterSet"));

    let err = FairyDust::new(FairyDustConfig {
        colors: vec![],
        ..FairyDustConfig::default()
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::EmptySet("colors"));

    let err = Snowfall::new(SnowflakeConfig {
        emoji: vec![],
        ..SnowflakeConfig::default()
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::EmptySet("emoji"));

    let err = CharacterTrail::new(CharacterConfig {
        colors: vec![],
        ..CharacterConfig::default()
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::EmptySet("colors"));
}

#[test]
fn fade_speed_must_be_a_fraction() {
    for bad in [0.0_f32, 1.0, 1.5, -0.2] {
        let c = FairyDustConfig {
            fade_speed: bad,
            ..FairyDustConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::FadeSpeed(bad)));
    }
    let c = FairyDustConfig {
        fade_speed: f32::NAN,
        ..FairyDustConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NonFinite { field: "fadeSpeed", .. })
    ));
}

#[test]
fn numeric_ranges_are_checked() {
    let c = FairyDustConfig {
        initial_velocity: VelocityRange { min: 2.0, max: 1.0 },
        ..FairyDustConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::VelocityRange { min: 2.0, max: 1.0 })
    );

    let c = FairyDustConfig {
        particle_size: 0.0,
        ..FairyDustConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::ParticleSize(0.0)));

    let c = FairyDustConfig {
        expiry_threshold: 1.0,
        ..FairyDustConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::ExpiryThreshold(1.0)));

    let s = SnowflakeConfig {
        life_span: LifeSpanRange { min: 10, max: 10 },
        ..SnowflakeConfig::default()
    };
    assert_eq!(
        s.validate(),
        Err(ConfigError::LifeSpanRange { min: 10, max: 10 })
    );
}

#[test]
fn equal_velocity_bounds_are_allowed() {
    let model = FairyDust::new(FairyDustConfig {
        initial_velocity: VelocityRange { min: 1.0, max: 1.0 },
        ..FairyDustConfig::default()
    });
    assert!(model.is_ok());
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        ConfigError::EmptySet("colors").to_string(),
        "`colors` must contain at least one entry"
    );
    assert!(ConfigError::FadeSpeed(1.5).to_string().contains("1.5"));
}
