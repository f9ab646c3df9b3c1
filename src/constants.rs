// Simulation cadence and per-model tuning constants.
//
// Values callers may override live in the option structs (`trail::config`);
// the fixed physics of each trail model lives here.

// Nominal tick period for timer-driven effects (≈60 ticks per second)
pub const TICK_INTERVAL_MS: i32 = 16;

// Fade model
pub const FADE_INITIAL_LIFE: f32 = 1.0;
pub const FADE_DECELERATION: f32 = 0.99; // velocity multiplier per tick
pub const FADE_EXPIRY_THRESHOLD: f32 = 0.01; // life at or below this is removed
pub const FADE_SCALE_MIN: f32 = 0.5;
pub const FADE_SCALE_MAX: f32 = 1.0;

// Countdown models share the frame-count life span
pub const COUNTDOWN_LIFE_MIN: u32 = 80;
pub const COUNTDOWN_LIFE_MAX: u32 = 140; // exclusive

// Snowfall drift
pub const SNOW_DRIFT_X_MAX: f32 = 0.5;
pub const SNOW_FALL_Y_MIN: f32 = 1.0;
pub const SNOW_FALL_Y_SPAN: f32 = 1.0;
pub const SNOW_SWAY_X: f32 = 2.0 / 75.0;
pub const SNOW_LIFT_Y_DIVISOR: f32 = 300.0;

// Character scatter
pub const CHAR_LAUNCH_SPEED_MAX: f32 = 5.0;
pub const CHAR_SWAY_X: f32 = 1.0 / 30.0;
pub const CHAR_SWAY_Y: f32 = 1.0 / 15.0;
pub const CHAR_SCALE_GAIN: f32 = 2.0; // characters start at twice their glyph size
pub const CHAR_SPIN_DIVISOR: f32 = 5.0; // degrees of rotation per remaining tick

// Overlay styling
pub const OVERLAY_Z_INDEX: &str = "9999";
pub const GLYPH_OPACITY_TRANSITION: &str = "opacity 0.1s ease-out";

// Media query for the host's reduced-motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
