mod character;
mod fairy_dust;
mod snowflake;
mod sprite_trail;

pub use character::CharacterCursor;
pub use fairy_dust::FairyDustCursor;
pub use snowflake::SnowflakeCursor;
