//! Value objects - immutable types that represent domain concepts

mod emoji;
mod snowflake;

pub use emoji::{EmojiPolicy, PRESET_EMOJIS};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
