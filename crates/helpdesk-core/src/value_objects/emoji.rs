//! Preset emoji policy - the closed set of emoji accepted as reactions

use crate::error::DomainError;

/// The fixed set of emoji a reaction may use.
///
/// The set is closed on purpose: clients render a small picker and the
/// notification wording never has to describe an arbitrary emoji.
pub const PRESET_EMOJIS: [&str; 6] = ["👍", "👎", "❤️", "🎉", "😄", "👀"];

/// Validates candidate emoji against the preset set.
///
/// Stateless; exists as a type so the service layer has a single named
/// boundary where emoji validation happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiPolicy;

impl EmojiPolicy {
    /// Check that `emoji` is one of the preset reactions.
    ///
    /// Has no side effects: an invalid emoji leaves every store untouched.
    pub fn validate(emoji: &str) -> Result<(), DomainError> {
        if PRESET_EMOJIS.contains(&emoji) {
            Ok(())
        } else {
            Err(DomainError::InvalidEmoji(emoji.to_string()))
        }
    }

    /// Whether `emoji` belongs to the preset set.
    #[inline]
    pub fn is_preset(emoji: &str) -> bool {
        PRESET_EMOJIS.contains(&emoji)
    }
}
