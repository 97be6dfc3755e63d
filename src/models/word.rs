//! Word helpers: display spelling and wire spelling of a vocabulary token.

/// Vocabulary token whose display form differs from its wire form.
pub const HOW_ARE_YOU: &str = "howareyou";

/// Display spelling of a word coming from the device log.
pub fn display_word(word: &str) -> &str {
    if word == HOW_ARE_YOU {
        "how-are-you"
    } else {
        word
    }
}

/// Spelling sent to the device: every hyphen removed.
pub fn wire_word(word: &str) -> String {
    word.replace('-', "")
}
