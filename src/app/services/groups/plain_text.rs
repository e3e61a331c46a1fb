//! Plain text fallback groups
//!
//! Any token no other recognizer accepts becomes plain text. This is not a
//! failure: remarks are mostly free-form, and unknown group kinds should
//! survive a parse rather than break it. Over-long tokens keep their first
//! fifteen characters.

use serde::Serialize;

use crate::constants::PLAIN_TEXT_MAX_LENGTH;

/// An unrecognized token, kept verbatim up to the length cap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlainTextGroup {
    text: String,
}

impl PlainTextGroup {
    pub fn new(token: &str) -> Self {
        let end = token
            .char_indices()
            .nth(PLAIN_TEXT_MAX_LENGTH)
            .map_or(token.len(), |(index, _)| index);
        Self {
            text: token[..end].to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_valid(&self) -> bool {
        !self.text.is_empty()
    }
}
