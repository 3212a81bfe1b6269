//! Batch decoding: one HTTP body in, an ordered sequence of raw events out.

use thiserror::Error;

/// Separator between events inside a batch body.
pub const EVENT_DELIMITER: char = '\0';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// Declared content length was missing or not positive.
    #[error("No body (declared content length: {declared:?})")]
    MissingBody { declared: Option<i64> },
}

/// A decoded request body.
///
/// Invalid UTF-8 is replaced with U+FFFD instead of failing the batch.
#[derive(Debug, Clone)]
pub struct Batch {
    text: String,
}

impl Batch {
    /// Decode `body` given the length the client declared for it.
    ///
    /// A missing or non-positive declared length rejects the batch before
    /// any decoding happens.
    pub fn decode(body: &[u8], declared_length: Option<i64>) -> Result<Self, BatchError> {
        match declared_length {
            Some(len) if len > 0 => Ok(Self {
                text: String::from_utf8_lossy(body).into_owned(),
            }),
            declared => Err(BatchError::MissingBody { declared }),
        }
    }

    /// Raw events in original order, trimmed, with blank entries dropped.
    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        split_events(&self.text)
    }
}

/// Split `text` on [`EVENT_DELIMITER`], trimming each piece and skipping
/// pieces that are empty after trimming.
pub fn split_events(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(EVENT_DELIMITER)
        .map(str::trim)
        .filter(|event| !event.is_empty())
}
