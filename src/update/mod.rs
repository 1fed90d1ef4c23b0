//! Decoders for the two exchange messages the book consumes.

use serde_json::Value;

use crate::{book::Book, error::BookError};

pub mod depth;
pub mod ticker;

pub use depth::*;
pub use ticker::*;

/// Either kind of message, as read off a mixed stream
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    Depth(DepthUpdate),
    Ticker(BookTickerUpdate),
}

impl Update {
    /// Decodes a message, telling depth snapshots (`lastUpdateId`) apart
    /// from ticker updates (`u`).
    pub fn from_json(text: &str) -> Result<Self, BookError> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            BookError::InvalidArgument(format!("Invalid update JSON: {e}"))
        })?;

        if value.get("lastUpdateId").is_some() {
            DepthUpdate::from_value(value).map(Self::Depth)
        } else if value.get("u").is_some() {
            BookTickerUpdate::from_value(value).map(Self::Ticker)
        } else {
            Err(BookError::InvalidArgument(
                "Unrecognised update message: expected `lastUpdateId` or `u`"
                    .to_string(),
            ))
        }
    }

    pub fn apply<B>(&self, book: &mut B) -> Result<(), BookError>
    where
        B: Book<Error = BookError>,
    {
        match self {
            Self::Depth(update) => {
                book.update_depth(update);
                Ok(())
            }
            Self::Ticker(update) => book.update_book_ticker(update),
        }
    }
}

/// Exchange decimals arrive as strings, e.g. `"25.35190000"`.
pub(crate) fn parse_decimal(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| format!("{text:?} is not a decimal: {e}"))
}
