use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    common::{Price, Quantity},
    error::BookError,
};

use super::parse_decimal;

/// Best bid and best ask for one symbol
#[derive(Arbitrary, Clone, Debug, Default, PartialEq, Serialize)]
pub struct BookTickerUpdate {
    /// Carried through for diagnostics only, never used for sequencing
    pub update_id: u64,
    pub symbol: String,
    pub best_bid_price: Price,
    pub best_bid_qty: Quantity,
    pub best_ask_price: Price,
    pub best_ask_qty: Quantity,
}

#[derive(Debug, Deserialize)]
struct BookTickerUpdateRaw {
    #[serde(rename = "u")]
    update_id: u64,
    #[serde(rename = "s")]
    symbol: String,
    #[serde(rename = "b")]
    best_bid_price: String,
    #[serde(rename = "B")]
    best_bid_qty: String,
    #[serde(rename = "a")]
    best_ask_price: String,
    #[serde(rename = "A")]
    best_ask_qty: String,
}

impl BookTickerUpdate {
    pub fn from_json(text: &str) -> Result<Self, BookError> {
        serde_json::from_str::<Value>(text)
            .map_err(failure)
            .and_then(Self::from_value)
    }

    pub fn from_value(value: Value) -> Result<Self, BookError> {
        let raw: BookTickerUpdateRaw =
            serde_json::from_value(value).map_err(failure)?;

        Ok(Self {
            update_id: raw.update_id,
            symbol: raw.symbol,
            best_bid_price: parse_decimal(&raw.best_bid_price).map_err(failure)?,
            best_bid_qty: parse_decimal(&raw.best_bid_qty).map_err(failure)?,
            best_ask_price: parse_decimal(&raw.best_ask_price).map_err(failure)?,
            best_ask_qty: parse_decimal(&raw.best_ask_qty).map_err(failure)?,
        })
    }
}

fn failure(cause: impl std::fmt::Display) -> BookError {
    BookError::RuntimeFailure(format!(
        "Failed to parse BookTickerUpdate JSON: {cause}"
    ))
}
