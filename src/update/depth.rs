use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    common::{Price, Quantity},
    error::BookError,
};

use super::parse_decimal;

/// Depth snapshot (or partial snapshot) for one symbol. Every pair is an
/// absolute replacement of the level at that price.
#[derive(Arbitrary, Clone, Debug, Default, PartialEq, Serialize)]
pub struct DepthUpdate {
    pub last_update_id: u64,
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

/// Wire shape: `{"lastUpdateId": 160, "bids": [["25.00", "5"]], ...}`
#[derive(Debug, Deserialize)]
struct DepthUpdateRaw {
    #[serde(rename = "lastUpdateId")]
    last_update_id: u64,
    bids: Vec<Vec<Value>>,
    asks: Vec<Vec<Value>>,
}

impl DepthUpdate {
    pub fn from_json(text: &str) -> Result<Self, BookError> {
        serde_json::from_str::<Value>(text)
            .map_err(invalid)
            .and_then(Self::from_value)
    }

    pub fn from_value(value: Value) -> Result<Self, BookError> {
        let raw: DepthUpdateRaw = serde_json::from_value(value).map_err(invalid)?;

        Ok(Self {
            last_update_id: raw.last_update_id,
            bids: parse_levels(&raw.bids).map_err(invalid)?,
            asks: parse_levels(&raw.asks).map_err(invalid)?,
        })
    }
}

fn invalid(cause: impl std::fmt::Display) -> BookError {
    BookError::InvalidArgument(format!("Invalid DepthUpdate JSON: {cause}"))
}

/// Entries that are not exactly `[price, quantity]` are skipped.
fn parse_levels(entries: &[Vec<Value>]) -> Result<Vec<(Price, Quantity)>, String> {
    entries
        .iter()
        .filter(|entry| entry.len() == 2)
        .map(|entry| -> Result<(Price, Quantity), String> {
            Ok((parse_field(&entry[0])?, parse_field(&entry[1])?))
        })
        .collect()
}

fn parse_field(value: &Value) -> Result<f64, String> {
    match value.as_str() {
        Some(text) => parse_decimal(text),
        None => Err(format!("expected a decimal string, found {value}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_decode_snapshot() {
        let json = r#"{
            "lastUpdateId": 160,
            "bids": [
                ["0.0024", "10"],
                ["0.0023", "20"]
            ],
            "asks": [
                ["0.0026", "100"],
                ["0.0027", "200"]
            ]
        }"#;

        let update = DepthUpdate::from_json(json).unwrap();

        assert_eq!(update.last_update_id, 160);
        assert_eq!(update.bids, vec![(0.0024, 10.0), (0.0023, 20.0)]);
        assert_eq!(update.asks, vec![(0.0026, 100.0), (0.0027, 200.0)]);
    }

    #[test]
    fn test_short_and_long_pairs_are_skipped() {
        let json = r#"{
            "lastUpdateId": 7,
            "bids": [["100.0"], ["99.0", "1", "extra"], ["98.0", "2"]],
            "asks": [[]]
        }"#;

        let update = DepthUpdate::from_json(json).unwrap();

        assert_eq!(update.bids, vec![(98.0, 2.0)]);
        assert!(update.asks.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_kept_for_deletion() {
        let json = r#"{"lastUpdateId": 2, "bids": [["100.0", "0"]], "asks": []}"#;

        let update = DepthUpdate::from_json(json).unwrap();

        assert_eq!(update.bids, vec![(100.0, 0.0)]);
    }

    #[test]
    fn test_missing_fields_are_invalid_argument() {
        let err = DepthUpdate::from_json(r#"{"incomplete": "data"}"#).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().starts_with("Invalid DepthUpdate JSON: "));
    }

    #[test]
    fn test_non_numeric_level_is_invalid_argument() {
        let json = r#"{"lastUpdateId": 1, "bids": [["abc", "1"]], "asks": []}"#;

        let err = DepthUpdate::from_json(json).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("abc"));
    }

    #[test]
    fn test_numeric_level_is_invalid_argument() {
        let json = r#"{"lastUpdateId": 1, "bids": [[100.0, 1.0]], "asks": []}"#;

        let err = DepthUpdate::from_json(json).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_not_json_is_invalid_argument() {
        let err = DepthUpdate::from_json("not json").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
