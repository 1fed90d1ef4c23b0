//! Local limit order book for a single symbol, rebuilt from exchange depth
//! snapshots and best bid/ask ("book ticker") updates.
//!
//! ```
//! use depthbook::{
//!     book::{btree_book::BTreeBook, Book},
//!     update::{BookTickerUpdate, DepthUpdate},
//! };
//!
//! let mut book = BTreeBook::new("BNBUSDT");
//! book.update_depth(&DepthUpdate::from_json(
//!     r#"{"lastUpdateId": 160, "bids": [["25.00", "5"]], "asks": [["25.50", "3"]]}"#,
//! )?);
//! book.update_book_ticker(&BookTickerUpdate::from_json(
//!     r#"{"u": 400900217, "s": "BNBUSDT", "b": "24.60", "B": "4", "a": "25.40", "A": "6"}"#,
//! )?)?;
//!
//! let best = book.best_bid_ask().unwrap();
//! assert_eq!(best.bid.price, 25.00);
//! assert_eq!(best.ask.price, 25.40);
//! # Ok::<(), depthbook::error::BookError>(())
//! ```

pub mod book;
pub mod common;
pub mod error;
pub mod update;
