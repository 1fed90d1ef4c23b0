use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::Display;

use eq_float::F64;
use tracing::{debug, warn};

use crate::{
    book::{Book, Levels},
    common::{is_live, BestBidAsk, Level, Price, Quantity},
    error::BookError,
    update::{BookTickerUpdate, DepthUpdate},
};

/// Number of rows in the rendered depth table
pub const DISPLAY_DEPTH: usize = 20;

const EMPTY_BID: &str = "[ ------- ] ---------";
const EMPTY_ASK: &str = "--------- [ ------- ]";

/// Limit order book where each side of the book is an ordered mapping (using
/// B-trees) from price to aggregate quantity
#[derive(Clone, Debug, PartialEq)]
pub struct BTreeBook {
    /// The symbol every update must be for
    symbol: String,
    /// Bid-side of the market, highest price first
    bids: BTreeMap<Reverse<F64>, Quantity>,
    /// Ask-side of the market, lowest price first
    asks: BTreeMap<F64, Quantity>,
}

impl Display for BTreeBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bids = self.bids.iter();
        let mut asks = self.asks.iter();

        for row in 1..=DISPLAY_DEPTH {
            write!(f, "[{row:>2}] ")?;

            match bids.next() {
                Some((Reverse(price), quantity)) => {
                    write!(f, "[ {:.5} ] {:.3}", quantity, price.0)?
                }
                None => f.write_str(EMPTY_BID)?,
            }

            f.write_str(" | ")?;

            match asks.next() {
                Some((price, quantity)) => {
                    write!(f, "{:.3} [ {:.5} ]", price.0, quantity)?
                }
                None => f.write_str(EMPTY_ASK)?,
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl BTreeBook {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
        }
    }

    fn set_bid(&mut self, price: Price, quantity: Quantity) {
        let key = Reverse(F64(price));
        if is_live(price, quantity) {
            self.bids.insert(key, quantity);
        } else {
            self.bids.remove(&key);
        }
    }

    fn set_ask(&mut self, price: Price, quantity: Quantity) {
        let key = F64(price);
        if is_live(price, quantity) {
            self.asks.insert(key, quantity);
        } else {
            self.asks.remove(&key);
        }
    }
}

impl Book for BTreeBook {
    type Error = BookError;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn update_book_ticker(
        &mut self,
        update: &BookTickerUpdate,
    ) -> Result<(), Self::Error> {
        if update.symbol != self.symbol {
            warn!(
                book = %self.symbol,
                update = %update.symbol,
                update_id = update.update_id,
                "rejected ticker update for another symbol"
            );
            return Err(BookError::InvalidArgument(format!(
                "symbol mismatch: book is {}, update is {}",
                self.symbol, update.symbol
            )));
        }

        self.set_bid(update.best_bid_price, update.best_bid_qty);
        self.set_ask(update.best_ask_price, update.best_ask_qty);
        debug!(
            symbol = %self.symbol,
            update_id = update.update_id,
            bid = update.best_bid_price,
            ask = update.best_ask_price,
            "applied ticker update"
        );

        self.prune_mid_book();
        Ok(())
    }

    fn update_depth(&mut self, update: &DepthUpdate) {
        update
            .bids
            .iter()
            .for_each(|&(price, quantity)| self.set_bid(price, quantity));
        update
            .asks
            .iter()
            .for_each(|&(price, quantity)| self.set_ask(price, quantity));
        debug!(
            symbol = %self.symbol,
            last_update_id = update.last_update_id,
            bids = update.bids.len(),
            asks = update.asks.len(),
            "applied depth update"
        );

        self.prune_mid_book();
    }

    /// Bounds are captured once, before anything is removed, so this is a
    /// single pass rather than a fixed-point iteration. A touching book
    /// (best bid == best ask) loses both of those levels.
    fn prune_mid_book(&mut self) {
        let (Some(best_bid), Some(best_ask)) = self.top() else {
            return;
        };
        let mut pruned = (0usize, 0usize);

        while let Some(entry) = self.bids.first_entry() {
            let Reverse(F64(price)) = *entry.key();
            if price < best_ask {
                break;
            }
            entry.remove();
            pruned.0 += 1;
        }

        while let Some(entry) = self.asks.first_entry() {
            let F64(price) = *entry.key();
            if price > best_bid {
                break;
            }
            entry.remove();
            pruned.1 += 1;
        }

        if pruned != (0, 0) {
            debug!(
                symbol = %self.symbol,
                best_bid,
                best_ask,
                bids = pruned.0,
                asks = pruned.1,
                "pruned crossed levels"
            );
        }
    }

    fn best_bid_ask(&self) -> Option<BestBidAsk> {
        let (Reverse(bid), bid_qty) = self.bids.first_key_value()?;
        let (ask, ask_qty) = self.asks.first_key_value()?;

        Some(BestBidAsk {
            bid: Level::new(bid.0, *bid_qty),
            ask: Level::new(ask.0, *ask_qty),
        })
    }

    fn top(&self) -> (Option<Price>, Option<Price>) {
        (
            self.bids.first_key_value().map(|(Reverse(p), _)| p.0),
            self.asks.first_key_value().map(|(p, _)| p.0),
        )
    }

    fn crossed(&self) -> bool {
        match self.top() {
            (Some(best_bid), Some(best_ask)) => best_bid >= best_ask,
            _ => false,
        }
    }

    fn levels(&self) -> Levels {
        Levels {
            bids: self
                .bids
                .iter()
                .map(|(Reverse(p), q)| (p.0, *q))
                .collect(),
            asks: self.asks.iter().map(|(p, q)| (p.0, *q)).collect(),
        }
    }
}
