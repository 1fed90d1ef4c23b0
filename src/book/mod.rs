pub mod btree_book;

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{
    common::{BestBidAsk, Price, Quantity},
    update::{BookTickerUpdate, DepthUpdate},
};

/// Both sides of a book, best level first
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Levels {
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

/// A local order book for a single symbol, rebuilt from depth snapshots and
/// ticker updates.
///
/// After any mutating call returns, the book is never crossed: if both
/// sides are populated the best bid is strictly below the best ask.
pub trait Book: Clone + Debug + Display {
    type Error;

    fn symbol(&self) -> &str;

    /// Upserts the best bid and best ask carried by `update`. Rejected
    /// without touching the book if the update is for another symbol.
    fn update_book_ticker(
        &mut self,
        update: &BookTickerUpdate,
    ) -> Result<(), Self::Error>;

    /// Applies every level in `update`, in order, as an absolute
    /// replacement.
    fn update_depth(&mut self, update: &DepthUpdate);

    /// Removes every level that crosses the opposite side's best price.
    fn prune_mid_book(&mut self);

    fn best_bid_ask(&self) -> Option<BestBidAsk>;
    fn top(&self) -> (Option<Price>, Option<Price>);
    fn crossed(&self) -> bool;
    fn levels(&self) -> Levels;

    fn mid_price(&self) -> Option<Price> {
        self.best_bid_ask()
            .map(|best| (best.bid.price + best.ask.price) / 2.0)
    }

    fn spread(&self) -> Option<Price> {
        self.best_bid_ask()
            .map(|best| best.ask.price - best.bid.price)
    }
}
