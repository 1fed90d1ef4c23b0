use serde::{Deserialize, Serialize};

pub type Price = f64;
pub type Quantity = f64;

/// A single price level: resting quantity at a price
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Level {
    pub price: Price,
    pub quantity: Quantity,
}

impl Level {
    pub fn new(price: Price, quantity: Quantity) -> Self {
        Self { price, quantity }
    }
}

impl From<(Price, Quantity)> for Level {
    fn from((price, quantity): (Price, Quantity)) -> Self {
        Self { price, quantity }
    }
}

/// Top of the book, only available when both sides are populated
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BestBidAsk {
    pub bid: Level,
    pub ask: Level,
}

/// Whether a price and quantity describe a level worth storing. Anything
/// else is a deletion of that price.
pub fn is_live(price: Price, quantity: Quantity) -> bool {
    price > 0.0 && quantity > 0.0
}
