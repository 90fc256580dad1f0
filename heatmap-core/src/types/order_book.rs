use crate::error::ModelError;
use crate::types::{Exchange, Symbol, TimestampMS};
use crate::validation::{require_positive, require_symbol, require_timestamp, Validate};
use serde::{Deserialize, Serialize};

/// One resting price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: f64,
    pub quantity: f64,
    /// Number of orders at this level, when the exchange reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl BookLevel {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self {
            price,
            quantity,
            count: None,
        }
    }

    pub fn notional(&self) -> f64 {
        self.price * self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSide {
    Bid,
    Ask,
}

/// Order book state used for price impact estimation.
///
/// Bids are ordered best (highest) first, asks best (lowest) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub exchange: Exchange,
    pub symbol: Symbol,
    pub timestamp: TimestampMS,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<i64>,

    // Derived, see `with_derived_metrics`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imbalance: Option<f64>,
}

impl OrderBookSnapshot {
    pub fn new(
        exchange: Exchange,
        symbol: impl Into<Symbol>,
        timestamp: TimestampMS,
        bids: Vec<BookLevel>,
        asks: Vec<BookLevel>,
    ) -> Self {
        Self {
            exchange,
            symbol: symbol.into(),
            timestamp,
            bids,
            asks,
            sequence_id: None,
            spread: None,
            mid_price: None,
            imbalance: None,
        }
    }

    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    pub fn calculate_spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }

    pub fn calculate_mid_price(&self) -> Option<f64> {
        Some((self.best_ask()?.price + self.best_bid()?.price) / 2.0)
    }

    /// (bid qty − ask qty) / (bid qty + ask qty) over the whole snapshot,
    /// in [-1, 1]. None for an empty book.
    pub fn calculate_imbalance(&self) -> Option<f64> {
        let bid_qty: f64 = self.bids.iter().map(|l| l.quantity).sum();
        let ask_qty: f64 = self.asks.iter().map(|l| l.quantity).sum();
        let total = bid_qty + ask_qty;
        if total <= 0.0 {
            return None;
        }
        Some((bid_qty - ask_qty) / total)
    }

    /// Copy of this snapshot with spread, mid price and imbalance filled in
    pub fn with_derived_metrics(mut self) -> Self {
        self.spread = self.calculate_spread();
        self.mid_price = self.calculate_mid_price();
        self.imbalance = self.calculate_imbalance();
        self
    }

    /// USD notional resting on one side within `pct` percent of mid.
    ///
    /// This is the depth a cascade of liquidations on that side has to eat
    /// through; feed it to `estimate_price_impact`.
    pub fn depth_usd(&self, side: BookSide, pct: f64) -> f64 {
        let Some(mid) = self.calculate_mid_price() else {
            return 0.0;
        };
        let band = mid * pct / 100.0;

        match side {
            BookSide::Bid => self
                .bids
                .iter()
                .filter(|l| l.price >= mid - band)
                .map(BookLevel::notional)
                .sum(),
            BookSide::Ask => self
                .asks
                .iter()
                .filter(|l| l.price <= mid + band)
                .map(BookLevel::notional)
                .sum(),
        }
    }
}

impl Validate for OrderBookSnapshot {
    fn validate(&self) -> Result<(), ModelError> {
        require_symbol(&self.symbol)?;
        require_timestamp(self.timestamp)?;
        for level in &self.bids {
            require_positive("bids", level.price)?;
        }
        for level in &self.asks {
            require_positive("asks", level.price)?;
        }
        Ok(())
    }
}
