use crate::error::ModelError;
use crate::types::{Exchange, LiquidationEvent, Symbol, TimestampMS};
use crate::validation::{require_positive, require_symbol, require_timestamp, Validate};
use serde::{Deserialize, Serialize};

/// Point-in-time market context for one symbol on one exchange.
/// Used to estimate leverage and price impact of liquidations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    // ═══════════════════════════════════════════════════
    // IDENTIFICATION
    // ═══════════════════════════════════════════════════
    pub exchange: Exchange,
    pub symbol: Symbol,
    pub timestamp: TimestampMS,

    // ═══════════════════════════════════════════════════
    // PRICES
    // ═══════════════════════════════════════════════════
    pub mark_price: f64,
    pub index_price: f64,
    pub funding_rate: f64, // Current perpetual funding rate per period

    // ═══════════════════════════════════════════════════
    // OPEN INTEREST & ACTIVITY
    // ═══════════════════════════════════════════════════
    pub open_interest: f64,       // Contracts
    pub open_interest_value: f64, // USD
    pub volume_24h: f64,          // Base asset
    pub turnover_24h: f64,        // USD
    pub next_funding_time: TimestampMS,
}

impl MarketSnapshot {
    /// Create a snapshot with only the mark price known
    pub fn new(
        exchange: Exchange,
        symbol: impl Into<Symbol>,
        timestamp: TimestampMS,
        mark_price: f64,
    ) -> Self {
        Self {
            exchange,
            symbol: symbol.into(),
            timestamp,
            mark_price,
            index_price: 0.0,
            funding_rate: 0.0,
            open_interest: 0.0,
            open_interest_value: 0.0,
            volume_24h: 0.0,
            turnover_24h: 0.0,
            next_funding_time: 0,
        }
    }

    /// Mark premium over index in percent
    pub fn basis_pct(&self) -> f64 {
        if self.index_price.abs() > 1e-10 {
            ((self.mark_price - self.index_price) / self.index_price) * 100.0
        } else {
            0.0
        }
    }

    /// Open interest in USD, falling back to contracts × mark when the
    /// exchange only reports contracts
    pub fn open_interest_usd(&self) -> f64 {
        if self.open_interest_value > 0.0 {
            self.open_interest_value
        } else {
            self.open_interest * self.mark_price
        }
    }

    /// Leverage estimate for a liquidation against this snapshot's mark price
    pub fn leverage_of(&self, event: &LiquidationEvent) -> f64 {
        event.estimated_leverage(self.mark_price)
    }
}

impl Validate for MarketSnapshot {
    fn validate(&self) -> Result<(), ModelError> {
        require_symbol(&self.symbol)?;
        require_timestamp(self.timestamp)?;
        require_positive("mark_price", self.mark_price)?;
        Ok(())
    }
}
