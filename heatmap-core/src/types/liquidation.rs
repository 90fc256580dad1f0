use crate::error::ModelError;
use crate::metrics::MAINTENANCE_MARGIN;
use crate::types::{Exchange, LiquidationType, OrderType, Side, Symbol, TimestampMS};
use crate::validation::{require_positive, require_symbol, require_timestamp, Validate};
use serde::{Deserialize, Serialize};

/// A single forced closure reported by one exchange.
///
/// Produced by ingestion, consumed by aggregation; never modified after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidationEvent {
    pub exchange: Exchange,
    pub symbol: Symbol,
    pub timestamp: TimestampMS,
    pub side: Side,
    pub price: f64,
    pub quantity: f64,
    pub value: f64, // USD value
    pub order_type: OrderType,

    // Fill metadata, only some exchanges report it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_time: Option<TimestampMS>,
}

impl LiquidationEvent {
    /// Create an event without fill metadata. `value` is derived as
    /// `price × quantity`.
    pub fn new(
        exchange: Exchange,
        symbol: impl Into<Symbol>,
        timestamp: TimestampMS,
        side: Side,
        price: f64,
        quantity: f64,
        order_type: OrderType,
    ) -> Self {
        Self {
            exchange,
            symbol: symbol.into(),
            timestamp,
            side,
            price,
            quantity,
            value: price * quantity,
            order_type,
            average_price: None,
            filled_quantity: None,
            order_status: None,
            trade_time: None,
        }
    }

    pub fn liquidation_type(&self) -> LiquidationType {
        self.side.liquidation_type()
    }

    /// Approximate leverage of the liquidated position given the current
    /// mark price.
    ///
    /// Returns 0 when it cannot be estimated: the liquidation price sits on
    /// the wrong side of mark for the inferred direction, or mark is not
    /// positive.
    pub fn estimated_leverage(&self, mark_price: f64) -> f64 {
        if mark_price.is_nan() || mark_price <= 0.0 {
            return 0.0;
        }

        let ratio = self.price / mark_price;
        match self.liquidation_type() {
            LiquidationType::Long if self.price < mark_price => {
                1.0 / (1.0 - ratio + MAINTENANCE_MARGIN)
            }
            LiquidationType::Short if self.price > mark_price => {
                1.0 / (ratio - 1.0 + MAINTENANCE_MARGIN)
            }
            _ => 0.0,
        }
    }
}

impl Validate for LiquidationEvent {
    fn validate(&self) -> Result<(), ModelError> {
        require_symbol(&self.symbol)?;
        require_timestamp(self.timestamp)?;
        require_positive("price", self.price)?;
        require_positive("quantity", self.quantity)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(side: Side, price: f64) -> LiquidationEvent {
        LiquidationEvent::new(
            Exchange::Binance,
            Symbol::BTCUSDT,
            1_704_067_200_000,
            side,
            price,
            1.5,
            OrderType::Liquidation,
        )
    }

    #[test]
    fn test_minimal_event_is_valid() {
        let event = LiquidationEvent {
            exchange: Exchange::Binance,
            symbol: Symbol::BTCUSDT,
            timestamp: chrono::Utc::now().timestamp_millis(),
            side: Side::Long,
            price: 45000.0,
            quantity: 1.5,
            value: 67500.0,
            order_type: OrderType::Liquidation,
            average_price: None,
            filled_quantity: None,
            order_status: None,
            trade_time: None,
        };
        assert!(event.validate().is_ok());
        assert_eq!(sample(Side::Long, 45000.0).value, 67500.0);
    }

    #[test]
    fn test_native_sell_without_value_is_valid() {
        let mut event = sample(Side::Sell, 45000.0);
        event.value = 0.0;
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_validation_rejections() {
        let mut event = sample(Side::Long, 45000.0);
        event.symbol = Symbol::new("");
        assert_eq!(event.validate().unwrap_err().field(), Some("symbol"));

        let mut event = sample(Side::Long, 45000.0);
        event.timestamp = 0;
        assert_eq!(event.validate().unwrap_err().field(), Some("timestamp"));

        let mut event = sample(Side::Long, -1000.0);
        event.quantity = 1.5;
        assert_eq!(event.validate().unwrap_err().field(), Some("price"));

        let mut event = sample(Side::Long, 45000.0);
        event.quantity = 0.0;
        assert_eq!(event.validate().unwrap_err().field(), Some("quantity"));
    }

    #[test]
    fn test_validation_reports_first_violation() {
        let mut event = sample(Side::Long, 0.0);
        event.symbol = Symbol::new("");
        event.quantity = 0.0;
        assert_eq!(event.validate().unwrap_err().field(), Some("symbol"));
    }

    #[test]
    fn test_estimated_leverage() {
        let long = sample(Side::Sell, 36000.0).estimated_leverage(40000.0);
        assert!((long - 10.0).abs() < 0.5, "got {}", long);

        let short = sample(Side::Buy, 44000.0).estimated_leverage(40000.0);
        assert!((short - 10.0).abs() < 0.5, "got {}", short);

        // Long liquidation priced above mark cannot be estimated
        assert_eq!(sample(Side::Sell, 45000.0).estimated_leverage(40000.0), 0.0);
        assert_eq!(sample(Side::Long, 45000.0).estimated_leverage(40000.0), 0.0);
        assert_eq!(sample(Side::Short, 36000.0).estimated_leverage(40000.0), 0.0);
        assert_eq!(sample(Side::Long, 36000.0).estimated_leverage(0.0), 0.0);
    }

    #[test]
    fn test_optional_fill_fields_are_omitted() {
        let json = serde_json::to_value(sample(Side::Long, 45000.0)).unwrap();
        assert!(json.get("average_price").is_none());
        assert_eq!(json["order_type"], "liquidation");

        let mut filled = sample(Side::Sell, 45000.0);
        filled.order_status = Some("FILLED".to_string());
        let json = serde_json::to_value(filled).unwrap();
        assert_eq!(json["order_status"], "FILLED");
        assert_eq!(json["side"], "SELL");
    }
}
