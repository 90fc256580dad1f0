use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Exchanges the pipeline ingests liquidations from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Binance,
    Okx,
    Bybit,
    Coinbase,
    Kraken,
    Deribit,
    Bitfinex,
}

impl Exchange {
    pub const ALL: [Exchange; 7] = [
        Exchange::Binance,
        Exchange::Okx,
        Exchange::Bybit,
        Exchange::Coinbase,
        Exchange::Kraken,
        Exchange::Deribit,
        Exchange::Bitfinex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Binance => "binance",
            Exchange::Okx => "okx",
            Exchange::Bybit => "bybit",
            Exchange::Coinbase => "coinbase",
            Exchange::Kraken => "kraken",
            Exchange::Deribit => "deribit",
            Exchange::Bitfinex => "bitfinex",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exchange::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "exchange",
                value: s.to_string(),
            })
    }
}

/// Trading pair identifier (e.g., "BTCUSDT").
///
/// Pairs are open-ended, so this stays a string on the wire; the common
/// ones are available as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    pub const BTCUSDT: Symbol = Symbol(Cow::Borrowed("BTCUSDT"));
    pub const ETHUSDT: Symbol = Symbol(Cow::Borrowed("ETHUSDT"));
    pub const BTCUSD: Symbol = Symbol(Cow::Borrowed("BTCUSD"));
    pub const BNBUSDT: Symbol = Symbol(Cow::Borrowed("BNBUSDT"));
    pub const SOLUSDT: Symbol = Symbol(Cow::Borrowed("SOLUSDT"));

    pub fn new(symbol: impl Into<String>) -> Self {
        Symbol(Cow::Owned(symbol.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::new(s)
    }
}

/// Kind of forced closure reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Liquidation,
    /// Auto-deleveraging
    Adl,
    Bankruptcy,
}

/// Side as reported upstream.
///
/// Some exchanges report the position direction (`long`/`short`), others
/// the side of the closing order (`BUY`/`SELL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "BUY", alias = "buy")]
    Buy,
    #[serde(rename = "SELL", alias = "sell")]
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "long",
            Side::Short => "short",
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// Direction of the position that was closed.
    ///
    /// A forced SELL closes a long, a forced BUY closes a short.
    pub fn liquidation_type(&self) -> LiquidationType {
        match self {
            Side::Long | Side::Sell => LiquidationType::Long,
            Side::Short | Side::Buy => LiquidationType::Short,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Side::Long),
            "short" => Ok(Side::Short),
            "BUY" | "buy" => Ok(Side::Buy),
            "SELL" | "sell" => Ok(Side::Sell),
            _ => Err(ModelError::UnknownVariant {
                kind: "side",
                value: s.to_string(),
            }),
        }
    }
}

/// Semantic direction of a liquidated position.
///
/// Displays as `LONG`/`SHORT`; lowercase on the wire to match `Side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidationType {
    #[serde(rename = "long", alias = "LONG")]
    Long,
    #[serde(rename = "short", alias = "SHORT")]
    Short,
}

impl LiquidationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidationType::Long => "LONG",
            LiquidationType::Short => "SHORT",
        }
    }
}

impl fmt::Display for LiquidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquidation_type_inference() {
        assert_eq!(Side::Sell.liquidation_type().to_string(), "LONG");
        assert_eq!(Side::Buy.liquidation_type().to_string(), "SHORT");
        assert_eq!(Side::Long.liquidation_type().to_string(), "LONG");
        assert_eq!(Side::Short.liquidation_type().to_string(), "SHORT");
    }

    #[test]
    fn test_side_wire_names() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");
        assert_eq!(serde_json::to_string(&Side::Long).unwrap(), "\"long\"");

        let side: Side = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(side, Side::Buy);
        assert!(serde_json::from_str::<Side>("\"sideways\"").is_err());
    }

    #[test]
    fn test_exchange_parse() {
        for exchange in Exchange::ALL {
            assert_eq!(exchange.as_str().parse::<Exchange>().unwrap(), exchange);
        }

        let err = "".parse::<Exchange>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownVariant { kind: "exchange", .. }));
        assert!("Binance".parse::<Exchange>().is_err());
    }

    #[test]
    fn test_symbol_is_plain_string_on_wire() {
        assert_eq!(serde_json::to_string(&Symbol::BTCUSDT).unwrap(), "\"BTCUSDT\"");

        let symbol: Symbol = serde_json::from_str("\"ETHUSDT\"").unwrap();
        assert_eq!(symbol, Symbol::ETHUSDT);
        assert!(Symbol::new("").is_empty());
    }

    #[test]
    fn test_order_type_wire_names() {
        assert_eq!(serde_json::to_string(&OrderType::Adl).unwrap(), "\"adl\"");
        let order_type: OrderType = serde_json::from_str("\"bankruptcy\"").unwrap();
        assert_eq!(order_type, OrderType::Bankruptcy);
    }
}
