use heatmap_core::{Exchange, Interval, Symbol};

/// Defaults the tools fall back to when a flag is not given
#[derive(Debug, Clone)]
pub struct ToolsConfig {
    pub exchange: Exchange,
    pub symbol: Symbol,
    pub interval: Interval,
    pub log_level: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            exchange: Exchange::Binance,
            symbol: Symbol::BTCUSDT,
            interval: Interval::OneMinute,
            log_level: "info".to_string(),
        }
    }
}
