use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ClusterId = u64;

/// One executed position within a pattern cluster. Read-only to the UI core;
/// all derived figures (r_multiple, drawdown, ...) arrive pre-computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    pub symbol: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub entry_price: f64,
    pub exit_price: f64,
    pub profit_loss: f64,
    pub r_multiple: f64,
    pub volatility: f64,
    pub drawdown: f64,
    /// Hold duration in minutes.
    pub duration: f64,
    pub quantity: f64,
    /// Tri-state: the backend may omit the flag for open or unresolved trades.
    #[serde(default)]
    pub win: Option<bool>,
}

/// A named group of trades sharing a detected pattern, with aggregate metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub cluster_id: ClusterId,
    pub name: String,
    pub description: String,
    /// Win rate in percent (0..100).
    pub win_rate: f64,
    pub r_multiple: f64,
    /// Average hold duration in minutes.
    pub duration: f64,
    pub trade_count: usize,
    pub avg_profit: f64,
    /// Fraction, e.g. 0.08 = 8%.
    pub drawdown: f64,
    /// Fraction, e.g. 0.35 = 35%.
    pub volatility: f64,
    #[serde(default)]
    pub trades: Vec<Trade>,
}
