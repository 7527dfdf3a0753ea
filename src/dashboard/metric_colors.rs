//! Severity thresholds for the metric summary row. Presentation-only: nothing
//! downstream branches on these tiers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTier {
    Good,
    Warn,
    Bad,
}

impl MetricTier {
    pub fn hex(&self) -> &'static str {
        match self {
            MetricTier::Good => "#00e676",
            MetricTier::Warn => "#ffeb3b",
            MetricTier::Bad => "#ff5252",
        }
    }
}

/// Profit/PnL in account currency: sign decides, breakeven warns.
pub fn profit_tier(value: f64) -> MetricTier {
    if value > 0.0 {
        MetricTier::Good
    } else if value < 0.0 {
        MetricTier::Bad
    } else {
        MetricTier::Warn
    }
}

/// Win rate in percent: >= 60 good, 40..60 warn, below bad.
pub fn win_rate_tier(percent: f64) -> MetricTier {
    if percent >= 60.0 {
        MetricTier::Good
    } else if percent >= 40.0 {
        MetricTier::Warn
    } else {
        MetricTier::Bad
    }
}

/// Average R-multiple: > 0.5 good, 0..=0.5 warn, negative bad.
pub fn r_multiple_tier(value: f64) -> MetricTier {
    if value > 0.5 {
        MetricTier::Good
    } else if value >= 0.0 {
        MetricTier::Warn
    } else {
        MetricTier::Bad
    }
}

/// Average hold in minutes: 60..=240 is the healthy band, anything outside
/// only warns. There is no bad tier for duration.
pub fn duration_tier(minutes: f64) -> MetricTier {
    if minutes < 60.0 || minutes > 240.0 {
        MetricTier::Warn
    } else {
        MetricTier::Good
    }
}

/// Drawdown as a fraction: > 0.10 bad, 0.05..=0.10 warn, <= 0.05 good.
pub fn drawdown_tier(fraction: f64) -> MetricTier {
    if fraction > 0.10 {
        MetricTier::Bad
    } else if fraction > 0.05 {
        MetricTier::Warn
    } else {
        MetricTier::Good
    }
}

/// Volatility as a fraction: > 0.8 bad, 0.4..=0.8 warn, <= 0.4 good.
pub fn volatility_tier(fraction: f64) -> MetricTier {
    if fraction > 0.8 {
        MetricTier::Bad
    } else if fraction > 0.4 {
        MetricTier::Warn
    } else {
        MetricTier::Good
    }
}
