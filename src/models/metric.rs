use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade fields selectable as a scatter-plot axis. The plot collaborator reads
/// the pair of these held by the session; the core only stores the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    EntryTime,
    ExitTime,
    EntryPrice,
    ExitPrice,
    ProfitLoss,
    RMultiple,
    Volatility,
    Drawdown,
    Duration,
    Quantity,
}

impl MetricKey {
    pub const ALL: [MetricKey; 10] = [
        MetricKey::EntryTime,
        MetricKey::ExitTime,
        MetricKey::EntryPrice,
        MetricKey::ExitPrice,
        MetricKey::ProfitLoss,
        MetricKey::RMultiple,
        MetricKey::Volatility,
        MetricKey::Drawdown,
        MetricKey::Duration,
        MetricKey::Quantity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::EntryTime => "Entry Time",
            MetricKey::ExitTime => "Exit Time",
            MetricKey::EntryPrice => "Entry Price",
            MetricKey::ExitPrice => "Exit Price",
            MetricKey::ProfitLoss => "Profit/Loss",
            MetricKey::RMultiple => "R-Multiple",
            MetricKey::Volatility => "Volatility",
            MetricKey::Drawdown => "Drawdown",
            MetricKey::Duration => "Duration (min)",
            MetricKey::Quantity => "Quantity",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
