use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of visualizations a user can add to a cluster view. Extending
/// the set means adding a variant here plus a rendering collaborator; the
/// composition manager needs no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    EquityCurve,
    RMultipleHistogram,
    VolatilityDurationHeatmap,
    SymbolBoxplot,
    CalendarPnlHeatmap,
    ClusterScatterPlot,
    SymbolPnlHeatmap,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::EquityCurve,
        ChartKind::RMultipleHistogram,
        ChartKind::VolatilityDurationHeatmap,
        ChartKind::SymbolBoxplot,
        ChartKind::CalendarPnlHeatmap,
        ChartKind::ClusterScatterPlot,
        ChartKind::SymbolPnlHeatmap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::EquityCurve => "Equity Curve",
            ChartKind::RMultipleHistogram => "R-Multiple Histogram",
            ChartKind::VolatilityDurationHeatmap => "Volatility vs Duration Heatmap",
            ChartKind::SymbolBoxplot => "Symbol-wise Boxplot",
            ChartKind::CalendarPnlHeatmap => "Calendar PnL Heatmap",
            ChartKind::ClusterScatterPlot => "Cluster Scatter Plot",
            ChartKind::SymbolPnlHeatmap => "Symbol P&L Heatmap",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ChartKind::EquityCurve).unwrap(),
            "\"EQUITY_CURVE\""
        );
        assert_eq!(
            serde_json::from_str::<ChartKind>("\"SYMBOL_PNL_HEATMAP\"").unwrap(),
            ChartKind::SymbolPnlHeatmap
        );
    }

    #[test]
    fn all_lists_every_kind_once() {
        let mut seen = std::collections::HashSet::new();
        for kind in ChartKind::ALL {
            assert!(seen.insert(kind), "duplicate kind {kind}");
        }
        assert_eq!(seen.len(), 7);
    }
}
