use chrono::{DateTime, Duration, Utc};

use pattern_dashboard::models::{AnalysisNode, Cluster, ClusterId, Trade};

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-01T14:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// One trade with a 90-minute hold; the win flag follows the PnL sign.
pub fn make_trade(id: u64, symbol: &str, profit_loss: f64) -> Trade {
    let entry_time = base_time() + Duration::minutes(id as i64);
    Trade {
        id,
        symbol: symbol.to_string(),
        entry_time,
        exit_time: entry_time + Duration::minutes(90),
        entry_price: 100.0,
        exit_price: 100.0 + profit_loss,
        profit_loss,
        r_multiple: profit_loss / 10.0,
        volatility: 0.3,
        drawdown: 0.04,
        duration: 90.0,
        quantity: 1.0,
        win: Some(profit_loss > 0.0),
    }
}

/// A cluster with `trade_count` alternating win/loss trades.
pub fn make_cluster(cluster_id: ClusterId, name: &str, trade_count: usize) -> Cluster {
    let trades: Vec<Trade> = (0..trade_count)
        .map(|i| {
            let pnl = if i % 2 == 0 { 25.0 } else { -10.0 };
            make_trade(i as u64 + 1, "BTC-USD", pnl)
        })
        .collect();

    Cluster {
        cluster_id,
        name: name.to_string(),
        description: format!("{name} pattern"),
        win_rate: 55.0,
        r_multiple: 0.8,
        duration: 90.0,
        trade_count,
        avg_profit: 7.5,
        drawdown: 0.04,
        volatility: 0.3,
        trades,
    }
}

pub fn leaf(text: &str) -> AnalysisNode {
    AnalysisNode::Leaf(text.to_string())
}

/// A branch node from (subtopic, text) pairs.
pub fn branch(subtopics: &[(&str, &str)]) -> AnalysisNode {
    AnalysisNode::Branch(
        subtopics
            .iter()
            .map(|(name, text)| (name.to_string(), leaf(text)))
            .collect(),
    )
}
