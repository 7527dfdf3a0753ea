use anyhow::Result;
use tracing::{error, info, warn};

use pattern_dashboard::api::PatternsApi;
use pattern_dashboard::dashboard::metric_colors::{
    drawdown_tier, duration_tier, profit_tier, r_multiple_tier, volatility_tier, win_rate_tier,
};
use pattern_dashboard::dashboard::{
    ChartRenderer, ClusterSessionController, SubtopicKey, TRADE_COLUMNS,
};
use pattern_dashboard::models::{ChartKind, MetricKey, Trade};

/// Console stand-in for the real chart collaborators: reports what it was
/// asked to draw and with how many trades.
struct LogChartRenderer {
    kind: ChartKind,
}

impl ChartRenderer for LogChartRenderer {
    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn render(&mut self, trades: &[Trade]) -> Result<()> {
        info!("  [{}] rendering {} trades", self.kind, trades.len());
        Ok(())
    }
}

/// Async shell around the session controller: performs the two fetches and
/// feeds their outcomes back into the synchronous state machine, then walks
/// the resulting dashboard once and logs what a renderer would show.
pub struct PatternsApp {
    api: Box<dyn PatternsApi>,
    session: ClusterSessionController,
}

impl PatternsApp {
    pub fn new(api: Box<dyn PatternsApi>) -> Self {
        Self {
            api,
            session: ClusterSessionController::new(),
        }
    }

    pub async fn load_clusters(&mut self) {
        let result = self.api.fetch_clusters().await;
        self.session.clusters_loaded(result);
    }

    pub async fn generate_analysis(&mut self) {
        let Some(request) = self.session.begin_generate() else {
            warn!("generate requested with no selection or one already in flight");
            return;
        };
        let result = self.api.fetch_analysis(request.cluster_id).await;
        self.session.analysis_ready(request, result);
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("{}", "=".repeat(60));
        info!("Pattern dashboard smoke tour");
        info!("{}", "=".repeat(60));

        self.load_clusters().await;
        if let Some(msg) = self.session.error() {
            error!("{msg}");
            return Ok(());
        }

        info!("Loaded {} clusters:", self.session.clusters().len());
        for cluster in self.session.clusters() {
            info!(
                "  #{} {} — {} trades, win rate {:.1}% ({:?})",
                cluster.cluster_id,
                cluster.name,
                cluster.trade_count,
                cluster.win_rate,
                win_rate_tier(cluster.win_rate),
            );
        }

        let Some(first_id) = self.session.clusters().first().map(|c| c.cluster_id) else {
            warn!("no clusters to inspect");
            return Ok(());
        };
        self.session.select_cluster(Some(first_id));
        self.log_metrics();

        self.session.charts_mut().add_chart(ChartKind::EquityCurve);
        self.session
            .charts_mut()
            .add_chart(ChartKind::RMultipleHistogram);
        self.render_charts()?;

        self.generate_analysis().await;
        if let Some(msg) = self.session.error() {
            error!("{msg}");
        } else {
            self.walk_analysis();
        }

        self.log_table();
        Ok(())
    }

    fn log_metrics(&self) {
        let Some(cluster) = self.session.selected_cluster() else {
            return;
        };
        info!("Selected cluster: {} — {}", cluster.name, cluster.description);
        info!(
            "  win rate {:.1}% {:?} {} | R {:.2} {:?} {} | duration {:.0}m {:?} {}",
            cluster.win_rate,
            win_rate_tier(cluster.win_rate),
            win_rate_tier(cluster.win_rate).hex(),
            cluster.r_multiple,
            r_multiple_tier(cluster.r_multiple),
            r_multiple_tier(cluster.r_multiple).hex(),
            cluster.duration,
            duration_tier(cluster.duration),
            duration_tier(cluster.duration).hex(),
        );
        info!(
            "  avg profit {:.2} {:?} {} | drawdown {:.1}% {:?} {} | volatility {:.1}% {:?} {}",
            cluster.avg_profit,
            profit_tier(cluster.avg_profit),
            profit_tier(cluster.avg_profit).hex(),
            cluster.drawdown * 100.0,
            drawdown_tier(cluster.drawdown),
            drawdown_tier(cluster.drawdown).hex(),
            cluster.volatility * 100.0,
            volatility_tier(cluster.volatility),
            volatility_tier(cluster.volatility).hex(),
        );
        info!(
            "  scatter axes: {} vs {} (options: {})",
            self.session.x_axis_metric(),
            self.session.y_axis_metric(),
            MetricKey::ALL.map(|m| m.label()).join(", "),
        );
    }

    fn render_charts(&mut self) -> Result<()> {
        let Some(cluster) = self.session.selected_cluster() else {
            return Ok(());
        };
        let trades = cluster.trades.clone();
        info!("Active charts:");
        for kind in self.session.charts().active().to_vec() {
            let mut renderer = LogChartRenderer { kind };
            renderer.render(&trades)?;
        }
        Ok(())
    }

    fn walk_analysis(&mut self) {
        let Some(analysis) = self.session.analysis_mut() else {
            return;
        };
        let topics: Vec<String> = analysis.topics().map(str::to_string).collect();
        info!("Analysis topics: {}", analysis.tree().len());

        for topic in topics {
            analysis.toggle_topic(&topic);
            info!("  {topic}");
            for entry in analysis.subtopic_entries(&topic) {
                let marker = if entry == SubtopicKey::Recommendations {
                    " (synthesized)"
                } else {
                    ""
                };
                info!("    - {}{}", entry.label(), marker);
                if let Some(text) = analysis.content(&topic, &entry) {
                    info!("      {text}");
                }
            }
        }
    }

    fn log_table(&self) {
        let Some(cluster) = self.session.selected_cluster() else {
            return;
        };
        let header: Vec<String> = TRADE_COLUMNS
            .iter()
            .map(|col| format!("{} ({}px)", col.label, self.session.columns().width(col.key)))
            .collect();
        info!("Trades in cluster: {}", cluster.trades.len());
        info!("  {}", header.join(" | "));
        for trade in &cluster.trades {
            let row: Vec<String> = TRADE_COLUMNS
                .iter()
                .map(|col| pattern_dashboard::dashboard::columns::format_cell(trade, col.key))
                .collect();
            info!("  {}", row.join(" | "));
        }
    }
}
