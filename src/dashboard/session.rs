//! Top-level dashboard state: which cluster is selected, the generated
//! analysis for it, loading flags, filters, and the long-lived chart/column
//! sub-state.
//!
//! The controller is a synchronous state machine; the async shell drives it by
//! calling `begin_*` before a fetch and feeding the result back afterwards.
//! Selecting a cluster resets the analysis and its disclosure state but never
//! the chart selection or column widths: the user's layout stays stable while
//! browsing clusters. That asymmetry is deliberate and tested.

use tracing::debug;

use crate::api::ApiError;
use crate::dashboard::charts::ChartCompositionManager;
use crate::dashboard::columns::ColumnWidthModel;
use crate::dashboard::disclosure::AnalysisDisclosureTree;
use crate::models::{AnalysisTree, Cluster, ClusterId, MetricKey};

pub const CLUSTERS_FETCH_ERROR: &str = "Failed to fetch clusters.";
pub const ANALYSIS_FETCH_ERROR: &str = "Failed to generate AI analysis.";

/// Win/loss filter for the trades table and plots. Consumed by display
/// collaborators only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinFilter {
    #[default]
    All,
    Wins,
    Losses,
}

/// Token handed out by [`ClusterSessionController::begin_generate`]. Carries
/// the epoch at request time so a response that lands after the user switched
/// clusters is recognized as stale and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
    pub cluster_id: ClusterId,
    epoch: u64,
}

#[derive(Debug)]
pub struct ClusterSessionController {
    clusters: Vec<Cluster>,
    selected: Option<ClusterId>,
    analysis: Option<AnalysisDisclosureTree>,
    loading_clusters: bool,
    loading_analysis: bool,
    error: Option<&'static str>,
    epoch: u64,

    charts: ChartCompositionManager,
    columns: ColumnWidthModel,
    symbol_filter: Option<String>,
    win_filter: WinFilter,
    x_axis_metric: MetricKey,
    y_axis_metric: MetricKey,
}

impl Default for ClusterSessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterSessionController {
    /// Starts in the loading state; the shell fetches the cluster list once at
    /// startup and reports through [`clusters_loaded`](Self::clusters_loaded).
    pub fn new() -> Self {
        Self {
            clusters: Vec::new(),
            selected: None,
            analysis: None,
            loading_clusters: true,
            loading_analysis: false,
            error: None,
            epoch: 0,
            charts: ChartCompositionManager::new(),
            columns: ColumnWidthModel::new(),
            symbol_filter: None,
            win_filter: WinFilter::All,
            x_axis_metric: MetricKey::EntryTime,
            y_axis_metric: MetricKey::ProfitLoss,
        }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn is_loading_clusters(&self) -> bool {
        self.loading_clusters
    }

    pub fn is_loading_analysis(&self) -> bool {
        self.loading_analysis
    }

    pub fn error(&self) -> Option<&str> {
        self.error
    }

    pub fn selected_cluster(&self) -> Option<&Cluster> {
        let id = self.selected?;
        self.clusters.iter().find(|c| c.cluster_id == id)
    }

    pub fn analysis(&self) -> Option<&AnalysisDisclosureTree> {
        self.analysis.as_ref()
    }

    pub fn analysis_mut(&mut self) -> Option<&mut AnalysisDisclosureTree> {
        self.analysis.as_mut()
    }

    /// Outcome of the startup fetch. On failure the list stays empty and a
    /// single generic message is surfaced; there is no retry.
    pub fn clusters_loaded(&mut self, result: Result<Vec<Cluster>, ApiError>) {
        self.error = None;
        match result {
            Ok(clusters) => self.clusters = clusters,
            Err(err) => {
                debug!("cluster fetch failed: {err}");
                self.error = Some(CLUSTERS_FETCH_ERROR);
            }
        }
        self.loading_clusters = false;
    }

    /// Sets the active cluster (`None` clears the selection) and discards any
    /// analysis together with its disclosure state. Chart selection, column
    /// widths, filters and axis choices are left alone. Bumps the epoch so an
    /// in-flight generation for the previous cluster can no longer land.
    pub fn select_cluster(&mut self, id: Option<ClusterId>) {
        self.selected = id;
        self.analysis = None;
        self.epoch += 1;
    }

    /// Affordance guard for the generate control: enabled only with a
    /// selection and no generation in flight.
    pub fn can_generate(&self) -> bool {
        self.selected_cluster().is_some() && !self.loading_analysis
    }

    /// Arms a generation for the selected cluster. Returns `None` (a no-op)
    /// when nothing is selected or one is already in flight. Clears the prior
    /// tree and error up front, like the page it models.
    pub fn begin_generate(&mut self) -> Option<GenerateRequest> {
        if !self.can_generate() {
            return None;
        }
        let cluster_id = self.selected_cluster()?.cluster_id;
        self.loading_analysis = true;
        self.analysis = None;
        self.error = None;
        Some(GenerateRequest {
            cluster_id,
            epoch: self.epoch,
        })
    }

    /// Completes the generation armed by `begin_generate`. A stale token
    /// (cluster switched while the request was in flight) only clears the
    /// loading flag; the payload is dropped. No cancellation exists upstream,
    /// this is the only stale-response defense.
    pub fn analysis_ready(
        &mut self,
        request: GenerateRequest,
        result: Result<AnalysisTree, ApiError>,
    ) {
        self.loading_analysis = false;
        if request.epoch != self.epoch {
            debug!(
                cluster_id = request.cluster_id,
                "discarding stale analysis response"
            );
            return;
        }
        match result {
            Ok(tree) => self.analysis = Some(AnalysisDisclosureTree::new(tree)),
            Err(err) => {
                debug!("analysis fetch failed: {err}");
                self.error = Some(ANALYSIS_FETCH_ERROR);
            }
        }
    }

    pub fn charts(&self) -> &ChartCompositionManager {
        &self.charts
    }

    pub fn charts_mut(&mut self) -> &mut ChartCompositionManager {
        &mut self.charts
    }

    pub fn columns(&self) -> &ColumnWidthModel {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnWidthModel {
        &mut self.columns
    }

    pub fn symbol_filter(&self) -> Option<&str> {
        self.symbol_filter.as_deref()
    }

    /// `None` means all symbols.
    pub fn set_symbol_filter(&mut self, symbol: Option<String>) {
        self.symbol_filter = symbol;
    }

    pub fn win_filter(&self) -> WinFilter {
        self.win_filter
    }

    pub fn set_win_filter(&mut self, filter: WinFilter) {
        self.win_filter = filter;
    }

    pub fn x_axis_metric(&self) -> MetricKey {
        self.x_axis_metric
    }

    pub fn y_axis_metric(&self) -> MetricKey {
        self.y_axis_metric
    }

    pub fn set_x_axis_metric(&mut self, metric: MetricKey) {
        self.x_axis_metric = metric;
    }

    pub fn set_y_axis_metric(&mut self, metric: MetricKey) {
        self.y_axis_metric = metric;
    }
}
