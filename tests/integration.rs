mod common;

use async_trait::async_trait;
use std::collections::HashMap;

use pattern_dashboard::api::{ApiError, PatternsApi};
use pattern_dashboard::dashboard::columns::ColumnKey;
use pattern_dashboard::dashboard::{
    ClusterSessionController, SubtopicKey, NO_RECOMMENDATIONS_TEXT,
};
use pattern_dashboard::models::{AnalysisTree, ChartKind, Cluster, ClusterId};

use crate::common::{branch, make_cluster};

/// A mock backend serving canned clusters and analysis trees.
struct MockApi {
    clusters: Vec<Cluster>,
    analyses: HashMap<ClusterId, AnalysisTree>,
    fail: bool,
}

impl MockApi {
    fn new(clusters: Vec<Cluster>) -> Self {
        Self {
            clusters,
            analyses: HashMap::new(),
            fail: false,
        }
    }

    fn with_analysis(mut self, cluster_id: ClusterId, tree: AnalysisTree) -> Self {
        self.analyses.insert(cluster_id, tree);
        self
    }

    fn failing() -> Self {
        Self {
            clusters: Vec::new(),
            analyses: HashMap::new(),
            fail: true,
        }
    }

    fn error() -> ApiError {
        ApiError::Payload(serde_json::from_str::<serde_json::Value>("").unwrap_err())
    }
}

#[async_trait]
impl PatternsApi for MockApi {
    async fn fetch_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        if self.fail {
            return Err(Self::error());
        }
        Ok(self.clusters.clone())
    }

    async fn fetch_analysis(&self, cluster_id: ClusterId) -> Result<AnalysisTree, ApiError> {
        if self.fail {
            return Err(Self::error());
        }
        self.analyses
            .get(&cluster_id)
            .cloned()
            .ok_or_else(Self::error)
    }
}

fn entries_tree() -> AnalysisTree {
    let mut tree = AnalysisTree::new();
    tree.insert(
        "Entries".to_string(),
        branch(&[("Timing", "Entries cluster around the London open.")]),
    );
    tree
}

async fn load(session: &mut ClusterSessionController, api: &MockApi) {
    let result = api.fetch_clusters().await;
    session.clusters_loaded(result);
}

async fn generate(session: &mut ClusterSessionController, api: &MockApi) {
    let Some(request) = session.begin_generate() else {
        return;
    };
    let result = api.fetch_analysis(request.cluster_id).await;
    session.analysis_ready(request, result);
}

#[tokio::test]
async fn analysis_walk_with_synthesized_recommendations() {
    let api = MockApi::new(vec![make_cluster(1, "A", 2)]).with_analysis(1, entries_tree());
    let mut session = ClusterSessionController::new();

    load(&mut session, &api).await;
    session.select_cluster(Some(1));
    generate(&mut session, &api).await;

    let analysis = session.analysis_mut().expect("tree generated");
    // Topic starts closed.
    assert!(!analysis.is_topic_open("Entries"));

    analysis.toggle_topic("Entries");
    assert!(analysis.is_topic_open("Entries"));

    // "Timing" is not a recommendations key, so a synthesized control appears.
    let entries = analysis.subtopic_entries("Entries");
    assert_eq!(
        entries,
        vec![SubtopicKey::named("Timing"), SubtopicKey::Recommendations]
    );

    analysis.toggle_subtopic("Entries", SubtopicKey::Recommendations);
    assert_eq!(
        analysis.open_subtopic("Entries"),
        Some(&SubtopicKey::Recommendations)
    );
    assert_eq!(
        analysis.content("Entries", &SubtopicKey::Recommendations),
        Some(NO_RECOMMENDATIONS_TEXT)
    );
}

#[tokio::test]
async fn duplicate_chart_add_keeps_selection_length_one() {
    let api = MockApi::new(vec![make_cluster(1, "A", 1)]);
    let mut session = ClusterSessionController::new();
    load(&mut session, &api).await;
    session.select_cluster(Some(1));

    session.charts_mut().add_chart(ChartKind::EquityCurve);
    session.charts_mut().add_chart(ChartKind::EquityCurve);
    assert_eq!(session.charts().active().len(), 1);
}

#[tokio::test]
async fn symbol_column_resize_and_clamp() {
    let api = MockApi::new(vec![make_cluster(1, "A", 1)]);
    let mut session = ClusterSessionController::new();
    load(&mut session, &api).await;

    assert_eq!(session.columns().width(ColumnKey::Symbol), 100);

    session.columns_mut().begin_resize(ColumnKey::Symbol, 500);
    session.columns_mut().update_resize(700);
    assert_eq!(session.columns().width(ColumnKey::Symbol), 300);

    session.columns_mut().update_resize(100);
    assert_eq!(session.columns().width(ColumnKey::Symbol), 60);
}

#[tokio::test]
async fn cluster_list_failure_yields_empty_set_and_message() {
    let api = MockApi::failing();
    let mut session = ClusterSessionController::new();
    load(&mut session, &api).await;

    assert!(session.clusters().is_empty());
    assert!(!session.is_loading_clusters());
    assert_eq!(session.error(), Some("Failed to fetch clusters."));
}

#[tokio::test]
async fn analysis_failure_leaves_prior_state() {
    // Cluster list loads, but the analysis endpoint has nothing for id 1.
    let api = MockApi::new(vec![make_cluster(1, "A", 1)]);
    let mut session = ClusterSessionController::new();
    load(&mut session, &api).await;
    session.select_cluster(Some(1));

    generate(&mut session, &api).await;

    assert!(session.analysis().is_none());
    assert_eq!(session.error(), Some("Failed to generate AI analysis."));
    assert!(!session.is_loading_analysis());
    // The failure is not fatal: a later attempt can still be armed.
    assert!(session.can_generate());
}

#[tokio::test]
async fn stale_generation_never_lands_on_new_cluster() {
    let api = MockApi::new(vec![make_cluster(1, "A", 1), make_cluster(2, "B", 1)])
        .with_analysis(1, entries_tree());
    let mut session = ClusterSessionController::new();
    load(&mut session, &api).await;

    session.select_cluster(Some(1));
    let request = session.begin_generate().expect("armed");

    // The user switches clusters before the response resolves.
    session.select_cluster(Some(2));
    let result = api.fetch_analysis(request.cluster_id).await;
    session.analysis_ready(request, result);

    assert!(session.analysis().is_none());
    assert!(!session.is_loading_analysis());
}

#[tokio::test]
async fn layout_survives_cluster_switches() {
    let api = MockApi::new(vec![make_cluster(1, "A", 1), make_cluster(2, "B", 1)])
        .with_analysis(1, entries_tree());
    let mut session = ClusterSessionController::new();
    load(&mut session, &api).await;

    session.charts_mut().add_chart(ChartKind::ClusterScatterPlot);
    session.columns_mut().begin_resize(ColumnKey::Drawdown, 0);
    session.columns_mut().update_resize(90);
    session.columns_mut().end_resize();

    session.select_cluster(Some(1));
    generate(&mut session, &api).await;
    assert!(session.analysis().is_some());

    session.select_cluster(Some(2));
    assert!(session.analysis().is_none());
    assert_eq!(session.charts().active(), &[ChartKind::ClusterScatterPlot]);
    assert_eq!(session.columns().width(ColumnKey::Drawdown), 200);
}
