pub mod analysis;
pub mod chart;
pub mod cluster;
pub mod metric;

pub use analysis::{AnalysisNode, AnalysisResponse, AnalysisTree};
pub use chart::ChartKind;
pub use cluster::{Cluster, ClusterId, Trade};
pub use metric::MetricKey;
