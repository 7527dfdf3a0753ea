pub mod charts;
pub mod columns;
pub mod disclosure;
pub mod metric_colors;
pub mod session;

pub use charts::{ChartCompositionManager, ChartRenderer};
pub use columns::{ColumnKey, ColumnWidthModel, TRADE_COLUMNS};
pub use disclosure::{AnalysisDisclosureTree, SubtopicKey, NO_RECOMMENDATIONS_TEXT};
pub use metric_colors::MetricTier;
pub use session::{ClusterSessionController, GenerateRequest, WinFilter};
