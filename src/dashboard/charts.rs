use anyhow::Result;

use crate::models::{ChartKind, Trade};

/// Rendering collaborator for one chart kind. Implementations own their visual
/// encoding; the core hands over the active cluster's trades unmodified and
/// never inspects the output.
pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;
    fn render(&mut self, trades: &[Trade]) -> Result<()>;
}

/// The ordered set of charts currently on screen. Order is addition order;
/// duplicates are impossible. Deliberately survives cluster switches so the
/// user's layout stays put while browsing.
#[derive(Debug, Clone, Default)]
pub struct ChartCompositionManager {
    active: Vec<ChartKind>,
}

impl ChartCompositionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[ChartKind] {
        &self.active
    }

    pub fn is_active(&self, kind: ChartKind) -> bool {
        self.active.contains(&kind)
    }

    /// Kinds still offered by the picker, i.e. everything not already active.
    pub fn selectable(&self) -> Vec<ChartKind> {
        ChartKind::ALL
            .into_iter()
            .filter(|kind| !self.is_active(*kind))
            .collect()
    }

    /// Appends `kind` unless already present. Re-adding is a silent no-op.
    pub fn add_chart(&mut self, kind: ChartKind) {
        if !self.is_active(kind) {
            self.active.push(kind);
        }
    }

    /// Removes `kind` if present; survivors keep their relative order.
    pub fn remove_chart(&mut self, kind: ChartKind) {
        self.active.retain(|k| *k != kind);
    }
}
