use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the server-supplied analysis breakdown: either leaf text or a
/// nested topic map. Any other JSON shape (number, array, bool) is rejected at
/// ingestion instead of rendering as nothing later.
///
/// BTreeMap keeps per-level keys unique and iteration order stable across
/// re-renders, which the disclosure state relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisNode {
    Leaf(String),
    Branch(BTreeMap<String, AnalysisNode>),
}

impl AnalysisNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            AnalysisNode::Leaf(text) => Some(text),
            AnalysisNode::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&BTreeMap<String, AnalysisNode>> {
        match self {
            AnalysisNode::Leaf(_) => None,
            AnalysisNode::Branch(children) => Some(children),
        }
    }
}

/// Main topic -> subtopic structure for one cluster. Replaced wholesale on
/// every generation, never merged.
pub type AnalysisTree = BTreeMap<String, AnalysisNode>;

/// Wire envelope of `GET /api/patterns/{id}/analysis`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: AnalysisTree,
}
