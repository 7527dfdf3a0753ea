//! Two-level disclosure state over a server-supplied analysis tree.
//!
//! Topics open and close independently; under an open topic at most one
//! subtopic is open at a time. Every topic additionally offers a single
//! "Recommendations" entry: the real subtopic when one exists under any
//! casing, otherwise a synthesized one backed by a fixed fallback text. The
//! synthesized entry is its own enum variant, so a real subtopic literally
//! named "Recommendations" can never collide with it.

use std::collections::BTreeMap;

use crate::models::{AnalysisNode, AnalysisTree};

/// Shown when the synthesized Recommendations entry is opened.
pub const NO_RECOMMENDATIONS_TEXT: &str = "No recommendations available for this topic.";

/// Identity of one subtopic row under a topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubtopicKey {
    /// A real subtopic from the analysis tree.
    Named(String),
    /// The synthesized Recommendations entry (offered only when the topic has
    /// no real case-insensitive "recommendations" subtopic).
    Recommendations,
}

impl SubtopicKey {
    pub fn named(name: impl Into<String>) -> Self {
        SubtopicKey::Named(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            SubtopicKey::Named(name) => name,
            SubtopicKey::Recommendations => "Recommendations",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisDisclosureTree {
    tree: AnalysisTree,
    open_topics: BTreeMap<String, bool>,
    open_subtopics: BTreeMap<String, SubtopicKey>,
}

impl AnalysisDisclosureTree {
    pub fn new(tree: AnalysisTree) -> Self {
        Self {
            tree,
            open_topics: BTreeMap::new(),
            open_subtopics: BTreeMap::new(),
        }
    }

    pub fn tree(&self) -> &AnalysisTree {
        &self.tree
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Main topics in stable render order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.tree.keys().map(String::as_str)
    }

    pub fn is_topic_open(&self, topic: &str) -> bool {
        self.open_topics.get(topic).copied().unwrap_or(false)
    }

    pub fn open_subtopic(&self, topic: &str) -> Option<&SubtopicKey> {
        self.open_subtopics.get(topic)
    }

    /// Flips `topic` open or closed. Always clears the topic's open subtopic,
    /// even when the flip lands on open, so re-entering a topic never shows a
    /// stale expanded subtopic. Sibling topics are untouched.
    pub fn toggle_topic(&mut self, topic: &str) {
        let open = self.open_topics.entry(topic.to_string()).or_insert(false);
        *open = !*open;
        self.open_subtopics.remove(topic);
    }

    /// Opens `subtopic` under `topic`, closing whichever subtopic was open
    /// there; toggling the already-open subtopic closes it.
    pub fn toggle_subtopic(&mut self, topic: &str, subtopic: SubtopicKey) {
        if self.open_subtopics.get(topic) == Some(&subtopic) {
            self.open_subtopics.remove(topic);
        } else {
            self.open_subtopics.insert(topic.to_string(), subtopic);
        }
    }

    /// Subtopic rows offered under `topic`: every real subtopic in tree order,
    /// then the synthesized Recommendations entry unless a real one exists. A
    /// topic whose node is leaf text has no real subtopics, so it offers the
    /// synthesized entry alone. Exactly one Recommendations row, always.
    pub fn subtopic_entries(&self, topic: &str) -> Vec<SubtopicKey> {
        let Some(node) = self.tree.get(topic) else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        let mut has_recommendations = false;
        if let Some(children) = node.as_branch() {
            for name in children.keys() {
                if name.eq_ignore_ascii_case("recommendations") {
                    has_recommendations = true;
                }
                entries.push(SubtopicKey::named(name));
            }
        }
        if !has_recommendations {
            entries.push(SubtopicKey::Recommendations);
        }
        entries
    }

    /// Text shown when `subtopic` is open under `topic`. `None` for unknown
    /// names and for subtopics whose value is itself a nested mapping.
    pub fn content(&self, topic: &str, subtopic: &SubtopicKey) -> Option<&str> {
        match subtopic {
            SubtopicKey::Named(name) => self
                .tree
                .get(topic)?
                .as_branch()?
                .get(name)
                .and_then(AnalysisNode::as_leaf),
            SubtopicKey::Recommendations => Some(NO_RECOMMENDATIONS_TEXT),
        }
    }
}
