//! Domain entities: label sequences and the mind-map tree

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How empty labels (blank components between dots) are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Drop empty labels: `a..b` is `a.b`, `example.com.` is `example.com`
    #[default]
    Lenient,
    /// Reject any line containing an empty label
    Strict,
}

/// Labels of one domain, top-level label first.
///
/// `web8.mty.itesm.mx` becomes `["mx", "itesm", "mty", "web8"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSequence(Vec<String>);

impl LabelSequence {
    /// Split a domain on `.` and reverse the labels.
    ///
    /// Labels are kept verbatim, empty ones included.
    pub fn parse(domain: &str) -> Self {
        Self(domain.split('.').rev().map(str::to_string).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_empty_label(&self) -> bool {
        self.0.iter().any(String::is_empty)
    }

    pub fn without_empty_labels(self) -> Self {
        Self(self.0.into_iter().filter(|l| !l.is_empty()).collect())
    }

    pub fn to_ascii_lowercase(&self) -> Self {
        Self(self.0.iter().map(|l| l.to_ascii_lowercase()).collect())
    }

    /// Join back into dotted form, most specific label first.
    pub fn to_domain(&self) -> String {
        let mut labels: Vec<&str> = self.0.iter().map(String::as_str).collect();
        labels.reverse();
        labels.join(".")
    }
}

impl IntoIterator for LabelSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A node of the domain mind map.
///
/// Children are keyed by label; a leaf is a node without children. The root
/// node holds the top-level labels. Serializes as nested JSON objects, `{}`
/// for a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MindMapNode {
    children: BTreeMap<String, MindMapNode>,
}

impl MindMapNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&MindMapNode> {
        self.children.get(label)
    }

    pub fn children(&self) -> impl Iterator<Item = (&String, &MindMapNode)> {
        self.children.iter()
    }

    /// Walk `labels` from this node, creating missing children on the way.
    ///
    /// Returns `true` if at least one node was created.
    pub fn insert_path<I, S>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut created = false;
        let mut node = self;
        for label in labels {
            node = match node.children.entry(label.into()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    created = true;
                    entry.insert(MindMapNode::new())
                }
            };
        }
        created
    }

    pub fn contains_path<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        let mut node = self;
        for label in labels {
            match node.children.get(label.as_ref()) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Union `other` into this tree.
    pub fn merge(&mut self, other: MindMapNode) {
        for (label, child) in other.children {
            match self.children.entry(label) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(child),
                Entry::Vacant(entry) => {
                    entry.insert(child);
                }
            }
        }
    }

    /// Length of the longest label path below this node.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Number of leaves below this node.
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|child| if child.is_leaf() { 1 } else { child.leaf_count() })
            .sum()
    }

    /// Number of nodes below this node.
    pub fn node_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.node_count())
            .sum()
    }

    /// Every node below this one as a dotted domain, depth first in key order.
    pub fn domains(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.node_count());
        self.collect_domains(None, &mut out);
        out
    }

    fn collect_domains(&self, suffix: Option<&str>, out: &mut Vec<String>) {
        for (label, child) in &self.children {
            let domain = qualify(label, suffix);
            out.push(domain.clone());
            child.collect_domains(Some(&domain), out);
        }
    }

    /// Copy of this tree keyed by fully qualified suffix instead of label.
    ///
    /// `{"mx": {"itesm": {}}}` becomes `{"mx": {"itesm.mx": {}}}`.
    pub fn qualified(&self) -> MindMapNode {
        self.rekey(None)
    }

    fn rekey(&self, suffix: Option<&str>) -> MindMapNode {
        let children = self
            .children
            .iter()
            .map(|(label, child)| {
                let key = qualify(label, suffix);
                let node = child.rekey(Some(&key));
                (key, node)
            })
            .collect();
        MindMapNode { children }
    }
}

fn qualify(label: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{}.{}", label, suffix),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_domain_when_parsing_then_reverses_labels() {
        let labels = LabelSequence::parse("web8.mty.itesm.mx");
        assert_eq!(labels.as_slice(), &["mx", "itesm", "mty", "web8"]);
        assert_eq!(labels.to_domain(), "web8.mty.itesm.mx");
    }

    #[test]
    fn given_consecutive_dots_when_parsing_then_keeps_empty_label() {
        let labels = LabelSequence::parse("a..b");
        assert!(labels.has_empty_label());
        assert_eq!(labels.without_empty_labels().as_slice(), &["b", "a"]);
    }

    #[test]
    fn given_new_path_when_inserting_then_reports_creation() {
        let mut root = MindMapNode::new();
        assert!(root.insert_path(["com", "example"]));
        assert!(!root.insert_path(["com", "example"]));
        assert!(!root.insert_path(["com"]));
        assert!(root.contains_path(&["com", "example"]));
        assert!(!root.contains_path(&["com", "other"]));
    }

    #[test]
    fn given_two_trees_when_merging_then_unions_paths() {
        let mut left = MindMapNode::new();
        left.insert_path(["com", "a"]);
        let mut right = MindMapNode::new();
        right.insert_path(["com", "b"]);
        right.insert_path(["org"]);

        left.merge(right);

        assert_eq!(left.len(), 2);
        assert_eq!(left.get("com").map(MindMapNode::len), Some(2));
    }

    #[test]
    fn given_tree_when_measuring_then_counts_depth_leaves_and_nodes() {
        let mut root = MindMapNode::new();
        root.insert_path(["mx", "itesm", "mty", "web8"]);
        root.insert_path(["mx", "tecreview"]);

        assert_eq!(root.depth(), 4);
        assert_eq!(root.leaf_count(), 2);
        assert_eq!(root.node_count(), 5);
        assert_eq!(MindMapNode::new().leaf_count(), 0);
    }

    #[test]
    fn given_tree_when_listing_domains_then_joins_suffixes() {
        let mut root = MindMapNode::new();
        root.insert_path(["mx", "itesm", "mty"]);

        assert_eq!(root.domains(), vec!["mx", "itesm.mx", "mty.itesm.mx"]);
    }

    #[test]
    fn given_tree_when_qualifying_then_keys_are_full_suffixes() {
        let mut root = MindMapNode::new();
        root.insert_path(["mx", "itesm", "mty"]);

        let qualified = root.qualified();

        assert!(qualified.contains_path(&["mx", "itesm.mx", "mty.itesm.mx"]));
        assert_eq!(qualified.node_count(), root.node_count());
    }

    #[test]
    fn given_leaf_when_serializing_then_is_empty_object() {
        let mut root = MindMapNode::new();
        root.insert_path(["com", "c"]);
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, r#"{"com":{"c":{}}}"#);
    }
}
