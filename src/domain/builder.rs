//! Tree builder folding domain strings into a mind map.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::domain::entities::{LabelPolicy, LabelSequence, MindMapNode};
use crate::domain::error::DomainError;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Constructs mind maps from domain strings.
///
/// Lines are trimmed; blank lines contribute nothing. Empty labels are
/// handled according to the configured [`LabelPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    policy: LabelPolicy,
    lowercase: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: LabelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fold labels to ASCII lowercase before insertion.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn policy(&self) -> LabelPolicy {
        self.policy
    }

    /// Labels to insert for one input line, `None` if the line adds nothing.
    ///
    /// `line` is 1-based and only used for error reporting.
    pub fn labels_for(&self, line: usize, domain: &str) -> TreeResult<Option<LabelSequence>> {
        let trimmed = domain.trim();
        if trimmed.is_empty() {
            trace!("line {}: blank, skipped", line);
            return Ok(None);
        }

        let mut labels = LabelSequence::parse(trimmed);
        if self.lowercase {
            labels = labels.to_ascii_lowercase();
        }

        if labels.has_empty_label() {
            match self.policy {
                LabelPolicy::Strict => {
                    return Err(DomainError::MalformedDomain {
                        line,
                        domain: trimmed.to_string(),
                    });
                }
                LabelPolicy::Lenient => {
                    debug!("line {}: dropping empty labels in {:?}", line, trimmed);
                    labels = labels.without_empty_labels();
                    if labels.is_empty() {
                        return Ok(None);
                    }
                }
            }
        }

        Ok(Some(labels))
    }

    /// Insert one domain into `root`. Returns `true` if the tree grew.
    pub fn insert(&self, root: &mut MindMapNode, line: usize, domain: &str) -> TreeResult<bool> {
        match self.labels_for(line, domain)? {
            Some(labels) => Ok(root.insert_path(labels)),
            None => Ok(false),
        }
    }

    /// Fold `domains` into an existing tree, in order.
    pub fn extend<I, S>(&self, root: &mut MindMapNode, domains: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (idx, domain) in domains.into_iter().enumerate() {
            self.insert(root, idx + 1, domain.as_ref())?;
        }
        Ok(())
    }

    /// Build a fresh tree from `domains`.
    pub fn build<I, S>(&self, domains: I) -> TreeResult<MindMapNode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = MindMapNode::new();
        self.extend(&mut root, domains)?;
        debug!("built tree with {} top-level labels", root.len());
        Ok(root)
    }

    /// Build a tree on the rayon pool.
    ///
    /// Each worker folds into a private tree; partial trees are merged. The
    /// result equals [`TreeBuilder::build`], including which malformed line
    /// is reported in strict mode (the first one).
    pub fn build_parallel<S>(&self, domains: &[S]) -> TreeResult<MindMapNode>
    where
        S: AsRef<str> + Sync,
    {
        if self.policy == LabelPolicy::Strict {
            let first_error = domains
                .par_iter()
                .enumerate()
                .find_map_first(|(idx, domain)| self.labels_for(idx + 1, domain.as_ref()).err());
            if let Some(err) = first_error {
                return Err(err);
            }
        }

        let root = domains
            .par_iter()
            .enumerate()
            .fold(MindMapNode::new, |mut tree, (idx, domain)| {
                if let Ok(Some(labels)) = self.labels_for(idx + 1, domain.as_ref()) {
                    tree.insert_path(labels);
                }
                tree
            })
            .reduce(MindMapNode::new, |mut left, right| {
                left.merge(right);
                left
            });
        debug!("built tree in parallel with {} top-level labels", root.len());
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(".")]
    #[case("..")]
    fn given_line_without_labels_when_lenient_then_skipped(#[case] line: &str) {
        let builder = TreeBuilder::new();
        assert_eq!(builder.labels_for(1, line), Ok(None));
    }

    #[rstest]
    #[case("example.com.", &["com", "example"])]
    #[case(".example.com", &["com", "example"])]
    #[case("a..example.com", &["com", "example", "a"])]
    #[case("  example.com\r", &["com", "example"])]
    fn given_empty_labels_when_lenient_then_dropped(#[case] line: &str, #[case] expected: &[&str]) {
        let builder = TreeBuilder::new();
        let labels = builder.labels_for(1, line).unwrap().unwrap();
        assert_eq!(labels.as_slice(), expected);
    }

    #[test]
    fn given_empty_label_when_strict_then_errors_with_line_number() {
        let builder = TreeBuilder::new().with_policy(LabelPolicy::Strict);
        let result = builder.build(["ok.com", "", "bad..com"]);
        assert_eq!(
            result,
            Err(DomainError::MalformedDomain {
                line: 3,
                domain: "bad..com".to_string()
            })
        );
    }

    #[test]
    fn given_mixed_case_when_lowercase_then_folds_labels() {
        let builder = TreeBuilder::new().with_lowercase(true);
        let tree = builder.build(["WWW.Example.COM", "www.example.com"]).unwrap();
        assert_eq!(tree.node_count(), 3);
        assert!(tree.contains_path(&["com", "example", "www"]));
    }

    #[test]
    fn given_mixed_case_when_verbatim_then_keeps_distinct_labels() {
        let tree = TreeBuilder::new().build(["Example.com", "example.com"]).unwrap();
        assert_eq!(tree.get("com").map(MindMapNode::len), Some(2));
    }

    #[test]
    fn given_existing_domain_when_inserting_then_tree_unchanged() {
        let builder = TreeBuilder::new();
        let mut root = builder.build(["mty.itesm.mx"]).unwrap();
        let before = root.clone();

        assert!(!builder.insert(&mut root, 2, "mty.itesm.mx").unwrap());
        assert!(!builder.insert(&mut root, 3, "itesm.mx").unwrap());
        assert_eq!(root, before);
    }

    #[test]
    fn given_strict_policy_when_building_in_parallel_then_reports_first_malformed_line() {
        let domains: Vec<String> = (0..500)
            .map(|i| {
                if i == 120 || i == 400 {
                    format!("bad..{}.com", i)
                } else {
                    format!("host{}.com", i)
                }
            })
            .collect();
        let builder = TreeBuilder::new().with_policy(LabelPolicy::Strict);

        let err = builder.build_parallel(&domains).unwrap_err();

        assert_eq!(
            err,
            DomainError::MalformedDomain {
                line: 121,
                domain: "bad..120.com".to_string()
            }
        );
    }
}
