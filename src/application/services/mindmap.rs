//! Mind map service
//!
//! Reads domains from a line source and folds them into a mind map.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{MindMapNode, TreeBuilder};
use crate::infrastructure::traits::LineSource;

/// Service building domain mind maps from injected line sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct MindMapService {
    builder: TreeBuilder,
    parallel: bool,
}

impl MindMapService {
    /// Create a new mind map service.
    pub fn new(builder: TreeBuilder) -> Self {
        Self {
            builder,
            parallel: false,
        }
    }

    /// Fold on the rayon pool instead of the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the mind map for every domain the source yields.
    ///
    /// A failing source aborts the build: its error is returned (as the
    /// `source()` of [`ApplicationError::Source`](crate::application::ApplicationError::Source))
    /// and no tree is produced.
    #[instrument(level = "debug", skip_all, fields(source = %source.describe()))]
    pub fn build_tree(&self, source: &dyn LineSource) -> ApplicationResult<MindMapNode> {
        let lines = source
            .read_lines()
            .with_source_context(&source.describe())?;
        debug!(
            "build_tree: {} lines, policy={:?}, parallel={}",
            lines.len(),
            self.builder.policy(),
            self.parallel
        );

        let tree = if self.parallel {
            self.builder.build_parallel(lines.as_slice())?
        } else {
            self.builder.build(&lines)?
        };

        info!(
            "mind map: {} top-level labels, {} nodes, depth {}",
            tree.len(),
            tree.node_count(),
            tree.depth()
        );
        Ok(tree)
    }
}
