//! Output rendering for mind maps (JSON and terminal tree)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use termtree::Tree;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::MindMapNode;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested JSON objects, `{}` for a leaf
    #[default]
    Json,
    /// Indented tree for the terminal
    Tree,
}

/// How node keys are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyStyle {
    /// Bare label: `itesm`
    #[default]
    Label,
    /// Full suffix: `itesm.mx`
    Qualified,
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for MindMapNode {
    fn to_tree_string(&self) -> Tree<String> {
        fn leaves(node: &MindMapNode) -> Vec<Tree<String>> {
            node.children()
                .map(|(label, child)| Tree::new(label.clone()).with_leaves(leaves(child)))
                .collect()
        }

        Tree::new(".".to_string()).with_leaves(leaves(self))
    }
}

/// Renders a tree according to output settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub format: OutputFormat,
    pub keys: KeyStyle,
    /// Single-line JSON
    pub compact: bool,
}

impl Renderer {
    pub fn render(&self, tree: &MindMapNode) -> ApplicationResult<String> {
        let qualified;
        let tree = match self.keys {
            KeyStyle::Label => tree,
            KeyStyle::Qualified => {
                qualified = tree.qualified();
                &qualified
            }
        };

        match self.format {
            OutputFormat::Json => {
                let json = if self.compact {
                    serde_json::to_string(tree)
                } else {
                    serde_json::to_string_pretty(tree)
                };
                json.map_err(|e| ApplicationError::Render {
                    message: e.to_string(),
                })
            }
            OutputFormat::Tree => Ok(tree.to_tree_string().to_string()),
        }
    }
}
