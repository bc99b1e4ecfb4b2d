//! Domain layer: entities and tree construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;

pub use builder::{TreeBuilder, TreeResult};
pub use entities::{LabelPolicy, LabelSequence, MindMapNode};
pub use error::DomainError;
