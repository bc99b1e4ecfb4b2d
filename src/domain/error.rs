//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent input the tree builder refuses to insert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed domain on line {line}: {domain:?} contains an empty label")]
    MalformedDomain { line: usize, domain: String },
}
