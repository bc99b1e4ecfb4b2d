//! Error conversion helpers for line source reads
//!
//! Provides an extension trait for attaching the source name to I/O errors.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Name the input the I/O error came from.
    ///
    /// # Example
    /// ```ignore
    /// source.read_lines()
    ///     .with_source_context(&source.describe())?;
    /// ```
    fn with_source_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_source_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Source {
            context: context.to_string(),
            source: e,
        })
    }
}
