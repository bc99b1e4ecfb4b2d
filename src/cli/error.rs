//! CLI-level errors (wraps infrastructure errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::Source { source, .. } => match source.kind() {
                        io::ErrorKind::NotFound => crate::exitcode::NOINPUT,
                        _ => crate::exitcode::IOERR,
                    },
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::Render { .. } => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_missing_input_when_mapping_exit_code_then_noinput() {
        let err = CliError::from(ApplicationError::Source {
            context: "missing.txt".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        });
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_malformed_domain_when_mapping_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::Domain(DomainError::MalformedDomain {
            line: 1,
            domain: "a..b".into(),
        }));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn given_usage_error_when_mapping_exit_code_then_usage() {
        assert_eq!(CliError::Usage("x".into()).exit_code(), crate::exitcode::USAGE);
    }
}
