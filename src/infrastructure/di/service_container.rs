//! Service container for dependency injection
//!
//! Wires up services and line sources from settings.

use std::path::Path;
use std::sync::Arc;

use crate::application::services::MindMapService;
use crate::application::Renderer;
use crate::config::Settings;
use crate::infrastructure::traits::{FileLineSource, LineSource, StdinLineSource};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Mind map builder
    pub mindmap: MindMapService,
}

impl ServiceContainer {
    /// Create a new service container from settings.
    pub fn new(settings: Settings) -> Self {
        let mindmap = MindMapService::new(settings.tree_builder()).with_parallel(settings.parallel);
        Self {
            settings: Arc::new(settings),
            mindmap,
        }
    }

    /// Line source for a CLI input argument; `None` or `-` means stdin.
    pub fn line_source(&self, input: Option<&Path>) -> Box<dyn LineSource> {
        match input {
            Some(path) if path != Path::new("-") => Box::new(FileLineSource::new(path)),
            _ => Box::new(StdinLineSource),
        }
    }

    /// Renderer for the configured output settings.
    pub fn renderer(&self) -> Renderer {
        Renderer {
            format: self.settings.format,
            keys: self.settings.keys,
            compact: self.settings.compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LabelPolicy;
    use crate::infrastructure::traits::StaticLineSource;

    #[test]
    fn given_dash_when_resolving_input_then_reads_stdin() {
        let container = ServiceContainer::new(Settings::default());
        assert_eq!(container.line_source(None).describe(), "<stdin>");
        assert_eq!(container.line_source(Some(Path::new("-"))).describe(), "<stdin>");
        assert_eq!(
            container.line_source(Some(Path::new("domains.txt"))).describe(),
            "domains.txt"
        );
    }

    #[test]
    fn given_strict_settings_when_building_then_service_rejects_malformed() {
        let settings = Settings {
            policy: LabelPolicy::Strict,
            ..Settings::default()
        };
        let container = ServiceContainer::new(settings);
        let source = StaticLineSource::new(["a..com"]);

        assert!(container.mindmap.build_tree(&source).is_err());
    }
}
