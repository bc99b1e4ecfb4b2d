//! Domain mind maps: group domain names by suffix, top-level label first.
//!
//! ```
//! use dommap::application::services::MindMapService;
//! use dommap::infrastructure::traits::StaticLineSource;
//!
//! let source = StaticLineSource::new(["a.b.com", "c.com"]);
//! let tree = MindMapService::default().build_tree(&source).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&tree).unwrap(),
//!     r#"{"com":{"b":{"a":{}},"c":{}}}"#
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
