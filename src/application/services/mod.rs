//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (LineSource) but are themselves
//! concrete structs, not traits.

mod mindmap;

pub use mindmap::MindMapService;
