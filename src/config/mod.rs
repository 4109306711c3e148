//! Configuration for the lattice service.

mod settings;

pub use settings::{Config, GraphConfig, ParserConfig, ServerConfig, SourceConfig};
