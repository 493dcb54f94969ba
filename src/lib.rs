//! tablemap
//!
//! Compiles terse YAML descriptions of database object selection and
//! transformation intent into fully-enumerated DMS mapping tables (JSON).
//! Grouped locator lists (schema names x table names x column names) are
//! expanded into the cartesian product of individual rules, each assigned
//! a stable 1-based identity.
//!
//! # Example
//!
//! ```no_run
//! use tablemap::Source;
//!
//! let mapping_table = Source::new("mappings.yaml").compile()?;
//! println!("{mapping_table}");
//! # Ok::<(), tablemap::TablemapError>(())
//! ```
//!
//! # Architecture
//!
//! - [`source`]: source file loading, validation and compile pipeline
//! - [`schema`]: declarative schema validation of parsed sources
//! - [`expand`]: cartesian expansion of rule entries
//! - [`mapping`]: rule numbering and canonical JSON rendering
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod cli;
pub mod error;
pub mod expand;
pub mod mapping;
pub mod schema;
pub mod source;

// Re-export commonly used items
pub use error::{Result, TablemapError};
pub use expand::{expand, Rule};
pub use mapping::MappingTable;
pub use schema::SchemaValidator;
pub use source::{Source, SourceDocument};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
