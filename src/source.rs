//! Source document loading, validation and compilation.
//!
//! A source is a terse YAML description of replication intent: a top-level
//! mapping from rule-type to rule-action to a list of rule entries. This
//! module reads and validates sources and drives the compile pipeline
//! (load, expand, number, render).

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml_ng::{Mapping, Value as YamlValue};
use tracing::debug;

use crate::error::{Result, TablemapError};
use crate::expand;
use crate::mapping::MappingTable;
use crate::schema::SchemaValidator;

/// A parsed and schema-validated source document.
///
/// Holds the YAML mapping rather than a JSON value so that rule-types,
/// rule-actions and entries keep their authored document order.
pub struct SourceDocument {
    document: Mapping,
}

impl SourceDocument {
    /// Parse and validate a source document from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: YamlValue = serde_yaml_ng::from_str(content)?;

        // The schema validator operates on JSON values; the ordered YAML
        // mapping stays authoritative for expansion.
        let json = serde_json::to_value(&value)?;
        SchemaValidator::new()?.validate(&json)?;
        debug!("source document validated");

        match value {
            YamlValue::Mapping(document) => Ok(Self { document }),
            _ => Err(TablemapError::Malformed(
                "top-level value is not a mapping".to_string(),
            )),
        }
    }

    /// Parse and validate a source document from a file.
    ///
    /// The path is checked for readability before any parsing, so a missing
    /// file reports `InvalidSource` rather than a parse error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TablemapError::InvalidSource(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// The validated top-level mapping, in document order.
    pub fn as_mapping(&self) -> &Mapping {
        &self.document
    }
}

/// A source file and the functionality to compile it to a mapping table.
pub struct Source {
    file_path: PathBuf,
}

impl Source {
    /// Create a source for the given file path.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Compile the source file to a mapping table JSON document.
    pub fn compile(&self) -> Result<String> {
        debug!("compiling {}", self.file_path.display());
        let document = SourceDocument::from_file(&self.file_path)?;
        let rules = expand::expand(&document)?;
        debug!("expanded {} rules", rules.len());
        MappingTable::new(rules).to_json()
    }
}
