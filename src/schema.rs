//! Declarative validation of source documents.
//!
//! The shape contract lives in `schema/source-schema.json` (JSON Schema
//! draft-07) and is compiled in at build time. Rule-types and rule-actions
//! are open-ended string keys; only the `object-locators` sub-keys are
//! constrained to the three recognized names.

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{Result, TablemapError};

const SOURCE_SCHEMA_JSON: &str = include_str!("../schema/source-schema.json");

/// Validates parsed source documents against the embedded source schema.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Create a new schema validator from the embedded schema.
    pub fn new() -> Result<Self> {
        let schema: Value = serde_json::from_str(SOURCE_SCHEMA_JSON)
            .map_err(|e| TablemapError::SchemaLoad(e.to_string()))?;

        let validator = Validator::new(&schema)
            .map_err(|e| TablemapError::SchemaLoad(format!("failed to compile schema: {e}")))?;

        Ok(Self { validator })
    }

    /// Validate a parsed source document.
    ///
    /// Returns `Ok(())` if valid, or `Err(SchemaValidation)` carrying the
    /// validator's description of each violation, first violation first.
    pub fn validate(&self, value: &Value) -> Result<()> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(value)
            .map(|e| {
                let path = e.instance_path().to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TablemapError::SchemaValidation { errors })
        }
    }
}
