//! Cartesian expansion of source rule entries.
//!
//! Each authored rule entry groups lists of schema, table and column name
//! patterns under `object-locators`. Expansion produces one concrete rule
//! per combination, iterating dimensions in fixed order (schema outermost,
//! column innermost) so that column varies fastest. This ordering, together
//! with YAML document order for rule-types, rule-actions and entries, fully
//! determines the output rule order.

use serde_json::Value as JsonValue;
use serde_yaml_ng::{Mapping, Value as YamlValue};

use crate::error::{Result, TablemapError};
use crate::source::SourceDocument;

/// One expanded (not yet numbered) rule, keyed by output field name.
///
/// `serde_json::Map` is BTreeMap-backed, so keys serialize in
/// lexicographic order without any extra sorting step.
pub type Rule = serde_json::Map<String, JsonValue>;

const LOCATORS_KEY: &str = "object-locators";

/// Expand every rule entry of a validated source document.
///
/// All entries are expanded and all are returned; there is no duplicate
/// suppression and no filtering by rule-type or rule-action.
pub fn expand(source: &SourceDocument) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for (rule_type, actions) in source.as_mapping() {
        let rule_type = string_key(rule_type)?;
        let actions = actions
            .as_mapping()
            .ok_or_else(|| malformed(format!("rule-type '{rule_type}' is not a mapping")))?;

        for (rule_action, entries) in actions {
            let rule_action = string_key(rule_action)?;
            let entries = entries.as_sequence().ok_or_else(|| {
                malformed(format!("rule-action '{rule_action}' is not a sequence"))
            })?;

            for entry in entries {
                let entry = entry
                    .as_mapping()
                    .ok_or_else(|| malformed("rule entry is not a mapping".to_string()))?;
                let locators = entry
                    .get(LOCATORS_KEY)
                    .and_then(YamlValue::as_mapping)
                    .ok_or_else(|| {
                        malformed("rule entry has no object-locators mapping".to_string())
                    })?;

                for location in object_locations(locators)? {
                    let mut rule = Rule::new();
                    rule.insert("object-locator".to_string(), JsonValue::Object(location));
                    rule.insert(
                        "rule-type".to_string(),
                        JsonValue::String(rule_type.to_string()),
                    );
                    rule.insert(
                        "rule-action".to_string(),
                        JsonValue::String(rule_action.to_string()),
                    );

                    // Shallow copy of the entry's pass-through fields,
                    // excluding the one reserved key.
                    for (key, value) in entry {
                        let key = string_key(key)?;
                        if key == LOCATORS_KEY {
                            continue;
                        }
                        rule.insert(key.to_string(), serde_json::to_value(value)?);
                    }

                    rules.push(rule);
                }
            }
        }
    }

    Ok(rules)
}

/// All concrete (schema, table, column) combinations for one
/// `object-locators` mapping.
///
/// An absent dimension contributes no key to any location. A present but
/// empty dimension contributes zero combinations, so the entry expands to
/// zero rules.
fn object_locations(locators: &Mapping) -> Result<Vec<serde_json::Map<String, JsonValue>>> {
    let schemas = dimension(locators, "schema-names")?;
    let tables = dimension(locators, "table-names")?;
    let columns = dimension(locators, "column-names")?;

    let mut locations = Vec::new();
    for schema_name in choices(&schemas) {
        for table_name in choices(&tables) {
            for column_name in choices(&columns) {
                let mut location = serde_json::Map::new();
                if let Some(name) = schema_name {
                    location.insert("schema-name".to_string(), JsonValue::String(name.clone()));
                }
                if let Some(name) = table_name {
                    location.insert("table-name".to_string(), JsonValue::String(name.clone()));
                }
                if let Some(name) = column_name {
                    location.insert("column-name".to_string(), JsonValue::String(name.clone()));
                }
                locations.push(location);
            }
        }
    }
    Ok(locations)
}

/// Read one locator dimension as an optional list of name patterns.
///
/// Absent key and empty list are distinct: `None` vs `Some(vec![])`.
fn dimension(locators: &Mapping, key: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = locators.get(key) else {
        return Ok(None);
    };
    let names = value
        .as_sequence()
        .ok_or_else(|| malformed(format!("'{key}' is not a sequence")))?
        .iter()
        .map(|name| {
            name.as_str()
                .map(String::from)
                .ok_or_else(|| malformed(format!("'{key}' contains a non-string entry")))
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(Some(names))
}

/// Iteration choices for one dimension. The `None` choice is an internal
/// sentinel meaning "omit this field"; it never reaches the output.
fn choices(dim: &Option<Vec<String>>) -> Vec<Option<&String>> {
    match dim {
        None => vec![None],
        Some(names) => names.iter().map(Some).collect(),
    }
}

fn string_key(key: &YamlValue) -> Result<&str> {
    key.as_str()
        .ok_or_else(|| malformed("mapping key is not a string".to_string()))
}

fn malformed(message: String) -> TablemapError {
    TablemapError::Malformed(message)
}
