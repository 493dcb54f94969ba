//! The mapping table: rule numbering and canonical JSON rendering.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::expand::Rule;

/// The final artifact consumed by the downstream replication engine:
/// `{"rules": [...]}` with every rule carrying a `rule-id` and `rule-name`.
pub struct MappingTable {
    rules: Vec<Rule>,
}

impl MappingTable {
    /// Create a mapping table from an ordered sequence of expanded rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Number the rules and render the canonical JSON document.
    ///
    /// Keys are sorted lexicographically at every level (the rules are
    /// BTreeMap-backed) and the document is indented with four spaces, so
    /// repeated compiles of identical input match byte for byte.
    pub fn to_json(mut self) -> Result<String> {
        self.number_rules();

        let mut document = serde_json::Map::new();
        document.insert(
            "rules".to_string(),
            JsonValue::Array(self.rules.into_iter().map(JsonValue::Object).collect()),
        );

        let mut out = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        document.serialize(&mut serializer)?;

        #[allow(clippy::expect_used)] // serde_json always emits valid UTF-8
        let text = String::from_utf8(out).expect("serde_json emits UTF-8");
        Ok(text)
    }

    /// Add `rule-id` and `rule-name` to each rule. Rules are numbered from
    /// 1 by final sequence position; an author-supplied `rule-name` is
    /// never overwritten.
    fn number_rules(&mut self) {
        for (i, rule) in self.rules.iter_mut().enumerate() {
            let rule_number = (i + 1).to_string();
            rule.insert(
                "rule-id".to_string(),
                JsonValue::String(rule_number.clone()),
            );
            rule.entry("rule-name".to_string())
                .or_insert(JsonValue::String(rule_number));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(fields: &[(&str, &str)]) -> Rule {
        fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), JsonValue::String((*v).to_string())))
            .collect()
    }

    #[test]
    fn test_empty_table_renders_empty_rules() {
        let table = MappingTable::new(Vec::new());
        assert_eq!(
            table.to_json().expect("serialization succeeds"),
            "{\n    \"rules\": []\n}"
        );
    }

    #[test]
    fn test_numbering_defaults_rule_name() {
        let mut table = MappingTable::new(vec![rule(&[("rule-action", "include")])]);
        table.number_rules();

        assert_eq!(
            table.rules,
            vec![rule(&[
                ("rule-action", "include"),
                ("rule-id", "1"),
                ("rule-name", "1"),
            ])]
        );
    }

    #[test]
    fn test_numbering_preserves_authored_rule_name() {
        let mut table = MappingTable::new(vec![rule(&[
            ("rule-action", "include"),
            ("rule-name", "authored"),
        ])]);
        table.number_rules();

        assert_eq!(
            table.rules,
            vec![rule(&[
                ("rule-action", "include"),
                ("rule-id", "1"),
                ("rule-name", "authored"),
            ])]
        );
    }

    #[test]
    fn test_numbering_follows_sequence_position() {
        let mut table = MappingTable::new(vec![
            rule(&[("rule-type", "selection")]),
            rule(&[("rule-type", "transformation")]),
            rule(&[("rule-type", "selection")]),
        ]);
        table.number_rules();

        let ids: Vec<&JsonValue> = table.rules.iter().map(|r| &r["rule-id"]).collect();
        assert_eq!(ids, [&JsonValue::from("1"), &JsonValue::from("2"), &JsonValue::from("3")]);
    }

    #[test]
    fn test_rendered_keys_are_sorted() {
        let table = MappingTable::new(vec![rule(&[
            ("rule-type", "selection"),
            ("rule-action", "include"),
        ])]);
        let json = table.to_json().expect("serialization succeeds");

        let action = json.find("rule-action").expect("rule-action present");
        let id = json.find("rule-id").expect("rule-id present");
        let name = json.find("rule-name").expect("rule-name present");
        let rule_type = json.find("rule-type").expect("rule-type present");
        assert!(action < id && id < name && name < rule_type);
    }
}
