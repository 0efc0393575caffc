//! Compact textual descriptions of parameter schemas.

use mesa_registry::ParameterSchema;

use crate::reflow::reflow;

/// Legacy named-schema declarations embed their definition with `{| ... |}`
/// delimiters; rewrite those to plain braces before reflowing.
fn rewrite_brackets(name: &str) -> String {
    name.replace("{|", "{").replace("|}", "}")
}

/// Describe a parameter schema for a table cell.
///
/// A plain field map renders as its comma-joined keys in declaration order;
/// a named-schema reference is bracket-rewritten and reflowed as indented
/// structured text soft-wrapped near `wrap_width`. Best-effort on malformed
/// declarations, never fails.
pub fn describe(schema: &ParameterSchema, wrap_width: usize) -> String {
    match schema {
        ParameterSchema::Fields(fields) => {
            let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
            keys.join(", ")
        }
        ParameterSchema::Reference(reference) => {
            reflow(&rewrite_brackets(&reference.name), wrap_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use mesa_registry::SchemaReference;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> ParameterSchema {
        let mut map = IndexMap::new();
        for (key, constraint) in pairs {
            map.insert(key.to_string(), json!(constraint));
        }
        ParameterSchema::Fields(map)
    }

    #[test]
    fn field_map_lists_keys_in_declaration_order() {
        let schema = fields(&[("id", "string"), ("age", "number")]);
        assert_eq!(describe(&schema, 50), "id, age");
    }

    #[test]
    fn empty_field_map_describes_as_empty() {
        let schema = fields(&[]);
        assert_eq!(describe(&schema, 50), "");
    }

    #[test]
    fn reference_rewrites_bracket_variants() {
        let schema = ParameterSchema::Reference(SchemaReference {
            name: "{|foo|}".to_string(),
        });
        let out = describe(&schema, 70);
        assert!(out.contains("foo"));
        assert!(out.starts_with('{') && out.ends_with('}'));
        assert!(!out.contains("{|") && !out.contains("|}"));
    }

    #[test]
    fn reference_reflows_as_indented_text() {
        let schema = ParameterSchema::Reference(SchemaReference {
            name: r#"{|id: "string", nested: {|deep: "bool"|}|}"#.to_string(),
        });
        let out = describe(&schema, 70);
        assert_eq!(
            out,
            "{\n    id: \"string\",\n    nested: {\n        deep: \"bool\"\n    }\n}"
        );
    }

    #[test]
    fn malformed_reference_degrades_without_panicking() {
        let schema = ParameterSchema::Reference(SchemaReference {
            name: "{|unterminated".to_string(),
        });
        let out = describe(&schema, 50);
        assert!(out.starts_with('{'));
    }
}
