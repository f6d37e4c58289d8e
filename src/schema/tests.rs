//! Tests for schema parsing, enum consistency, and registry behavior.
//!
//! Covers the `$ref` resolution rules, the enum/type consistency matrix,
//! serialization omission, and the registry's replacement and alias-skip
//! semantics.

use super::registry::SchemaRegistry;
use super::types::{SchemaNode, SchemaType};
use crate::error::SpecError;
use serde_json::{Value, json};
use std::sync::Arc;

fn schemas_table(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected object table, got: {:?}", other),
    }
}

#[test]
fn test_parse_minimal_node() {
    let registry = SchemaRegistry::new();
    let node = SchemaNode::from_value(&json!({"type": "string"}), &registry).unwrap();

    assert_eq!(node.kind(), SchemaType::STRING);
    assert!(node.description().is_none());
    assert!(node.properties().is_none());
    assert!(node.items().is_none());
    assert!(node.enumeration().is_none());
    assert!(node.required().is_none());
}

#[test]
fn test_parse_full_object_node() {
    let registry = SchemaRegistry::new();
    let node = SchemaNode::from_value(
        &json!({
            "type": "object",
            "description": "Chart request",
            "properties": {
                "title": {"type": "string"},
                "points": {"type": "array", "items": {"type": "number"}},
                "grid": {"type": "boolean"}
            },
            "required": ["title", "points"]
        }),
        &registry,
    )
    .unwrap();

    assert_eq!(node.kind(), SchemaType::OBJECT);
    assert_eq!(node.description(), Some("Chart request"));
    let properties = node.properties().unwrap();
    let names: Vec<&str> = properties.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["title", "points", "grid"]);
    assert_eq!(
        properties["points"].items().map(|items| items.kind()),
        Some(SchemaType::NUMBER)
    );
    assert_eq!(
        node.required(),
        Some(&["title".to_string(), "points".to_string()][..])
    );
}

#[test]
fn test_parse_missing_type() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!({"description": "no type"}), &registry);
    match result.unwrap_err() {
        SpecError::MissingField { field, .. } => assert_eq!(field, "type"),
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

#[test]
fn test_parse_non_object_schema() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!("string"), &registry);
    match result.unwrap_err() {
        SpecError::InvalidField { field, .. } => assert_eq!(field, "schema"),
        other => panic!("Expected InvalidField, got: {:?}", other),
    }
}

#[test]
fn test_enum_consistent_string_with_null() {
    let registry = SchemaRegistry::new();
    let node = SchemaNode::from_value(
        &json!({"type": "string", "enum": ["red", "green", null]}),
        &registry,
    )
    .unwrap();
    assert_eq!(node.enumeration().unwrap().len(), 3);
}

#[test]
fn test_enum_integer_accepts_whole_float() {
    let registry = SchemaRegistry::new();
    // 2.0 is a whole number and counts as an integer
    let node = SchemaNode::from_value(&json!({"type": "integer", "enum": [1, 2.0, 3]}), &registry);
    assert!(node.is_ok());
}

#[test]
fn test_enum_integer_rejects_fractional() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(
        &json!({"type": "integer", "enum": [1, 2, 2.5]}),
        &registry,
    );
    match result.unwrap_err() {
        SpecError::EnumTypeMismatch { index, value, kind } => {
            assert_eq!(index, 2);
            assert_eq!(value, json!(2.5));
            assert_eq!(kind, "integer");
        }
        other => panic!("Expected EnumTypeMismatch, got: {:?}", other),
    }
}

#[test]
fn test_enum_integer_rejects_boolean() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!({"type": "integer", "enum": [true]}), &registry);
    assert!(result.is_err());
}

#[test]
fn test_enum_number_accepts_any_number() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(
        &json!({"type": "number", "enum": [1, 2.5, -3.75, null]}),
        &registry,
    );
    assert!(result.is_ok());
}

#[test]
fn test_enum_number_rejects_string() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!({"type": "number", "enum": [1, "2"]}), &registry);
    match result.unwrap_err() {
        SpecError::EnumTypeMismatch { index, .. } => assert_eq!(index, 1),
        other => panic!("Expected EnumTypeMismatch, got: {:?}", other),
    }
}

#[test]
fn test_enum_boolean_rejects_number() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!({"type": "boolean", "enum": [true, 1]}), &registry);
    assert!(result.is_err());
}

#[test]
fn test_enum_null_kind_accepts_only_null() {
    let registry = SchemaRegistry::new();
    assert!(SchemaNode::from_value(&json!({"type": "null", "enum": [null]}), &registry).is_ok());
    assert!(
        SchemaNode::from_value(&json!({"type": "null", "enum": [null, 0]}), &registry).is_err()
    );
}

#[test]
fn test_enum_unrecognized_kind_unchecked() {
    let registry = SchemaRegistry::new();
    // Unknown type names and the container types skip enum checking
    assert!(
        SchemaNode::from_value(
            &json!({"type": "duration", "enum": ["1h", 2, true]}),
            &registry
        )
        .is_ok()
    );
    assert!(
        SchemaNode::from_value(&json!({"type": "array", "enum": [[1], "x"]}), &registry).is_ok()
    );
    assert!(
        SchemaNode::from_value(&json!({"type": "object", "enum": [{"a": 1}]}), &registry).is_ok()
    );
}

#[test]
fn test_enum_empty_is_valid() {
    let registry = SchemaRegistry::new();
    let node = SchemaNode::from_value(&json!({"type": "integer", "enum": []}), &registry).unwrap();
    assert_eq!(node.enumeration().unwrap().len(), 0);
}

#[test]
fn test_ref_resolution_shares_registry_node() {
    let mut registry = SchemaRegistry::new();
    registry
        .initialize(&schemas_table(json!({
            "Point": {
                "type": "object",
                "properties": {"x": {"type": "number"}, "y": {"type": "number"}}
            }
        })))
        .unwrap();

    let resolved =
        SchemaNode::from_value(&json!({"$ref": "#/schemas/Point"}), &registry).unwrap();
    let entry = registry.resolve("Point").unwrap();
    assert!(Arc::ptr_eq(&resolved, &entry));
}

#[test]
fn test_ref_format_error() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!({"$ref": "invalid/ref/format"}), &registry);
    match result.unwrap_err() {
        SpecError::RefFormat { reference } => assert_eq!(reference, "invalid/ref/format"),
        other => panic!("Expected RefFormat, got: {:?}", other),
    }
}

#[test]
fn test_ref_extra_segments_rejected() {
    let mut registry = SchemaRegistry::new();
    registry
        .initialize(&schemas_table(json!({"Point": {"type": "object"}})))
        .unwrap();

    let result = SchemaNode::from_value(&json!({"$ref": "#/schemas/Point/x"}), &registry);
    match result.unwrap_err() {
        SpecError::RefFormat { reference } => assert_eq!(reference, "#/schemas/Point/x"),
        other => panic!("Expected RefFormat, got: {:?}", other),
    }
}

#[test]
fn test_ref_not_found() {
    let registry = SchemaRegistry::new();
    let result = SchemaNode::from_value(&json!({"$ref": "#/schemas/NonExistent"}), &registry);
    match result.unwrap_err() {
        SpecError::RefNotFound { reference } => assert_eq!(reference, "#/schemas/NonExistent"),
        other => panic!("Expected RefNotFound, got: {:?}", other),
    }
}

#[test]
fn test_ref_null_is_not_a_reference() {
    let registry = SchemaRegistry::new();
    let node =
        SchemaNode::from_value(&json!({"$ref": null, "type": "string"}), &registry).unwrap();
    assert_eq!(node.kind(), SchemaType::STRING);
}

#[test]
fn test_nested_ref_inside_properties() {
    let mut registry = SchemaRegistry::new();
    registry
        .initialize(&schemas_table(json!({
            "Color": {"type": "string", "enum": ["red", "green", "blue"]}
        })))
        .unwrap();

    let node = SchemaNode::from_value(
        &json!({
            "type": "object",
            "properties": {"stroke": {"$ref": "#/schemas/Color"}}
        }),
        &registry,
    )
    .unwrap();

    let stroke = &node.properties().unwrap()["stroke"];
    assert!(Arc::ptr_eq(stroke, &registry.resolve("Color").unwrap()));
}

#[test]
fn test_registry_initialize_replaces_contents() {
    let mut registry = SchemaRegistry::new();
    registry
        .initialize(&schemas_table(json!({"First": {"type": "string"}})))
        .unwrap();
    assert!(registry.resolve("First").is_some());

    registry
        .initialize(&schemas_table(json!({"Second": {"type": "integer"}})))
        .unwrap();
    assert!(registry.resolve("First").is_none());
    assert!(registry.resolve("Second").is_some());
}

#[test]
fn test_registry_forward_reference_within_batch() {
    let mut registry = SchemaRegistry::new();
    // Later entries can reference earlier entries of the same table
    registry
        .initialize(&schemas_table(json!({
            "Point": {
                "type": "object",
                "properties": {"x": {"type": "number"}, "y": {"type": "number"}}
            },
            "Segment": {
                "type": "object",
                "properties": {
                    "from": {"$ref": "#/schemas/Point"},
                    "to": {"$ref": "#/schemas/Point"}
                }
            }
        })))
        .unwrap();

    let segment = registry.resolve("Segment").unwrap();
    let point = registry.resolve("Point").unwrap();
    let from = &segment.properties().unwrap()["from"];
    let to = &segment.properties().unwrap()["to"];
    assert!(Arc::ptr_eq(from, &point));
    assert!(Arc::ptr_eq(to, &point));
}

#[test]
fn test_registry_backward_reference_fails() {
    let mut registry = SchemaRegistry::new();
    let result = registry.initialize(&schemas_table(json!({
        "Segment": {
            "type": "object",
            "properties": {"from": {"$ref": "#/schemas/Point"}}
        },
        "Point": {"type": "object"}
    })));
    match result.unwrap_err() {
        SpecError::RefNotFound { reference } => assert_eq!(reference, "#/schemas/Point"),
        other => panic!("Expected RefNotFound, got: {:?}", other),
    }
}

#[test]
fn test_registry_skips_alias_entries() {
    let mut registry = SchemaRegistry::new();
    registry
        .initialize(&schemas_table(json!({
            "Point": {"type": "object"},
            "Alias": {"$ref": "#/schemas/Point"}
        })))
        .unwrap();

    assert!(registry.resolve("Point").is_some());
    assert!(registry.resolve("Alias").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_snapshot_preserves_order() {
    let mut registry = SchemaRegistry::new();
    registry
        .initialize(&schemas_table(json!({
            "Zebra": {"type": "string"},
            "Apple": {"type": "string"},
            "Mango": {"type": "string"}
        })))
        .unwrap();

    let names: Vec<String> = registry.snapshot().keys().cloned().collect();
    assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
}

#[test]
fn test_serialize_omits_absent_fields() {
    let registry = SchemaRegistry::new();
    let node = SchemaNode::from_value(&json!({"type": "string"}), &registry).unwrap();
    assert_eq!(node.to_value(), json!({"type": "string"}));
}

#[test]
fn test_serialize_round_trip() {
    let registry = SchemaRegistry::new();
    let original = json!({
        "type": "object",
        "description": "Axis configuration",
        "properties": {
            "label": {"type": "string"},
            "scale": {"type": "string", "enum": ["linear", "log"]},
            "ticks": {"type": "array", "items": {"type": "number"}}
        },
        "required": ["label"]
    });
    let node = SchemaNode::from_value(&original, &registry).unwrap();
    assert_eq!(node.to_value(), original);
}

#[test]
fn test_serialize_property_order() {
    let registry = SchemaRegistry::new();
    let node = SchemaNode::from_value(
        &json!({
            "type": "object",
            "properties": {
                "zulu": {"type": "string"},
                "alpha": {"type": "string"},
                "mike": {"type": "string"}
            }
        }),
        &registry,
    )
    .unwrap();

    let serialized = node.to_value();
    let names: Vec<&String> = serialized["properties"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_builder_construction() {
    let node = SchemaNode::new(SchemaType::OBJECT)
        .with_description("A labeled point")
        .with_property("label", SchemaNode::new(SchemaType::STRING))
        .with_property(
            "at",
            SchemaNode::new(SchemaType::ARRAY).with_items(SchemaNode::new(SchemaType::NUMBER)),
        )
        .with_required(vec!["label".to_string()]);

    assert_eq!(node.kind(), SchemaType::OBJECT);
    assert_eq!(node.properties().unwrap().len(), 2);
    assert_eq!(
        node.to_value(),
        json!({
            "type": "object",
            "description": "A labeled point",
            "properties": {
                "label": {"type": "string"},
                "at": {"type": "array", "items": {"type": "number"}}
            },
            "required": ["label"]
        })
    );
}

#[test]
fn test_builder_enumeration_validates() {
    let result = SchemaNode::new(SchemaType::STRING).with_enumeration(vec![json!("ok"), json!(1)]);
    match result.unwrap_err() {
        SpecError::EnumTypeMismatch { index, .. } => assert_eq!(index, 1),
        other => panic!("Expected EnumTypeMismatch, got: {:?}", other),
    }
}
