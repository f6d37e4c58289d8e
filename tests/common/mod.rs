//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use serde_json::{Value, json};

/// Route test logs through env_logger once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A complete document without a schemas table.
pub fn chart_document() -> Value {
    json!({
        "opentool": "1.0.0",
        "info": {
            "title": "Chart Tool",
            "version": "0.3.0",
            "description": "Renders simple line and bar charts"
        },
        "server": {"url": "http://localhost:9627/opentool"},
        "functions": [
            {
                "name": "render",
                "description": "Render a chart from a data series",
                "parameters": [
                    {"name": "title", "schema": {"type": "string"}, "required": true},
                    {
                        "name": "kind",
                        "description": "Chart flavor",
                        "schema": {"type": "string", "enum": ["line", "bar"]},
                        "required": true
                    },
                    {
                        "name": "points",
                        "schema": {"type": "array", "items": {"type": "number"}},
                        "required": true
                    },
                    {"name": "grid", "schema": {"type": "boolean"}, "required": false}
                ],
                "return": {"name": "chart_id", "schema": {"type": "integer"}}
            },
            {
                "name": "export",
                "description": "Export a rendered chart",
                "parameters": [
                    {"name": "chart_id", "schema": {"type": "integer"}, "required": true},
                    {
                        "name": "format",
                        "schema": {"type": "string", "enum": ["png", "svg"]},
                        "required": false
                    }
                ]
            }
        ]
    })
}

/// A document whose functions reference a shared schemas table.
pub fn geometry_document() -> Value {
    json!({
        "opentool": "1.0.0",
        "info": {"title": "Geometry Tool", "version": "1.1.0"},
        "functions": [
            {
                "name": "distance",
                "description": "Distance between two points",
                "parameters": [
                    {"name": "from", "schema": {"$ref": "#/schemas/Point"}, "required": true},
                    {"name": "to", "schema": {"$ref": "#/schemas/Point"}, "required": true}
                ],
                "return": {"name": "length", "schema": {"type": "number"}}
            },
            {
                "name": "midpoint",
                "description": "Midpoint of a segment",
                "parameters": [
                    {"name": "segment", "schema": {"$ref": "#/schemas/Segment"}, "required": true}
                ],
                "return": {"name": "at", "schema": {"$ref": "#/schemas/Point"}}
            }
        ],
        "schemas": {
            "Point": {
                "type": "object",
                "description": "A point in the plane",
                "properties": {
                    "x": {"type": "number"},
                    "y": {"type": "number"}
                },
                "required": ["x", "y"]
            },
            "Segment": {
                "type": "object",
                "properties": {
                    "from": {"$ref": "#/schemas/Point"},
                    "to": {"$ref": "#/schemas/Point"}
                }
            }
        }
    })
}
