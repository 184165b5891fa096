use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "files": {
                "type": "array",
                "items": { "type": "string", "minLength": 1 }
            },
            "mode": { "type": "string", "enum": ["sequential", "concurrent"] },
            "detector": {
                "type": "object",
                "properties": {
                    "endpoint": { "type": "string", "format": "uri" },
                    "api_key": { "type": "string" },
                    "project_id": { "type": "string" },
                    "max_results": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
