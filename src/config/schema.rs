use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "sequencer": {
                "type": "object",
                "properties": {
                    "step_delay_ms": { "type": "integer", "minimum": 0 },
                    "jitter_ms": { "type": "integer", "minimum": 0 },
                    "results_reveal_ms": { "type": "integer", "minimum": 0 },
                    "summary_reveal_ms": { "type": "integer", "minimum": 0 }
                },
                "additionalProperties": false
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                },
                "additionalProperties": false
            },
            "fixtures": { "type": "string" }
        },
        "additionalProperties": false
    })
});
