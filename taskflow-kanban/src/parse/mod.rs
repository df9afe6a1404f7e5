//! Forgiving input parsing for board intents
//!
//! Browser front ends tend to send camelCase keys (`taskId`, `dueDate`,
//! `toColumn`). The parser normalizes those to the canonical field names
//! before handing the object to serde.

use crate::error::{KanbanError, Result};
use crate::intent::BoardIntent;
use serde_json::{Map, Value};

/// Parse input JSON into one or more intents
pub fn parse_intents(input: Value) -> Result<Vec<BoardIntent>> {
    match input {
        Value::Array(arr) => arr.into_iter().map(parse_single).collect(),
        Value::Object(obj) => Ok(vec![parse_single(Value::Object(obj))?]),
        _ => Err(KanbanError::parse("input must be an object or array")),
    }
}

/// Parse a single intent from JSON
fn parse_single(input: Value) -> Result<BoardIntent> {
    let mut obj = match input {
        Value::Object(obj) => obj,
        _ => return Err(KanbanError::parse("intent must be an object")),
    };

    let op = obj
        .remove("op")
        .or_else(|| obj.remove("intent"))
        .or_else(|| obj.remove("action"))
        .ok_or_else(|| KanbanError::parse("intent is missing an 'op' field"))?;
    let op = match op {
        Value::String(s) => normalize_op(&s),
        _ => return Err(KanbanError::parse("'op' must be a string")),
    };

    normalize_params(&mut obj);
    obj.insert("op".to_string(), Value::String(op));

    Ok(serde_json::from_value(Value::Object(obj))?)
}

/// Map op spellings onto the canonical kebab-case names
fn normalize_op(op: &str) -> String {
    let op = to_kebab_case(op.trim());
    match op.as_str() {
        "add" | "create-task" | "add-task" => "create",
        "move-task" | "drop" => "move",
        "update" | "update-description" | "edit-task" => "edit",
        "tag" | "tag-task" => "add-tag",
        "untag" | "untag-task" | "delete-tag" => "remove-tag",
        "toggle" | "toggle-completion" | "complete" => "toggle-complete",
        other => other,
    }
    .to_string()
}

/// Normalize parameter keys (aliases, snake_case)
fn normalize_params(params: &mut Map<String, Value>) {
    // Convert camelCase to snake_case first so aliases only need one spelling
    let keys: Vec<String> = params.keys().cloned().collect();
    for key in keys {
        let snake = to_snake_case(&key);
        if snake != key {
            if let Some(value) = params.remove(&key) {
                params.entry(snake).or_insert(value);
            }
        }
    }

    let aliases: &[(&[&str], &str)] = &[
        (&["task_id"], "id"),
        (&["from_column", "source_column"], "from"),
        (&["to_column", "target_column_id"], "to"),
        (&["target_column", "col"], "column"),
        (&["new_description", "desc", "body"], "description"),
        (&["new_due_date", "due"], "due_date"),
        (&["tag_value", "value", "new_tag"], "tag"),
    ];

    for (from_keys, to_key) in aliases {
        for from_key in *from_keys {
            if let Some(value) = params.remove(*from_key) {
                params.entry(to_key.to_string()).or_insert(value);
            }
        }
    }
}

fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace(['_', ' '], "-")
}
