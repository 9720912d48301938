//! JSON input support.
//!
//! The jawn parser emits textlint-style ASTs. This module converts those
//! JSON trees into [`Node`]s and reads generator options from JSON objects
//! with camelCase keys.

use jawn_html_core::{GeneratorOptions, Node, NodeKind, RubyParenthesis};
use serde_json::Value;
use tracing::debug;

use crate::{JawnHtmlError, Result};

/// Parse a JSON AST string into a Node tree.
///
/// The root is not validated here; [`crate::html`] does that.
///
/// # Example
///
/// ```rust
/// use jawn_html::{parse_ast, NodeKind};
///
/// let node = parse_ast(r#"{"type":"Document","children":[{"type":"Break","raw":"\n"}]}"#).unwrap();
/// assert_eq!(node.kind, NodeKind::Document);
/// assert_eq!(node.children().next().unwrap().raw, "\n");
/// ```
pub fn parse_ast(json: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(json)?;
    node_from_value(&value)
}

/// Convert a JSON value to a Node tree
pub fn node_from_value(value: &Value) -> Result<Node> {
    let type_name = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| JawnHtmlError::InvalidAst("node has no string `type`".to_string()))?;

    // Anything but an array counts as missing
    let children = match value.get("children").and_then(Value::as_array) {
        Some(items) => Some(
            items
                .iter()
                .map(node_from_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        None => None,
    };

    Ok(Node {
        kind: NodeKind::from_type_name(type_name),
        children,
        value: value.get("value").and_then(Value::as_str).map(str::to_string),
        raw: value
            .get("raw")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

/// Read generator options from a JSON object.
///
/// Recognizes `pretty`, `lineIdPrefix` and `rubyParenthesis`. Missing or
/// malformed values fall back to their defaults.
pub fn options_from_value(value: &Value) -> GeneratorOptions {
    let mut options = GeneratorOptions::default();

    match value.get("pretty") {
        Some(Value::Bool(pretty)) => options.pretty = *pretty,
        Some(other) => debug!(value = %other, "ignoring non-boolean `pretty`"),
        None => {}
    }

    match value.get("lineIdPrefix") {
        Some(Value::String(prefix)) => options.line_id_prefix = prefix.clone(),
        Some(Value::Null) | None => {}
        Some(other) => debug!(value = %other, "ignoring non-string `lineIdPrefix`"),
    }

    if let Some(glyphs) = value.get("rubyParenthesis") {
        match ruby_parenthesis_from_value(glyphs) {
            Some(parenthesis) => options.ruby_parenthesis = parenthesis,
            None => debug!(value = %glyphs, "ignoring malformed `rubyParenthesis`"),
        }
    }

    options
}

fn ruby_parenthesis_from_value(value: &Value) -> Option<RubyParenthesis> {
    let glyphs = value
        .as_array()?
        .iter()
        .map(Value::as_str)
        .collect::<Option<Vec<_>>>()?;
    RubyParenthesis::from_slice(glyphs.as_slice())
}
