//! Purpose: Compact JSON text emission from a `Node` tree.
//! Exports: `generate`.
//! Role: Sole emission boundary; total over every valid tree, no failure modes.
//! Invariants: Output carries no added whitespace and no trailing commas.
//! Invariants: Object pairs emit in ascending key order.
//! Notes: String content is emitted verbatim (no escaping), mirroring the parser.
use std::collections::BTreeMap;

use crate::core::node::Node;

pub fn generate(node: &Node) -> String {
    let mut out = String::new();
    write_value(node, &mut out);
    out
}

fn write_value(node: &Node, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        Node::Int(value) => out.push_str(&value.to_string()),
        Node::Float(value) => write_float(*value, out),
        Node::Str(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        Node::Array(items) => write_array(items, out),
        Node::Object(map) => write_object(map, out),
    }
}

fn write_float(value: f64, out: &mut String) {
    // NaN and infinities have no JSON spelling; emit null like serde_json.
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    let text = value.to_string();
    out.push_str(&text);
    // Keep a Float re-parsing as a Float: `1000.0` renders as `1000` from
    // the standard conversion, so restore the decimal point.
    if !text.contains(['.', 'e', 'E']) {
        out.push_str(".0");
    }
}

fn write_array(items: &[Node], out: &mut String) {
    out.push('[');
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_value(item, out);
    }
    out.push(']');
}

fn write_object(map: &BTreeMap<String, Node>, out: &mut String) {
    out.push('{');
    for (idx, (key, value)) in map.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\":");
        write_value(value, out);
    }
    out.push('}');
}
