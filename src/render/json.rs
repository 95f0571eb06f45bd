//! JSON dump of a page tree for inspection and diffing.

use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::model::{NodeId, NodeKind, PageTree};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a page tree to JSON.
///
/// Adjacent text nodes are merged and whitespace-only text is omitted,
/// so the dump reflects structure rather than source formatting.
pub fn to_json(tree: &PageTree, format: JsonFormat) -> Result<String> {
    let value = to_value(tree, tree.root());
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&value)?,
        JsonFormat::Compact => serde_json::to_string(&value)?,
    };
    Ok(json)
}

/// JSON value for one node and its subtree.
pub fn to_value(tree: &PageTree, id: NodeId) -> Value {
    match tree.kind(id) {
        NodeKind::Document => json!({
            "type": "document",
            "children": children_to_json(tree, id),
        }),
        NodeKind::Doctype { name, .. } => json!({ "type": "doctype", "name": name }),
        NodeKind::Element { tag, attrs } => {
            let mut pairs: Vec<&(String, String)> = attrs.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut attrs_obj = Map::new();
            for (k, v) in pairs {
                attrs_obj.insert(k.clone(), Value::String(v.clone()));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": children_to_json(tree, id),
            })
        }
        NodeKind::Text(text) => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                json!({ "type": "text", "text": text })
            }
        }
        NodeKind::Comment(text) => json!({ "type": "comment", "text": text }),
    }
}

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn children_to_json(tree: &PageTree, id: NodeId) -> Vec<Value> {
    let mut children = Vec::new();
    let mut text_buf = String::new();
    for child in tree.children(id) {
        if let NodeKind::Text(text) = tree.kind(child) {
            text_buf.push_str(text);
            continue;
        }
        flush_text(&mut children, &mut text_buf);
        let value = to_value(tree, child);
        if !value.is_null() {
            children.push(value);
        }
    }
    flush_text(&mut children, &mut text_buf);
    children
}
