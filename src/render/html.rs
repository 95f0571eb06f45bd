//! HTML serialization of a page tree.

use crate::model::{NodeId, NodeKind, PageTree};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text content is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
    "script",
    "style",
    "xmp",
];

/// Serialize a page tree to HTML.
///
/// # Example
/// ```
/// use doxpanel::parser::parse_html;
/// use doxpanel::render::to_html;
///
/// let tree = parse_html("<p class=\"lead\">a &amp; b</p>");
/// assert!(to_html(&tree).contains("<p class=\"lead\">a &amp; b</p>"));
/// ```
pub fn to_html(tree: &PageTree) -> String {
    let mut out = String::new();
    for child in tree.children(tree.root()) {
        write_node(tree, child, &mut out, false);
    }
    out
}

/// Serialize one node and its subtree.
pub fn node_to_html(tree: &PageTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out, false);
    out
}

fn write_node(tree: &PageTree, id: NodeId, out: &mut String, raw: bool) {
    match tree.kind(id) {
        NodeKind::Document => {
            for child in tree.children(id) {
                write_node(tree, child, out, false);
            }
        }
        NodeKind::Doctype {
            name,
            public_id,
            system_id,
        } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            if !public_id.is_empty() {
                out.push_str(" PUBLIC \"");
                out.push_str(public_id);
                out.push('"');
                if !system_id.is_empty() {
                    out.push_str(" \"");
                    out.push_str(system_id);
                    out.push('"');
                }
            } else if !system_id.is_empty() {
                out.push_str(" SYSTEM \"");
                out.push_str(system_id);
                out.push('"');
            }
            out.push('>');
        }
        NodeKind::Element { tag, attrs } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            let raw_children = RAW_TEXT_ELEMENTS.contains(&tag.as_str());
            for child in tree.children(id) {
                write_node(tree, child, out, raw_children);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        NodeKind::Text(text) => {
            if raw {
                out.push_str(text);
            } else {
                escape_into(text, false, out);
            }
        }
        NodeKind::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
