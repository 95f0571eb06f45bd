//! HTML parsing into a [`PageTree`] using scraper (html5ever underneath).

use scraper::{ElementRef, Html, Node};

use crate::model::{NodeId, NodeKind, PageTree};

/// Parse a complete HTML document into a page tree.
///
/// Doctype, comments and whitespace-only text are kept so the rendered
/// page stays close to the generator's output. Processing instructions
/// are dropped.
pub fn parse_html(html: &str) -> PageTree {
    let document = Html::parse_document(html);
    let mut tree = PageTree::new();
    let root = tree.root();

    for child in document.tree.root().children() {
        match child.value() {
            Node::Doctype(doctype) => {
                let node = tree.create(NodeKind::Doctype {
                    name: doctype.name().to_string(),
                    public_id: doctype.public_id().to_string(),
                    system_id: doctype.system_id().to_string(),
                });
                tree.append(root, node);
            }
            Node::Comment(comment) => {
                let node = tree.create(NodeKind::Comment(comment.to_string()));
                tree.append(root, node);
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    convert_element(&mut tree, element, root);
                }
            }
            _ => {}
        }
    }

    if !document.errors.is_empty() {
        log::debug!("html5ever reported {} parse errors", document.errors.len());
    }

    tree
}

fn convert_element(tree: &mut PageTree, element: ElementRef<'_>, parent: NodeId) {
    let value = element.value();
    let mut attrs: Vec<(String, String)> = value
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    // Attribute storage order is not guaranteed by the parser; keep output stable.
    attrs.sort_by(|a, b| a.0.cmp(&b.0));

    let node = tree.create(NodeKind::Element {
        tag: value.name().to_ascii_lowercase(),
        attrs,
    });
    tree.append(parent, node);

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text_node = tree.create_text(text.to_string());
                tree.append(node, text_node);
            }
            Node::Comment(comment) => {
                let comment_node = tree.create(NodeKind::Comment(comment.to_string()));
                tree.append(node, comment_node);
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    convert_element(tree, child_element, node);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementMatcher;

    #[test]
    fn test_parse_keeps_doctype_and_structure() {
        let tree = parse_html(
            "<!DOCTYPE html><html><head><title>T</title></head>\
             <body><div class=\"memdoc\"><p>Hello <b>world</b>.</p></div></body></html>",
        );

        let first = tree.children(tree.root())[0];
        assert!(matches!(tree.kind(first), NodeKind::Doctype { name, .. } if name == "html"));

        let memdoc = tree
            .find_first(tree.root(), &ElementMatcher::class("memdoc"))
            .unwrap();
        let p = tree.element_children(memdoc)[0];
        assert_eq!(tree.tag(p), Some("p"));
        assert_eq!(tree.text_content(p), "Hello world.");
    }

    #[test]
    fn test_parse_sorts_attributes() {
        let tree = parse_html("<a href=\"x.html\" class=\"el\">x</a>");
        let a = tree.find_first(tree.root(), &ElementMatcher::tag("a")).unwrap();
        match tree.kind(a) {
            NodeKind::Element { attrs, .. } => {
                let names: Vec<&str> = attrs.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(names, vec!["class", "href"]);
            }
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_keeps_comments() {
        let tree = parse_html("<html><body><!-- generated --><p>x</p></body></html>");
        let body = tree.find_first(tree.root(), &ElementMatcher::tag("body")).unwrap();
        let first = tree.children(body)[0];
        assert_eq!(tree.kind(first), &NodeKind::Comment(" generated ".to_string()));
    }
}
