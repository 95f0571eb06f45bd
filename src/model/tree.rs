//! Arena-backed page tree.
//!
//! The tree owns every node of one parsed page. Nodes are addressed by
//! [`NodeId`] and never freed while the tree lives: detaching a node only
//! unlinks it, so ids collected by a pass stay valid even after an earlier
//! step in the same pass discarded the subtree they belong to. Use
//! [`PageTree::is_attached`] to skip such nodes.

use indextree::{Arena, NodeId};

use super::ElementMatcher;

/// Kind and payload of a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root.
    Document,

    /// `<!DOCTYPE ...>` declaration.
    Doctype {
        /// Doctype name (usually `html`)
        name: String,
        /// Public identifier, empty when absent
        public_id: String,
        /// System identifier, empty when absent
        system_id: String,
    },

    /// An element with its attributes in source order.
    Element {
        /// Lower-case tag name
        tag: String,
        /// Attributes as (name, value) pairs
        attrs: Vec<(String, String)>,
    },

    /// Character data.
    Text(String),

    /// `<!-- ... -->` comment.
    Comment(String),
}

impl NodeKind {
    /// Create an element kind without attributes.
    pub fn element(tag: impl Into<String>) -> Self {
        NodeKind::Element {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Tag name if this is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

/// A mutable tree of one generated page.
#[derive(Debug, Clone)]
pub struct PageTree {
    arena: Arena<NodeKind>,
    root: NodeId,
}

impl PageTree {
    /// Create an empty tree holding only a document root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeKind::Document);
        Self { arena, root }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Kind of a node.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.arena[id].get()
    }

    // ==================== Construction ====================

    /// Allocate a detached node.
    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        self.arena.new_node(kind)
    }

    /// Allocate a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.create(NodeKind::element(tag))
    }

    /// Allocate a detached element carrying a `class` attribute.
    pub fn create_element_with_class(&mut self, tag: &str, class: &str) -> NodeId {
        self.create(NodeKind::Element {
            tag: tag.to_string(),
            attrs: vec![("class".to_string(), class.to_string())],
        })
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.create(NodeKind::Text(text.into()))
    }

    // ==================== Structure edits ====================

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        child.detach(&mut self.arena);
        if let Err(e) = parent.checked_append(child, &mut self.arena) {
            log::debug!("append rejected: {}", e);
        }
    }

    /// Insert `child` as the first child of `parent`, detaching it first.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) {
        child.detach(&mut self.arena);
        if let Err(e) = parent.checked_prepend(child, &mut self.arena) {
            log::debug!("prepend rejected: {}", e);
        }
    }

    /// Insert `node` directly before `anchor`.
    pub fn insert_before(&mut self, anchor: NodeId, node: NodeId) {
        node.detach(&mut self.arena);
        if let Err(e) = anchor.checked_insert_before(node, &mut self.arena) {
            log::debug!("insert_before rejected: {}", e);
        }
    }

    /// Insert `node` directly after `anchor`.
    pub fn insert_after(&mut self, anchor: NodeId, node: NodeId) {
        node.detach(&mut self.arena);
        if let Err(e) = anchor.checked_insert_after(node, &mut self.arena) {
            log::debug!("insert_after rejected: {}", e);
        }
    }

    /// Unlink a node (and its subtree) from the tree.
    pub fn detach(&mut self, id: NodeId) {
        id.detach(&mut self.arena);
    }

    /// Move every child of `from` to the end of `to`, preserving order.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) {
        for child in self.children(from) {
            self.append(to, child);
        }
    }

    /// Replace `id` by its own children, then unlink it.
    pub fn unwrap(&mut self, id: NodeId) {
        for child in self.children(id) {
            self.insert_before(id, child);
        }
        self.detach(id);
    }

    /// Wrap `id` in `wrapper`, which takes its place in the tree.
    pub fn wrap(&mut self, id: NodeId, wrapper: NodeId) {
        self.insert_before(id, wrapper);
        self.append(wrapper, id);
    }

    /// Change the tag name of an element, keeping attributes and children.
    pub fn retag(&mut self, id: NodeId, new_tag: &str) {
        if let NodeKind::Element { tag, .. } = self.arena[id].get_mut() {
            *tag = new_tag.to_string();
        }
    }

    // ==================== Navigation ====================

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// All children, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Element children, in order.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena)
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Next sibling that is an element.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        id.following_siblings(&self.arena)
            .skip(1)
            .find(|&s| self.is_element(s))
    }

    /// Previous sibling that is an element.
    pub fn prev_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        id.preceding_siblings(&self.arena)
            .skip(1)
            .find(|&s| self.is_element(s))
    }

    /// Whether the node is still reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        id.ancestors(&self.arena).any(|a| a == self.root)
    }

    /// Descendant elements of `scope` (excluding `scope`) matching `matcher`, in document order.
    pub fn find(&self, scope: NodeId, matcher: &ElementMatcher) -> Vec<NodeId> {
        scope
            .descendants(&self.arena)
            .skip(1)
            .filter(|&d| self.matches(d, matcher))
            .collect()
    }

    /// First descendant element of `scope` matching `matcher`.
    pub fn find_first(&self, scope: NodeId, matcher: &ElementMatcher) -> Option<NodeId> {
        scope
            .descendants(&self.arena)
            .skip(1)
            .find(|&d| self.matches(d, matcher))
    }

    /// Direct children of `scope` matching `matcher`.
    pub fn find_children(&self, scope: NodeId, matcher: &ElementMatcher) -> Vec<NodeId> {
        scope
            .children(&self.arena)
            .filter(|&c| self.matches(c, matcher))
            .collect()
    }

    /// Whether `id` is an element satisfying `matcher`.
    pub fn matches(&self, id: NodeId, matcher: &ElementMatcher) -> bool {
        match self.kind(id) {
            NodeKind::Element { tag, .. } => {
                matcher.tag.map_or(true, |t| t == tag)
                    && matcher.class.map_or(true, |c| self.has_class(id, c))
            }
            _ => false,
        }
    }

    // ==================== Element data ====================

    /// Whether the node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Element { .. })
    }

    /// Tag name of an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.kind(id).tag()
    }

    /// Attribute value of an element.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Set (or replace) an attribute.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let NodeKind::Element { attrs, .. } = self.arena[id].get_mut() {
            let value = value.into();
            match attrs.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value,
                None => attrs.push((name.to_string(), value)),
            }
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let NodeKind::Element { attrs, .. } = self.arena[id].get_mut() {
            attrs.retain(|(k, _)| k != name);
        }
    }

    /// Class tokens of an element.
    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.attr(id, "class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether an element carries the class token.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|c| c.split_whitespace().any(|t| t == class))
    }

    /// Add one or more space-separated class tokens, skipping those already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.is_element(id) {
            return;
        }
        let mut tokens: Vec<String> = self.classes(id).into_iter().map(String::from).collect();
        for token in class.split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        self.set_attr(id, "class", tokens.join(" "));
    }

    /// Remove one or more space-separated class tokens.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_any_class(id) {
            return;
        }
        let remove: Vec<&str> = class.split_whitespace().collect();
        let tokens: Vec<String> = self
            .classes(id)
            .into_iter()
            .filter(|t| !remove.contains(t))
            .map(String::from)
            .collect();
        if tokens.is_empty() {
            self.remove_attr(id, "class");
        } else {
            self.set_attr(id, "class", tokens.join(" "));
        }
    }

    /// Drop the `class` attribute altogether.
    pub fn clear_classes(&mut self, id: NodeId) {
        self.remove_attr(id, "class");
    }

    fn has_any_class(&self, id: NodeId) -> bool {
        self.attr(id, "class").is_some()
    }

    // ==================== Text ====================

    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        id.descendants(&self.arena)
            .filter_map(|d| match self.kind(d) {
                NodeKind::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether the text under `id` is empty once trimmed.
    pub fn is_text_empty(&self, id: NodeId) -> bool {
        id.descendants(&self.arena).all(|d| match self.kind(d) {
            NodeKind::Text(t) => t.trim().is_empty(),
            _ => true,
        })
    }

    /// Upper-case the first non-whitespace character of `id`'s content.
    ///
    /// Only applies when that content starts with text: a leading element
    /// (`code`, a link, ...) leaves the node unchanged. Returns `true` when a
    /// character was changed.
    pub fn capitalize_first_char(&mut self, id: NodeId) -> bool {
        let target = id.children(&self.arena).find(|&c| match self.kind(c) {
            NodeKind::Text(t) => !t.trim().is_empty(),
            _ => true,
        });
        let Some(target) = target else {
            return false;
        };
        if let NodeKind::Text(text) = self.arena[target].get_mut() {
            let Some((idx, first)) = text.char_indices().find(|(_, c)| !c.is_whitespace()) else {
                return false;
            };
            if !first.is_lowercase() {
                return false;
            }
            let upper: String = first.to_uppercase().collect();
            text.replace_range(idx..idx + first.len_utf8(), &upper);
            return true;
        }
        false
    }
}

impl Default for PageTree {
    fn default() -> Self {
        Self::new()
    }
}
