//! Locating the prose regions the passes operate on.

use crate::model::{source, ElementMatcher, NodeId, PageTree};

const DETAILED_DESCRIPTION: &str = "Detailed Description";

/// Blocks that follow a "Detailed Description" group header.
pub fn detailed_description_blocks(tree: &PageTree) -> Vec<NodeId> {
    tree.find(
        tree.root(),
        &ElementMatcher::tag_class("h2", source::GROUP_HEADER),
    )
    .into_iter()
    .filter(|&h| tree.text_content(h).contains(DETAILED_DESCRIPTION))
    .filter_map(|h| tree.next_element_sibling(h))
    .collect()
}

/// Member documentation regions (`.memdoc`).
pub fn member_doc_blocks(tree: &PageTree) -> Vec<NodeId> {
    tree.find(tree.root(), &ElementMatcher::class(source::MEMBER_DOC))
}

/// Every text block: detailed descriptions first, then member documentation.
pub fn text_blocks(tree: &PageTree) -> Vec<NodeId> {
    let mut blocks = detailed_description_blocks(tree);
    for block in member_doc_blocks(tree) {
        if !blocks.contains(&block) {
            blocks.push(block);
        }
    }
    blocks
}

/// Whether a block is member documentation (as opposed to a description block).
pub fn is_member_doc(tree: &PageTree, block: NodeId) -> bool {
    tree.has_class(block, source::MEMBER_DOC)
}

/// Regions whose labeled lists become section panels: member documentation
/// and every `div.textblock`.
pub fn section_scopes(tree: &PageTree) -> Vec<NodeId> {
    let mut scopes = member_doc_blocks(tree);
    for block in tree.find(
        tree.root(),
        &ElementMatcher::tag_class("div", source::TEXT_BLOCK),
    ) {
        if !scopes.contains(&block) {
            scopes.push(block);
        }
    }
    scopes
}
