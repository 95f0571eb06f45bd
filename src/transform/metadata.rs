//! Relocation of classified paragraphs into a block's metadata container.
//!
//! Member documentation gets its container in a panel footer placed right
//! after the `.memdoc`; description blocks get it inline, in front of the
//! first relocated paragraph.

use crate::model::{class, source, ElementMatcher, NodeId, PageTree};

use super::classify::{classify_block, MetaCategory};
use super::regions::is_member_doc;
use super::TransformStats;

const CONTAINER: ElementMatcher = ElementMatcher::class(class::META_INFO_BLOCK);

/// Find the metadata container already associated with a text block.
pub fn find_container(tree: &PageTree, block: NodeId) -> Option<NodeId> {
    if is_member_doc(tree, block) {
        if let Some(parent) = tree.parent(block) {
            return tree.find_first(parent, &CONTAINER);
        }
    }
    tree.find_first(block, &CONTAINER)
}

/// Return the block's metadata container, creating it on first use.
///
/// `anchor` is the paragraph about to be relocated; a description block's
/// container is inserted in front of it.
pub fn metadata_container(tree: &mut PageTree, block: NodeId, anchor: NodeId) -> NodeId {
    if let Some(existing) = find_container(tree, block) {
        return existing;
    }

    let list = tree.create_element_with_class("ul", class::META_INFO_BLOCK);
    if is_member_doc(tree, block) && tree.parent(block).is_some() {
        let footer = tree.create_element_with_class("div", class::PANEL_FOOTER);
        tree.append(footer, list);
        tree.insert_after(block, footer);
    } else {
        tree.insert_before(anchor, list);
    }
    list
}

/// Move a block's classified paragraphs into its metadata container.
///
/// Categories are relocated in [`MetaCategory::ALL`] order, paragraphs of
/// one category in document order. Returns the number of paragraphs moved.
pub fn relocate_metadata(tree: &mut PageTree, block: NodeId, stats: &mut TransformStats) -> usize {
    let classified = classify_block(tree, block);
    let mut moved = 0;

    for category in MetaCategory::ALL {
        for &(paragraph, _) in classified.iter().filter(|(_, c)| *c == category) {
            let container = metadata_container(tree, block, paragraph);
            let item = tree.create_element_with_class("li", category.css_class());
            tree.move_children(paragraph, item);
            tree.detach(paragraph);
            tree.append(container, item);
            stats.add_metadata(category);
            moved += 1;
        }
    }

    if let Some(container) = find_container(tree, block) {
        restyle_links(tree, container);
    }
    moved
}

/// Generator cross-reference links inside a container render as inline code.
fn restyle_links(tree: &mut PageTree, container: NodeId) {
    for link in tree.find(container, &ElementMatcher::tag_class("a", source::LINK)) {
        tree.remove_class(link, source::LINK);
        tree.add_class(link, class::CODE);
    }
}

/// Whether the container holds an entry of the given category.
pub fn has_entry(tree: &PageTree, container: NodeId, category: MetaCategory) -> bool {
    tree.find_first(container, &ElementMatcher::class(category.css_class()))
        .is_some()
}
