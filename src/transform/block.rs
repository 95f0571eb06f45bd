//! Lead paragraph emphasis and empty paragraph removal.

use crate::model::{class, ElementMatcher, NodeId, PageTree};

use super::TransformStats;

const PARAGRAPH: ElementMatcher = ElementMatcher::tag("p");

/// A paragraph with no element content and whitespace-only text.
pub fn is_empty_paragraph(tree: &PageTree, paragraph: NodeId) -> bool {
    tree.element_children(paragraph).is_empty() && tree.is_text_empty(paragraph)
}

/// Style a text block: drop its empty paragraphs, then mark the first
/// remaining paragraph as the lead and capitalize it.
///
/// Running this twice changes nothing the second time.
pub fn style_block(tree: &mut PageTree, block: NodeId, stats: &mut TransformStats) {
    for paragraph in tree.find(block, &PARAGRAPH) {
        if is_empty_paragraph(tree, paragraph) {
            tree.detach(paragraph);
            stats.empty_paragraphs_removed += 1;
        }
    }

    if let Some(lead) = tree.find_children(block, &PARAGRAPH).into_iter().next() {
        if !tree.has_class(lead, class::LEAD) {
            tree.add_class(lead, class::LEAD);
            stats.lead_paragraphs += 1;
        }
        tree.capitalize_first_char(lead);
    }
}
