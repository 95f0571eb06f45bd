//! Member items (`.memitem`) into titled panels, with overload badges.

use crate::model::{class, source, ElementMatcher, NodeId, PageTree};

use super::classify::MetaCategory;
use super::metadata::has_entry;
use super::panel::{self, PanelParts};
use super::{TransformOptions, TransformStats};

/// Text of the badge marking overloaded members.
pub const OVERLOAD_BADGE: &str = "overload";

/// Outcome of panelizing one member item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOutcome {
    /// Styled as a panel (possibly already styled by an earlier run)
    Panel,
    /// Removed for lack of content
    Discarded,
}

fn member_parts(tree: &PageTree, item: NodeId) -> PanelParts {
    PanelParts {
        heading: tree
            .find_children(item, &ElementMatcher::class(source::MEMBER_PROTO))
            .into_iter()
            .next(),
        bodies: tree.find_children(item, &ElementMatcher::class(source::MEMBER_DOC)),
        footers: tree.find_children(item, &ElementMatcher::class(class::PANEL_FOOTER)),
    }
}

/// Style one member item as a panel, discarding it when neither its
/// documentation nor its footer carries any text.
pub fn panelize_member(
    tree: &mut PageTree,
    item: NodeId,
    options: &TransformOptions,
    stats: &mut TransformStats,
) -> MemberOutcome {
    let fresh = !tree.has_class(item, class::PANEL);
    let parts = member_parts(tree, item);
    panel::apply_roles(tree, item, &parts, class::PANEL_DEFAULT);

    if options.discard_empty_panels && panel::is_contentless(tree, parts.content_regions()) {
        panel::discard(tree, item);
        stats.panels_discarded += 1;
        return MemberOutcome::Discarded;
    }

    if fresh {
        stats.member_panels += 1;
    }
    MemberOutcome::Panel
}

/// Whether the item's footer metadata records an overload notice.
pub fn is_overloaded(tree: &PageTree, item: NodeId) -> bool {
    tree.find_children(item, &ElementMatcher::class(class::PANEL_FOOTER))
        .into_iter()
        .flat_map(|footer| tree.find(footer, &ElementMatcher::class(class::META_INFO_BLOCK)))
        .any(|container| has_entry(tree, container, MetaCategory::Overload))
}

/// The qualifier label area of a member heading:
/// `table.mlabels td.mlabels-right > span.mlabels`.
pub fn label_area(tree: &PageTree, heading: NodeId) -> Option<NodeId> {
    tree.find(heading, &ElementMatcher::tag_class("table", source::MLABELS))
        .into_iter()
        .flat_map(|table| tree.find(table, &ElementMatcher::tag_class("td", source::MLABELS_RIGHT)))
        .flat_map(|cell| tree.find_children(cell, &ElementMatcher::class(source::MLABELS)))
        .next()
}

/// Prepend an "overload" badge into the heading's label area.
///
/// Returns `false` when there is no label area or the badge is already there.
pub fn mark_overload(tree: &mut PageTree, heading: NodeId) -> bool {
    let Some(area) = label_area(tree, heading) else {
        return false;
    };
    let present = tree
        .find_children(area, &ElementMatcher::class(source::MLABEL))
        .into_iter()
        .any(|label| tree.text_content(label).trim() == OVERLOAD_BADGE);
    if present {
        return false;
    }

    let badge = tree.create_element_with_class("span", "mlabel label label-default");
    let text = tree.create_text(OVERLOAD_BADGE);
    tree.append(badge, text);
    tree.prepend(area, badge);
    true
}

/// Panelize every member item on the page and badge the overloaded ones.
pub fn panelize_members(
    tree: &mut PageTree,
    options: &TransformOptions,
    stats: &mut TransformStats,
) -> usize {
    let items = tree.find(tree.root(), &ElementMatcher::class(source::MEMBER_ITEM));
    let mut panels = 0;

    for item in items {
        if !tree.is_attached(item) {
            continue;
        }
        if panelize_member(tree, item, options, stats) == MemberOutcome::Discarded {
            continue;
        }
        panels += 1;

        if !options.mark_overloads || !is_overloaded(tree, item) {
            continue;
        }
        let heading = tree
            .find_children(item, &ElementMatcher::class(class::PANEL_HEADING))
            .into_iter()
            .next();
        if let Some(heading) = heading {
            if mark_overload(tree, heading) {
                stats.overload_markers += 1;
            }
        }
    }
    log::debug!("styled {} member panels", panels);
    panels
}
