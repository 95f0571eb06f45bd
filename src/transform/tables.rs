//! Directory tables, generic doc tables and reference lists.

use crate::model::{class, source, ElementMatcher, NodeId, PageTree};

use super::TransformStats;

fn push_unique(list: &mut Vec<NodeId>, items: Vec<NodeId>) {
    for item in items {
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

/// Style `.directory table.directory` and turn its icons into badges.
///
/// Each `span.icon` takes the place of its enclosing span.
pub fn style_directory_tables(tree: &mut PageTree, stats: &mut TransformStats) -> usize {
    let mut tables = Vec::new();
    for scope in tree.find(tree.root(), &ElementMatcher::class(source::DIRECTORY)) {
        push_unique(
            &mut tables,
            tree.find(scope, &ElementMatcher::tag_class("table", source::DIRECTORY)),
        );
    }

    for &table in &tables {
        if !tree.has_class(table, class::TABLE) {
            tree.add_class(table, class::TABLE);
            stats.tables += 1;
        }
        for icon in tree.find(table, &ElementMatcher::tag_class("span", source::ICON)) {
            if let Some(parent) = tree.parent(icon) {
                if tree.tag(parent) == Some("span") {
                    tree.unwrap(parent);
                }
            }
            tree.remove_class(icon, source::ICON);
            tree.add_class(icon, class::BADGE);
        }
    }
    tables.len()
}

/// Give `table.doxtable` generic table styling.
pub fn style_dox_tables(tree: &mut PageTree, stats: &mut TransformStats) -> usize {
    let tables = tree.find(
        tree.root(),
        &ElementMatcher::tag_class("table", source::DOX_TABLE),
    );
    for &table in &tables {
        if !tree.has_class(table, class::TABLE) {
            tree.add_class(table, class::TABLE);
            stats.tables += 1;
        }
    }
    tables.len()
}

/// Turn every `dt`/`dd` pair of `div.textblock dl.reflist` into a panel.
///
/// The label becomes the heading of a new `div.panel.panel-default` that
/// takes its place; the following body moves into that panel. Paragraphs
/// in panel bodies lose their classes.
pub fn style_reflists(tree: &mut PageTree, stats: &mut TransformStats) -> usize {
    let mut lists = Vec::new();
    for block in tree.find(
        tree.root(),
        &ElementMatcher::tag_class("div", source::TEXT_BLOCK),
    ) {
        push_unique(
            &mut lists,
            tree.find(block, &ElementMatcher::tag_class("dl", source::REFLIST)),
        );
    }

    let mut entries = 0;
    for &list in &lists {
        entries += panelize_reflist(tree, list);
        for body in tree.find(list, &ElementMatcher::class(class::PANEL_BODY)) {
            for paragraph in tree.find(body, &ElementMatcher::tag("p")) {
                tree.clear_classes(paragraph);
            }
        }
    }
    stats.reflist_entries += entries as u32;
    log::debug!("styled {} reference list entries", entries);
    entries
}

fn panelize_reflist(tree: &mut PageTree, list: NodeId) -> usize {
    let mut current: Option<NodeId> = None;
    let mut entries = 0;

    for child in tree.element_children(list) {
        match tree.tag(child) {
            Some("dt") => {
                let panel = tree.create_element_with_class("div", "panel panel-default");
                tree.wrap(child, panel);
                tree.retag(child, "div");
                tree.clear_classes(child);
                tree.add_class(child, class::PANEL_HEADING);
                current = Some(panel);
                entries += 1;
            }
            Some("dd") => {
                let Some(panel) = current.take() else {
                    continue;
                };
                tree.append(panel, child);
                tree.retag(child, "div");
                tree.clear_classes(child);
                tree.add_class(child, class::PANEL_BODY);
            }
            _ => {}
        }
    }
    entries
}
