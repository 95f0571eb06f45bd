//! Labeled lists (`dl`/`dt`/`dd`) into category-styled section panels.

use crate::model::{class, source, ElementMatcher, NodeId, PageTree, Severity};

use super::panel::{self, PanelParts};
use super::regions::section_scopes;
use super::{TransformOptions, TransformStats};

const LABEL: ElementMatcher = ElementMatcher::tag("dt");
const BODY: ElementMatcher = ElementMatcher::tag("dd");

/// Panel category for a section label.
///
/// # Example
/// ```
/// use doxpanel::model::Severity;
/// use doxpanel::transform::section_severity;
///
/// assert_eq!(section_severity("Returns"), Severity::Success);
/// assert_eq!(section_severity("See also"), Severity::Default);
/// ```
pub fn section_severity(label: &str) -> Severity {
    match label.trim() {
        "Template Parameters" | "Parameters" => Severity::Primary,
        "Returns" => Severity::Success,
        "Precondition" | "Note" => Severity::Info,
        "Exceptions" => Severity::Danger,
        "Todo:" => Severity::Warning,
        _ => Severity::Default,
    }
}

/// Outcome of panelizing one labeled list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Not a labeled list; left untouched
    Skipped,
    /// Converted into a panel of the given category
    Panel(Severity),
    /// Converted, then discarded for lack of content
    Discarded,
}

/// Whether `dl` is a labeled list this pass handles.
fn is_labeled_list(tree: &PageTree, dl: NodeId) -> bool {
    tree.tag(dl) == Some("dl")
        && !tree.has_class(dl, source::REFLIST)
        && !tree.find_children(dl, &LABEL).is_empty()
        && !tree.find_children(dl, &BODY).is_empty()
}

/// Convert one labeled list into a section panel.
pub fn panelize_section(
    tree: &mut PageTree,
    dl: NodeId,
    options: &TransformOptions,
    stats: &mut TransformStats,
) -> SectionOutcome {
    if !is_labeled_list(tree, dl) {
        return SectionOutcome::Skipped;
    }
    let label = tree.find_children(dl, &LABEL)[0];
    let bodies = tree.find_children(dl, &BODY);
    let severity = section_severity(&tree.text_content(label));

    let parts = PanelParts {
        heading: Some(label),
        bodies: bodies.clone(),
        footers: Vec::new(),
    };
    panel::apply_roles(tree, dl, &parts, class::MEMBER_SECTION);
    tree.add_class(dl, severity.panel_class());

    unwrap_param_tables(tree, &bodies);

    let bodies = tree.find_children(dl, &BODY);
    if bodies.len() > 1 {
        let list = tree.create_element_with_class("ul", class::LIST_GROUP);
        tree.insert_after(label, list);
        for body in bodies {
            let item = tree.create_element_with_class("li", class::LIST_GROUP_ITEM);
            tree.move_children(body, item);
            tree.detach(body);
            tree.append(list, item);
        }
    } else if let Some(&body) = bodies.first() {
        tree.retag(body, "div");
    }
    tree.retag(label, "div");
    tree.retag(dl, "div");

    let content: Vec<NodeId> = tree
        .children(dl)
        .into_iter()
        .filter(|&c| c != label)
        .collect();
    if options.discard_empty_panels && panel::is_contentless(tree, content) {
        panel::discard(tree, dl);
        stats.panels_discarded += 1;
        return SectionOutcome::Discarded;
    }

    stats.add_section(severity);
    SectionOutcome::Panel(severity)
}

/// Parameter and exception tables get table styling and replace their `dd`.
fn unwrap_param_tables(tree: &mut PageTree, bodies: &[NodeId]) {
    for &body in bodies {
        let tables: Vec<NodeId> = source::PARAM_TABLES
            .iter()
            .flat_map(|&c| tree.find(body, &ElementMatcher::tag_class("table", c)))
            .collect();
        if tables.is_empty() {
            continue;
        }
        for &table in &tables {
            tree.add_class(table, class::TABLE);
        }
        if tables.iter().any(|&t| tree.parent(t) == Some(body)) {
            tree.unwrap(body);
        }
    }
}

/// Panelize every labeled list inside member documentation and text blocks.
pub fn panelize_sections(
    tree: &mut PageTree,
    options: &TransformOptions,
    stats: &mut TransformStats,
) -> usize {
    let mut lists = Vec::new();
    for scope in section_scopes(tree) {
        for dl in tree.find(scope, &ElementMatcher::tag("dl")) {
            if !lists.contains(&dl) {
                lists.push(dl);
            }
        }
    }

    let mut converted = 0;
    for dl in lists {
        if !tree.is_attached(dl) {
            continue;
        }
        if let SectionOutcome::Panel(_) = panelize_section(tree, dl, options, stats) {
            converted += 1;
        }
    }
    log::debug!("panelized {} sections", converted);
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_html;

    fn first_dl(tree: &PageTree) -> NodeId {
        tree.find_first(tree.root(), &ElementMatcher::tag("dl")).unwrap()
    }

    fn run(html: &str) -> (PageTree, NodeId, SectionOutcome) {
        let mut tree = parse_html(html);
        let dl = first_dl(&tree);
        let mut stats = TransformStats::new();
        let outcome = panelize_section(&mut tree, dl, &TransformOptions::default(), &mut stats);
        (tree, dl, outcome)
    }

    #[test]
    fn test_severity_table() {
        assert_eq!(section_severity("Template Parameters"), Severity::Primary);
        assert_eq!(section_severity("Parameters"), Severity::Primary);
        assert_eq!(section_severity("Returns"), Severity::Success);
        assert_eq!(section_severity("Precondition"), Severity::Info);
        assert_eq!(section_severity("Note"), Severity::Info);
        assert_eq!(section_severity("Exceptions"), Severity::Danger);
        assert_eq!(section_severity("Todo:"), Severity::Warning);
        assert_eq!(section_severity("Since"), Severity::Default);
        assert_eq!(section_severity("returns"), Severity::Default);
    }

    #[test]
    fn test_single_body_is_retagged() {
        let (tree, dl, outcome) = run(
            "<dl class=\"section return\"><dt>Returns</dt><dd>the residual norm</dd></dl>",
        );
        assert_eq!(outcome, SectionOutcome::Panel(Severity::Success));
        assert_eq!(tree.tag(dl), Some("div"));
        assert!(tree.has_class(dl, "panel"));
        assert!(tree.has_class(dl, "member-section"));
        assert!(tree.has_class(dl, "panel-success"));
        assert!(!tree.has_class(dl, "panel-default"));

        let children = tree.element_children(dl);
        assert_eq!(children.len(), 2);
        assert_eq!(tree.tag(children[0]), Some("div"));
        assert!(tree.has_class(children[0], "panel-heading"));
        assert_eq!(tree.tag(children[1]), Some("div"));
        assert!(tree.has_class(children[1], "panel-body"));
        assert!(tree.find(tree.root(), &ElementMatcher::tag("ul")).is_empty());
    }

    #[test]
    fn test_multiple_bodies_merge_in_order() {
        let (tree, dl, outcome) = run(
            "<dl class=\"section see\"><dt>See also</dt><dd>a()</dd><dd>b()</dd><dd>c()</dd></dl>",
        );
        assert_eq!(outcome, SectionOutcome::Panel(Severity::Default));
        assert!(tree.has_class(dl, "panel-default"));

        let children = tree.element_children(dl);
        assert_eq!(children.len(), 2);
        let list = children[1];
        assert_eq!(tree.tag(list), Some("ul"));
        assert!(tree.has_class(list, "list-group"));
        let texts: Vec<String> = tree
            .element_children(list)
            .into_iter()
            .map(|li| tree.text_content(li))
            .collect();
        assert_eq!(texts, vec!["a()", "b()", "c()"]);
    }

    #[test]
    fn test_param_table_replaces_body() {
        let (tree, dl, outcome) = run(
            "<dl class=\"params\"><dt>Parameters</dt><dd>\
             <table class=\"params\"><tr><td class=\"paramname\">t</td><td>time</td></tr></table>\
             </dd></dl>",
        );
        assert_eq!(outcome, SectionOutcome::Panel(Severity::Primary));
        let children = tree.element_children(dl);
        assert_eq!(children.len(), 2);
        assert_eq!(tree.tag(children[1]), Some("table"));
        assert!(tree.has_class(children[1], "table"));
        assert!(tree.has_class(children[1], "params"));
    }

    #[test]
    fn test_empty_section_is_discarded() {
        let (tree, dl, outcome) = run(
            "<div class=\"memdoc\"><dl class=\"section note\"><dt>Note</dt><dd> </dd></dl></div>",
        );
        assert_eq!(outcome, SectionOutcome::Discarded);
        assert!(!tree.is_attached(dl));
    }

    #[test]
    fn test_empty_section_kept_when_configured() {
        let mut tree = parse_html("<dl><dt>Note</dt><dd></dd></dl>");
        let dl = first_dl(&tree);
        let mut stats = TransformStats::new();
        let options = TransformOptions::new().keep_empty_panels();
        let outcome = panelize_section(&mut tree, dl, &options, &mut stats);
        assert_eq!(outcome, SectionOutcome::Panel(Severity::Info));
        assert!(tree.is_attached(dl));
    }

    #[test]
    fn test_reflist_and_unlabeled_lists_skipped() {
        let (_, _, outcome) = run("<dl class=\"reflist\"><dt>Member x</dt><dd>later</dd></dl>");
        assert_eq!(outcome, SectionOutcome::Skipped);

        let (tree, dl, outcome) = run("<dl><dd>orphan</dd></dl>");
        assert_eq!(outcome, SectionOutcome::Skipped);
        assert_eq!(tree.tag(dl), Some("dl"));
        assert!(tree.attr(dl, "class").is_none());
    }

    #[test]
    fn test_panelize_sections_is_idempotent() {
        let mut tree = parse_html(
            "<div class=\"memitem\"><div class=\"memdoc\">\
             <dl class=\"section return\"><dt>Returns</dt><dd>x</dd></dl></div></div>\
             <div class=\"textblock\"><dl class=\"section note\"><dt>Note</dt><dd>y</dd></dl></div>",
        );
        let options = TransformOptions::default();
        let mut stats = TransformStats::new();

        assert_eq!(panelize_sections(&mut tree, &options, &mut stats), 2);
        let once = crate::render::to_html(&tree);
        assert_eq!(panelize_sections(&mut tree, &options, &mut stats), 0);
        assert_eq!(crate::render::to_html(&tree), once);
        assert_eq!(stats.section_count(), 2);
    }
}
