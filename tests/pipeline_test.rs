//! End-to-end tests for the transformation pipeline.

use doxpanel::model::ElementMatcher;
use doxpanel::transform::{classify, label_severity, section_severity};
use doxpanel::{parse_html, transform, MetaCategory, NodeId, PageTree, Severity, TransformOptions};

fn transformed(body: &str) -> PageTree {
    let mut tree = parse_html(&format!(
        "<!DOCTYPE html><html><head></head><body><div class=\"contents\">{}</div></body></html>",
        body
    ));
    transform(&mut tree, &TransformOptions::default());
    tree
}

fn member(doc: &str) -> String {
    format!(
        "<div class=\"memitem\"><div class=\"memproto\">void solve()</div>\
         <div class=\"memdoc\">{}</div></div>",
        doc
    )
}

fn first(tree: &PageTree, matcher: ElementMatcher) -> NodeId {
    tree.find_first(tree.root(), &matcher)
        .unwrap_or_else(|| panic!("no element matching {:?}", matcher))
}

fn texts(tree: &PageTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| tree.text_content(id)).collect()
}

// ==================== Metadata ====================

#[test]
fn test_member_doc_scenario() {
    let tree = transformed(&member(
        "<p>Some description.</p><p></p>\
         <p>Definition at line 42 of file foo.hpp.</p>\
         <p>References bar().</p>",
    ));

    let memdoc = first(&tree, ElementMatcher::class("memdoc"));
    let paragraphs = tree.element_children(memdoc);
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(tree.text_content(paragraphs[0]), "Some description.");
    assert!(tree.has_class(paragraphs[0], "lead"));

    let container = first(&tree, ElementMatcher::class("meta-info-block"));
    let footer = tree.parent(container).unwrap();
    assert!(tree.has_class(footer, "panel-footer"));
    assert_eq!(tree.prev_element_sibling(footer), Some(memdoc));

    let items = tree.element_children(container);
    assert_eq!(items.len(), 2);
    assert_eq!(tree.classes(items[0]), vec!["meta-definition"]);
    assert_eq!(tree.classes(items[1]), vec!["meta-references"]);
    assert_eq!(
        texts(&tree, &items),
        vec!["Definition at line 42 of file foo.hpp.", "References bar()."]
    );
}

#[test]
fn test_description_block_scenario() {
    let tree = transformed(
        "<h2 class=\"groupheader\">Detailed Description</h2>\
         <div class=\"textblock\"><p>some description.</p><p></p>\
         <p>Definition at line 42 of file foo.hpp.</p><p>References bar().</p></div>",
    );

    let block = first(&tree, ElementMatcher::class("textblock"));
    let children = tree.element_children(block);
    assert_eq!(children.len(), 2);
    assert_eq!(tree.text_content(children[0]), "Some description.");
    assert!(tree.has_class(children[0], "lead"));
    assert!(tree.has_class(children[1], "meta-info-block"));
    assert_eq!(tree.element_children(children[1]).len(), 2);
}

#[test]
fn test_every_category_is_relocated_with_text_intact() {
    let sentences = [
        ("Definition at line 7 of file a.hpp.", "meta-definition"),
        (
            "This is an overloaded member function, provided for convenience.",
            "meta-overload",
        ),
        ("Referenced by main().", "meta-referenced"),
        ("References helper().", "meta-references"),
        ("Reimplemented from Base.", "meta-reimplemented"),
        ("Implements Interface::run().", "meta-implemented"),
    ];
    let doc: String = std::iter::once("<p>Intro.</p>".to_string())
        .chain(sentences.iter().rev().map(|(s, _)| format!("<p>{}</p>", s)))
        .collect();
    let tree = transformed(&member(&doc));

    let container = first(&tree, ElementMatcher::class("meta-info-block"));
    let items = tree.element_children(container);
    assert_eq!(items.len(), sentences.len());
    for (item, (sentence, class)) in items.iter().zip(sentences.iter()) {
        assert_eq!(tree.classes(*item), vec![*class]);
        assert_eq!(tree.text_content(*item), *sentence);
    }

    let memdoc = first(&tree, ElementMatcher::class("memdoc"));
    assert_eq!(tree.element_children(memdoc).len(), 1);
}

#[test]
fn test_partial_matches_stay_in_place() {
    assert_eq!(classify("Definition at line 3"), None);
    assert_eq!(classify("See References."), None);
    assert_eq!(
        classify("  Implemented in Derived.\n"),
        Some(MetaCategory::Implemented)
    );

    let tree = transformed(&member("<p>Definition at line 3</p>"));
    assert!(tree
        .find_first(tree.root(), &ElementMatcher::class("meta-info-block"))
        .is_none());
}

#[test]
fn test_links_in_metadata_become_code() {
    let tree = transformed(&member(
        "<p>Text.</p><p>Referenced by <a class=\"el\" href=\"a.html\">a()</a> and \
         <a class=\"el\" href=\"b.html\">b()</a>.</p>",
    ));
    let container = first(&tree, ElementMatcher::class("meta-info-block"));
    let links = tree.find(container, &ElementMatcher::tag("a"));
    assert_eq!(links.len(), 2);
    for link in links {
        assert_eq!(tree.classes(link), vec!["code"]);
    }
}

// ==================== Blocks ====================

#[test]
fn test_no_empty_paragraphs_remain() {
    let tree = transformed(&member("<p> </p><p>first.</p><p>\n</p><p>second.</p><p></p>"));
    let memdoc = first(&tree, ElementMatcher::class("memdoc"));
    let paragraphs = tree.find(memdoc, &ElementMatcher::tag("p"));
    assert_eq!(texts(&tree, &paragraphs), vec!["First.", "second."]);

    let leads: Vec<NodeId> = paragraphs
        .iter()
        .copied()
        .filter(|&p| tree.has_class(p, "lead"))
        .collect();
    assert_eq!(leads, vec![paragraphs[0]]);
}

#[test]
fn test_lead_opening_with_code_is_not_capitalized() {
    let tree = transformed(&member("<p><code>std::vector</code> holding the nodes.</p>"));
    let memdoc = first(&tree, ElementMatcher::class("memdoc"));
    let lead = tree.element_children(memdoc)[0];
    assert!(tree.has_class(lead, "lead"));
    assert_eq!(tree.text_content(lead), "std::vector holding the nodes.");
}

// ==================== Sections ====================

#[test]
fn test_parameters_scenario() {
    let tree = transformed(&member(
        "<p>Solve.</p><dl class=\"section\"><dt>Parameters</dt>\
         <dd>x — the input</dd><dd>y — the output</dd></dl>",
    ));

    let panel = first(&tree, ElementMatcher::class("member-section"));
    assert_eq!(tree.tag(panel), Some("div"));
    assert!(tree.has_class(panel, "panel"));
    assert!(tree.has_class(panel, "panel-primary"));
    assert!(!tree.has_class(panel, "panel-default"));

    let lists = tree.find(panel, &ElementMatcher::class("list-group"));
    assert_eq!(lists.len(), 1);
    let items = tree.element_children(lists[0]);
    assert_eq!(texts(&tree, &items), vec!["x — the input", "y — the output"]);
    for item in items {
        assert!(tree.has_class(item, "list-group-item"));
    }
}

#[test]
fn test_section_categories() {
    assert_eq!(section_severity("Returns"), Severity::Success);
    assert_eq!(section_severity("Exceptions"), Severity::Danger);
    assert_eq!(section_severity("Since"), Severity::Default);

    let tree = transformed(&member(
        "<p>Solve.</p>\
         <dl class=\"section return\"><dt>Returns</dt><dd>the result</dd></dl>\
         <dl class=\"exception\"><dt>Exceptions</dt><dd>\
         <table class=\"exception\"><tr><td class=\"paramname\">std::runtime_error</td><td>on failure</td></tr></table>\
         </dd></dl>\
         <dl class=\"section since\"><dt>Since</dt><dd>2.1</dd></dl>",
    ));

    let panels = tree.find(tree.root(), &ElementMatcher::class("member-section"));
    assert_eq!(panels.len(), 3);
    assert!(tree.has_class(panels[0], "panel-success"));
    assert!(tree.has_class(panels[1], "panel-danger"));
    assert!(tree.has_class(panels[2], "panel-default"));

    // one body: no merge list
    assert!(tree.find(panels[0], &ElementMatcher::tag("ul")).is_empty());

    let table = first(&tree, ElementMatcher::tag_class("table", "exception"));
    assert!(tree.has_class(table, "table"));
    assert_eq!(tree.parent(table), Some(panels[1]));
}

#[test]
fn test_empty_section_discarded_but_member_kept() {
    let tree = transformed(&member(
        "<p>Solve.</p><dl class=\"section note\"><dt>Note</dt><dd> </dd></dl>",
    ));
    assert!(tree
        .find_first(tree.root(), &ElementMatcher::class("member-section"))
        .is_none());
    assert!(tree
        .find_first(tree.root(), &ElementMatcher::class("memitem"))
        .is_some());
}

// ==================== Members ====================

#[test]
fn test_empty_member_scenario() {
    let tree = transformed(&format!(
        "{}{}",
        member(""),
        "<div class=\"memitem\"><div class=\"memproto\">int kept</div>\
         <div class=\"memdoc\"><p>Kept.</p></div></div>"
    ));

    let items = tree.find(tree.root(), &ElementMatcher::class("memitem"));
    assert_eq!(items.len(), 1);
    assert_eq!(
        tree.text_content(tree.element_children(items[0])[0]),
        "int kept"
    );
}

#[test]
fn test_member_panel_roles() {
    let tree = transformed(&member("<p>Solve.</p><p>Definition at line 1 of file s.hpp.</p>"));
    let item = first(&tree, ElementMatcher::class("memitem"));
    assert_eq!(tree.classes(item), vec!["memitem", "panel", "panel-default"]);

    let parts = tree.element_children(item);
    assert_eq!(parts.len(), 3);
    assert!(tree.has_class(parts[0], "panel-heading"));
    assert!(tree.has_class(parts[1], "panel-body"));
    assert!(tree.has_class(parts[2], "panel-footer"));
}

// ==================== Labels ====================

#[test]
fn test_static_label_once() {
    assert_eq!(label_severity("static"), Severity::Success);

    let mut tree = transformed("<span class=\"mlabel\">static</span>");
    transform(&mut tree, &TransformOptions::default());

    let label = first(&tree, ElementMatcher::class("mlabel"));
    let severities: Vec<&str> = tree
        .classes(label)
        .into_iter()
        .filter(|c| c.starts_with("label-"))
        .collect();
    assert_eq!(severities, vec!["label-success"]);
}

// ==================== Idempotence ====================

#[test]
fn test_second_run_changes_nothing() {
    let mut tree = transformed(
        &(String::from(
            "<h2 class=\"groupheader\">Detailed Description</h2>\
             <div class=\"textblock\"><p>class docs.</p>\
             <dl class=\"section note\"><dt>Note</dt><dd>careful</dd></dl>\
             <p>Implemented in Derived.</p></div>",
        ) + &member(
            "<p>solve.</p><dl class=\"params\"><dt>Parameters</dt><dd>a</dd><dd>b</dd></dl>\
             <p>This is an overloaded member function.</p>",
        )),
    );
    let once = doxpanel::render::to_html(&tree);

    let stats = transform(&mut tree, &TransformOptions::default());
    assert_eq!(doxpanel::render::to_html(&tree), once);
    assert_eq!(stats.metadata_count(), 0);
    assert_eq!(stats.section_count(), 0);
    assert_eq!(stats.lead_paragraphs, 0);
}
