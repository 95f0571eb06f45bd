//! The page transformation pipeline.
//!
//! Passes run in a fixed order over one [`PageTree`]:
//!
//! 1. metadata relocation, lead paragraph and empty paragraph handling for
//!    every detailed description and member documentation block
//! 2. section panels for labeled lists
//! 3. member item panels and overload badges
//! 4. table and reference list styling
//! 5. qualifier labels
//!
//! No pass fails. Missing structure leaves the page as it is.

mod block;
mod classify;
mod labels;
mod members;
mod metadata;
mod options;
mod panel;
mod regions;
mod sections;
mod stats;
mod tables;

pub use block::{is_empty_paragraph, style_block};
pub use classify::{classify, classify_block, MetaCategory};
pub use labels::{label_severity, style_label, style_labels};
pub use members::{
    is_overloaded, label_area, mark_overload, panelize_member, panelize_members, MemberOutcome,
    OVERLOAD_BADGE,
};
pub use metadata::{find_container, has_entry, metadata_container, relocate_metadata};
pub use options::TransformOptions;
pub use panel::PanelParts;
pub use regions::{detailed_description_blocks, member_doc_blocks, section_scopes, text_blocks};
pub use sections::{panelize_section, panelize_sections, section_severity, SectionOutcome};
pub use stats::TransformStats;
pub use tables::{style_directory_tables, style_dox_tables, style_reflists};

use crate::model::PageTree;

/// Runs the enabled passes over a page.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: TransformOptions,
}

impl Pipeline {
    /// Create a pipeline with the given options.
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Transform a page in place.
    pub fn run(&self, tree: &mut PageTree) -> TransformStats {
        let options = &self.options;
        let mut stats = TransformStats::new();

        for block in text_blocks(tree) {
            if !tree.is_attached(block) {
                continue;
            }
            if options.classify_metadata {
                relocate_metadata(tree, block, &mut stats);
            }
            if options.style_blocks {
                style_block(tree, block, &mut stats);
            }
        }
        log::debug!(
            "relocated {} metadata paragraphs, {} lead paragraphs",
            stats.metadata_count(),
            stats.lead_paragraphs
        );

        if options.panelize_sections {
            panelize_sections(tree, options, &mut stats);
        }
        if options.panelize_members {
            panelize_members(tree, options, &mut stats);
        }
        if options.style_tables {
            style_directory_tables(tree, &mut stats);
            style_dox_tables(tree, &mut stats);
        }
        if options.style_reflists {
            style_reflists(tree, &mut stats);
        }
        if options.style_labels {
            style_labels(tree, &mut stats);
        }

        log::debug!(
            "transform done: {} sections, {} members, {} discarded",
            stats.section_count(),
            stats.member_panels,
            stats.panels_discarded
        );
        stats
    }
}

/// Transform a page in place with the given options.
pub fn transform(tree: &mut PageTree, options: &TransformOptions) -> TransformStats {
    Pipeline::new(options.clone()).run(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementMatcher;
    use crate::parser::parse_html;
    use crate::render::to_html;

    const PAGE: &str = "<div class=\"contents\">\
        <h2 class=\"groupheader\">Detailed Description</h2>\
        <div class=\"textblock\"><p>solver for stiff systems.</p>\
        <dl class=\"section note\"><dt>Note</dt><dd>Not thread safe.</dd></dl></div>\
        <div class=\"memitem\"><div class=\"memproto\">\
        <table class=\"mlabels\"><tr><td class=\"mlabels-left\">void step()</td>\
        <td class=\"mlabels-right\"><span class=\"mlabels\"><span class=\"mlabel\">virtual</span></span></td>\
        </tr></table></div>\
        <div class=\"memdoc\"><p>advance one step.</p><p></p>\
        <dl class=\"section return\"><dt>Returns</dt><dd>true on success</dd></dl>\
        <p>This is an overloaded member function.</p>\
        <p>Definition at line 10 of file solver.hpp.</p></div></div>\
        <div class=\"memitem\"><div class=\"memproto\">int unused</div><div class=\"memdoc\"></div></div>\
        </div>";

    #[test]
    fn test_full_pipeline() {
        let mut tree = parse_html(PAGE);
        let stats = transform(&mut tree, &TransformOptions::default());

        assert_eq!(stats.metadata_count(), 2);
        assert_eq!(stats.lead_paragraphs, 2);
        assert_eq!(stats.empty_paragraphs_removed, 1);
        assert_eq!(stats.section_count(), 2);
        assert_eq!(stats.member_panels, 1);
        assert_eq!(stats.panels_discarded, 1);
        assert_eq!(stats.overload_markers, 1);
        assert_eq!(stats.label_count(), 2);

        let items = tree.find(tree.root(), &ElementMatcher::class("memitem"));
        assert_eq!(items.len(), 1);

        let badge = tree
            .find_first(tree.root(), &ElementMatcher::class("label-default"))
            .unwrap();
        assert_eq!(tree.text_content(badge), "overload");
        let virtual_label = tree
            .find_first(tree.root(), &ElementMatcher::class("label-info"))
            .unwrap();
        assert_eq!(tree.text_content(virtual_label), "virtual");
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let mut tree = parse_html(PAGE);
        transform(&mut tree, &TransformOptions::default());
        let once = to_html(&tree);

        let stats = transform(&mut tree, &TransformOptions::default());
        assert_eq!(to_html(&tree), once);
        assert_eq!(stats.metadata_count(), 0);
        assert_eq!(stats.section_count(), 0);
        assert_eq!(stats.overload_markers, 0);
    }

    #[test]
    fn test_disabled_passes_leave_page_alone() {
        let mut tree = parse_html(PAGE);
        let before = to_html(&tree);
        let options = TransformOptions {
            classify_metadata: false,
            style_blocks: false,
            panelize_sections: false,
            panelize_members: false,
            mark_overloads: false,
            discard_empty_panels: false,
            style_labels: false,
            style_tables: false,
            style_reflists: false,
        };
        let stats = Pipeline::new(options).run(&mut tree);
        assert!(stats.is_empty());
        assert_eq!(to_html(&tree), before);
    }
}
