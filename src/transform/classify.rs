//! Classification of generator boilerplate paragraphs.
//!
//! Doxygen appends fixed English sentences to member documentation
//! ("Definition at line 42 of file foo.hpp.", "References bar()." ...).
//! These are recognized here by whole-paragraph patterns; moving them is
//! left to [`super::metadata`].

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{ElementMatcher, NodeId, PageTree};

/// Category of a recognized boilerplate paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaCategory {
    /// "Definition at line ..."
    Definition,
    /// "This is an overloaded member function ..."
    Overload,
    /// "Referenced by ..."
    Referenced,
    /// "References ..."
    References,
    /// "Reimplemented in ..." / "Reimplemented from ..."
    Reimplemented,
    /// "Implements ..." / "Implemented in ..."
    Implemented,
}

impl MetaCategory {
    /// All categories in relocation order.
    pub const ALL: [MetaCategory; 6] = [
        MetaCategory::Definition,
        MetaCategory::Overload,
        MetaCategory::Referenced,
        MetaCategory::References,
        MetaCategory::Reimplemented,
        MetaCategory::Implemented,
    ];

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaCategory::Definition => "definition",
            MetaCategory::Overload => "overload",
            MetaCategory::Referenced => "referenced",
            MetaCategory::References => "references",
            MetaCategory::Reimplemented => "reimplemented",
            MetaCategory::Implemented => "implemented",
        }
    }

    /// Class tagging a relocated entry (`meta-definition`, ...).
    pub fn css_class(&self) -> &'static str {
        match self {
            MetaCategory::Definition => "meta-definition",
            MetaCategory::Overload => "meta-overload",
            MetaCategory::Referenced => "meta-referenced",
            MetaCategory::References => "meta-references",
            MetaCategory::Reimplemented => "meta-reimplemented",
            MetaCategory::Implemented => "meta-implemented",
        }
    }
}

impl std::fmt::Display for MetaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn patterns() -> &'static [(Regex, MetaCategory)] {
    static PATTERNS: OnceLock<Vec<(Regex, MetaCategory)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?s)^Definition at line.*\.$", MetaCategory::Definition),
            (r"(?s)^This is an overloaded.*\.$", MetaCategory::Overload),
            (r"(?s)^Referenced by.*\.$", MetaCategory::Referenced),
            (r"(?s)^References.*\.$", MetaCategory::References),
            (r"(?s)^Reimplemented (in|from).*\.$", MetaCategory::Reimplemented),
            (r"(?s)^Implement(ed in|s).*\.$", MetaCategory::Implemented),
        ]
        .into_iter()
        .map(|(pattern, category)| {
            (
                Regex::new(pattern).expect("metadata pattern is valid"),
                category,
            )
        })
        .collect()
    })
}

/// Classify paragraph text. Surrounding whitespace is ignored; the rest
/// must match a pattern completely.
///
/// # Example
/// ```
/// use doxpanel::transform::{classify, MetaCategory};
///
/// assert_eq!(classify("Referenced by main()."), Some(MetaCategory::Referenced));
/// assert_eq!(classify("See the references below"), None);
/// ```
pub fn classify(text: &str) -> Option<MetaCategory> {
    let text = text.trim();
    patterns()
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, category)| *category)
}

/// Classify the direct paragraph children of a text block, in document order.
pub fn classify_block(tree: &PageTree, block: NodeId) -> Vec<(NodeId, MetaCategory)> {
    tree.find_children(block, &ElementMatcher::tag("p"))
        .into_iter()
        .filter_map(|p| classify(&tree.text_content(p)).map(|category| (p, category)))
        .collect()
}
