//! Page tree types.
//!
//! A generated page is held as a [`PageTree`]: an ordered arena tree of
//! elements, text and comments. Passes address nodes by [`NodeId`] and select
//! elements with the small [`ElementMatcher`] predicate.

mod style;
mod tree;

pub use indextree::NodeId;
pub use style::{class, source, Severity};
pub use tree::{NodeKind, PageTree};

/// Element predicate: optional tag name plus optional class token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementMatcher {
    /// Required tag name
    pub tag: Option<&'static str>,
    /// Required class token
    pub class: Option<&'static str>,
}

impl ElementMatcher {
    /// Any element.
    pub const ANY: ElementMatcher = ElementMatcher {
        tag: None,
        class: None,
    };

    /// Elements with the given tag.
    pub const fn tag(tag: &'static str) -> Self {
        Self {
            tag: Some(tag),
            class: None,
        }
    }

    /// Elements carrying the given class.
    pub const fn class(class: &'static str) -> Self {
        Self {
            tag: None,
            class: Some(class),
        }
    }

    /// Elements with the given tag and class.
    pub const fn tag_class(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag: Some(tag),
            class: Some(class),
        }
    }
}
