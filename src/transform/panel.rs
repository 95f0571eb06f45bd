//! Panel roles and the empty-panel rule shared by section and member panels.

use crate::model::{class, NodeId, PageTree};

/// The parts of a panel under construction.
#[derive(Debug, Clone, Default)]
pub struct PanelParts {
    /// Title region
    pub heading: Option<NodeId>,
    /// Main content regions
    pub bodies: Vec<NodeId>,
    /// Footer regions
    pub footers: Vec<NodeId>,
}

impl PanelParts {
    /// Every non-heading region.
    pub fn content_regions(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.bodies.iter().chain(self.footers.iter()).copied()
    }
}

/// Give `container` and its parts their panel role classes.
pub fn apply_roles(tree: &mut PageTree, container: NodeId, parts: &PanelParts, modifier: &str) {
    tree.add_class(container, class::PANEL);
    tree.add_class(container, modifier);
    if let Some(heading) = parts.heading {
        tree.add_class(heading, class::PANEL_HEADING);
    }
    for &body in &parts.bodies {
        tree.add_class(body, class::PANEL_BODY);
    }
    for &footer in &parts.footers {
        tree.add_class(footer, class::PANEL_FOOTER);
    }
}

/// Whether every content region of a finished panel is textually empty.
///
/// A panel without any content region counts as empty.
pub fn is_contentless(tree: &PageTree, regions: impl IntoIterator<Item = NodeId>) -> bool {
    regions.into_iter().all(|region| tree.is_text_empty(region))
}

/// Remove a panel from the page.
pub fn discard(tree: &mut PageTree, container: NodeId) {
    log::debug!("discarding empty panel {:?}", container);
    tree.detach(container);
}
