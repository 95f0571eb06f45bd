//! Qualifier labels (`.mlabel`) into severity badges.

use crate::model::{class, source, ElementMatcher, NodeId, PageTree, Severity};

use super::TransformStats;

/// Badge severity for a qualifier.
///
/// # Example
/// ```
/// use doxpanel::model::Severity;
/// use doxpanel::transform::label_severity;
///
/// assert_eq!(label_severity("static"), Severity::Success);
/// assert_eq!(label_severity("inline"), Severity::Default);
/// ```
pub fn label_severity(text: &str) -> Severity {
    match text.trim() {
        "delete" => Severity::Danger,
        "private" => Severity::Warning,
        "protected" => Severity::Primary,
        "static" => Severity::Success,
        "virtual" => Severity::Info,
        _ => Severity::Default,
    }
}

/// Give one label `label` and exactly one severity class, replacing any stale one.
pub fn style_label(tree: &mut PageTree, label: NodeId) -> Severity {
    let severity = label_severity(&tree.text_content(label));
    for stale in Severity::ALL.iter().filter(|&&s| s != severity) {
        tree.remove_class(label, stale.label_class());
    }
    tree.add_class(label, class::LABEL);
    tree.add_class(label, severity.label_class());
    severity
}

/// Style every qualifier label on the page.
pub fn style_labels(tree: &mut PageTree, stats: &mut TransformStats) -> usize {
    let labels = tree.find(tree.root(), &ElementMatcher::class(source::MLABEL));
    for &label in &labels {
        let severity = style_label(tree, label);
        stats.add_label(severity);
    }
    log::debug!("styled {} labels", labels.len());
    labels.len()
}
