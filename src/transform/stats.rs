//! Counters collected while transforming pages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Severity;

use super::classify::MetaCategory;

/// Statistics collected during a transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    /// Relocated paragraphs per metadata category
    pub metadata: BTreeMap<MetaCategory, u32>,

    /// Paragraphs newly marked as lead
    pub lead_paragraphs: u32,

    /// Empty paragraphs removed
    pub empty_paragraphs_removed: u32,

    /// Section panels per category
    pub section_panels: BTreeMap<Severity, u32>,

    /// Member items styled as panels
    pub member_panels: u32,

    /// Panels removed for lack of content
    pub panels_discarded: u32,

    /// Overload badges added
    pub overload_markers: u32,

    /// Qualifier labels styled, per severity
    pub labels: BTreeMap<Severity, u32>,

    /// Tables given generic table styling
    pub tables: u32,

    /// Reference list entries turned into panels
    pub reflist_entries: u32,
}

impl TransformStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a relocated paragraph.
    pub fn add_metadata(&mut self, category: MetaCategory) {
        *self.metadata.entry(category).or_insert(0) += 1;
    }

    /// Total relocated paragraphs.
    pub fn metadata_count(&self) -> u32 {
        self.metadata.values().sum()
    }

    /// Count a section panel.
    pub fn add_section(&mut self, severity: Severity) {
        *self.section_panels.entry(severity).or_insert(0) += 1;
    }

    /// Total section panels.
    pub fn section_count(&self) -> u32 {
        self.section_panels.values().sum()
    }

    /// Count a styled label.
    pub fn add_label(&mut self, severity: Severity) {
        *self.labels.entry(severity).or_insert(0) += 1;
    }

    /// Total styled labels.
    pub fn label_count(&self) -> u32 {
        self.labels.values().sum()
    }

    /// Whether nothing was changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &TransformStats) {
        for (&category, &count) in &other.metadata {
            *self.metadata.entry(category).or_insert(0) += count;
        }
        for (&severity, &count) in &other.section_panels {
            *self.section_panels.entry(severity).or_insert(0) += count;
        }
        for (&severity, &count) in &other.labels {
            *self.labels.entry(severity).or_insert(0) += count;
        }
        self.lead_paragraphs += other.lead_paragraphs;
        self.empty_paragraphs_removed += other.empty_paragraphs_removed;
        self.member_panels += other.member_panels;
        self.panels_discarded += other.panels_discarded;
        self.overload_markers += other.overload_markers;
        self.tables += other.tables;
        self.reflist_entries += other.reflist_entries;
    }
}
