//! Transformation options and configuration.

/// Which passes run, and how panels are finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Move boilerplate paragraphs into metadata containers
    pub classify_metadata: bool,

    /// Mark lead paragraphs and drop empty ones
    pub style_blocks: bool,

    /// Turn labeled lists into section panels
    pub panelize_sections: bool,

    /// Turn member items into panels
    pub panelize_members: bool,

    /// Badge overloaded members
    pub mark_overloads: bool,

    /// Remove panels without text content
    pub discard_empty_panels: bool,

    /// Style qualifier labels
    pub style_labels: bool,

    /// Style directory and doc tables
    pub style_tables: bool,

    /// Turn reference lists into panels
    pub style_reflists: bool,
}

impl TransformOptions {
    /// Create new transform options with every pass enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave boilerplate paragraphs in place.
    pub fn without_metadata(mut self) -> Self {
        self.classify_metadata = false;
        self
    }

    /// Skip lead paragraph and empty paragraph handling.
    pub fn without_block_styling(mut self) -> Self {
        self.style_blocks = false;
        self
    }

    /// Leave labeled lists alone.
    pub fn without_sections(mut self) -> Self {
        self.panelize_sections = false;
        self
    }

    /// Leave member items alone.
    pub fn without_members(mut self) -> Self {
        self.panelize_members = false;
        self
    }

    /// Leave qualifier labels alone.
    pub fn without_labels(mut self) -> Self {
        self.style_labels = false;
        self
    }

    /// Leave tables alone.
    pub fn without_tables(mut self) -> Self {
        self.style_tables = false;
        self
    }

    /// Leave reference lists alone.
    pub fn without_reflists(mut self) -> Self {
        self.style_reflists = false;
        self
    }

    /// Keep panels even when they have no text.
    pub fn keep_empty_panels(mut self) -> Self {
        self.discard_empty_panels = false;
        self
    }

    /// Enable or disable overload badges.
    pub fn with_overload_markers(mut self, mark: bool) -> Self {
        self.mark_overloads = mark;
        self
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            classify_metadata: true,
            style_blocks: true,
            panelize_sections: true,
            panelize_members: true,
            mark_overloads: true,
            discard_empty_panels: true,
            style_labels: true,
            style_tables: true,
            style_reflists: true,
        }
    }
}
