//! # doxpanel
//!
//! Post-processor for Doxygen HTML output.
//!
//! This library rewrites the markup of generated API reference pages into a
//! panel-based presentation using Bootstrap 3 classes: member items become
//! panels, labeled sections ("Parameters", "Returns", ...) become colored
//! panels, boilerplate sentences move into a metadata footer, and qualifier
//! tags become badges.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doxpanel::{transform_file, transform_file_in_place};
//!
//! fn main() -> doxpanel::Result<()> {
//!     // Transform one page and print the result
//!     let html = transform_file("html/classFoo.html")?;
//!     println!("{}", html);
//!
//!     // Or rewrite it on disk
//!     let stats = transform_file_in_place("html/classBar.html")?;
//!     println!("{} member panels", stats.member_panels);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Metadata footers**: "Definition at line ...", "References ..." and
//!   similar sentences are collected into one list per block
//! - **Section panels**: labeled lists styled by category
//! - **Member panels**: signature heading, documentation body, metadata footer
//! - **Badges**: qualifier labels and overload markers
//! - **Site processing**: whole output directories, in parallel with Rayon

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;
pub mod transform;

// Re-export commonly used types
pub use detect::{detect_generator, is_doxygen_page, GeneratorInfo};
pub use error::{Error, Result};
pub use model::{ElementMatcher, NodeId, NodeKind, PageTree, Severity};
pub use parser::{parse_html, ErrorMode, PageParser, ParseOptions};
pub use render::JsonFormat;
pub use site::{process_site, PageReport, PageStatus, SiteOptions, SiteReport};
pub use transform::{transform, MetaCategory, Pipeline, TransformOptions, TransformStats};

use std::fs;
use std::path::Path;

/// Parse a generated HTML page into a page tree.
///
/// # Example
///
/// ```no_run
/// use doxpanel::parse_file;
///
/// let tree = parse_file("html/classFoo.html").unwrap();
/// println!("{}", doxpanel::render::to_html(&tree));
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PageTree> {
    let parser = PageParser::open(path)?;
    parser.parse()
}

/// Parse a generated HTML page with custom options.
///
/// # Example
///
/// ```no_run
/// use doxpanel::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient().require_doxygen(true);
/// let tree = parse_file_with_options("html/index.html", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<PageTree> {
    let parser = PageParser::open_with_options(path, options)?;
    parser.parse()
}

/// Transform HTML text with every pass enabled.
///
/// # Example
///
/// ```
/// let html = doxpanel::transform_html("<span class=\"mlabel\">static</span>");
/// assert!(html.contains("class=\"mlabel label label-success\""));
/// ```
pub fn transform_html(html: &str) -> String {
    transform_html_with_options(html, &TransformOptions::default())
}

/// Transform HTML text with custom options.
pub fn transform_html_with_options(html: &str, options: &TransformOptions) -> String {
    let mut tree = parse_html(html);
    transform(&mut tree, options);
    render::to_html(&tree)
}

/// Transform a generated page and return the resulting HTML.
///
/// # Example
///
/// ```no_run
/// let html = doxpanel::transform_file("html/classFoo.html").unwrap();
/// std::fs::write("classFoo.html", html).unwrap();
/// ```
pub fn transform_file<P: AsRef<Path>>(path: P) -> Result<String> {
    Doxpanel::new().transform_file(path)
}

/// Transform a generated page and overwrite it.
pub fn transform_file_in_place<P: AsRef<Path>>(path: P) -> Result<TransformStats> {
    let path = path.as_ref();
    let result = Doxpanel::new().parse(path)?;
    fs::write(path, result.to_html())?;
    Ok(result.stats)
}

/// Dump a page (after transformation) as JSON.
///
/// # Example
///
/// ```no_run
/// use doxpanel::{to_json, JsonFormat};
///
/// let json = to_json("html/classFoo.html", JsonFormat::Pretty).unwrap();
/// std::fs::write("classFoo.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    Doxpanel::new().parse(path)?.to_json(format)
}

/// Builder for reading and transforming generated pages.
///
/// # Example
///
/// ```no_run
/// use doxpanel::Doxpanel;
///
/// let html = Doxpanel::new()
///     .lenient()
///     .without_labels()
///     .keep_empty_panels()
///     .transform_file("html/classFoo.html")?;
/// # Ok::<(), doxpanel::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Doxpanel {
    parse_options: ParseOptions,
    transform_options: TransformOptions,
}

impl Doxpanel {
    /// Create a new builder with every pass enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Reject pages not produced by Doxygen.
    pub fn require_doxygen(mut self) -> Self {
        self.parse_options = self.parse_options.require_doxygen(true);
        self
    }

    /// Replace the transform options.
    pub fn with_transform_options(mut self, options: TransformOptions) -> Self {
        self.transform_options = options;
        self
    }

    /// Leave boilerplate paragraphs in place.
    pub fn without_metadata(mut self) -> Self {
        self.transform_options = self.transform_options.without_metadata();
        self
    }

    /// Leave labeled lists alone.
    pub fn without_sections(mut self) -> Self {
        self.transform_options = self.transform_options.without_sections();
        self
    }

    /// Leave member items alone.
    pub fn without_members(mut self) -> Self {
        self.transform_options = self.transform_options.without_members();
        self
    }

    /// Leave qualifier labels alone.
    pub fn without_labels(mut self) -> Self {
        self.transform_options = self.transform_options.without_labels();
        self
    }

    /// Leave tables and reference lists alone.
    pub fn without_tables(mut self) -> Self {
        self.transform_options = self.transform_options.without_tables().without_reflists();
        self
    }

    /// Keep panels even when they have no text.
    pub fn keep_empty_panels(mut self) -> Self {
        self.transform_options = self.transform_options.keep_empty_panels();
        self
    }

    /// Parse and transform a page file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DoxpanelResult> {
        let parser = PageParser::open_with_options(path, self.parse_options.clone())?;
        Ok(self.run(parser.parse()?))
    }

    /// Parse and transform page bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DoxpanelResult> {
        let parser = PageParser::from_bytes_with_options(data, self.parse_options.clone())?;
        Ok(self.run(parser.parse()?))
    }

    /// Parse and transform a page file, returning the resulting HTML.
    pub fn transform_file<P: AsRef<Path>>(self, path: P) -> Result<String> {
        Ok(self.parse(path)?.to_html())
    }

    fn run(&self, mut tree: PageTree) -> DoxpanelResult {
        let stats = transform(&mut tree, &self.transform_options);
        DoxpanelResult { tree, stats }
    }
}

/// A transformed page.
#[derive(Debug, Clone)]
pub struct DoxpanelResult {
    /// The transformed page tree
    pub tree: PageTree,
    /// What the passes changed
    pub stats: TransformStats,
}

impl DoxpanelResult {
    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.tree)
    }

    /// Dump the tree as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.tree, format)
    }

    /// Get the page tree.
    pub fn tree(&self) -> &PageTree {
        &self.tree
    }
}
