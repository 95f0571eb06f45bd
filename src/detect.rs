//! Generator detection for HTML pages.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Generator information read from a page's `<meta name="generator">` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Generator name (e.g., "Doxygen")
    pub name: String,
    /// Generator version (e.g., "1.8.9.1"), empty when absent
    pub version: String,
}

impl GeneratorInfo {
    /// Whether the page was produced by Doxygen.
    pub fn is_doxygen(&self) -> bool {
        self.name.eq_ignore_ascii_case("doxygen")
    }
}

impl std::fmt::Display for GeneratorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// Only the document head is scanned for the generator tag.
const HEAD_SCAN_LIMIT: usize = 4096;

fn generator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)<meta\s+name\s*=\s*["']generator["']\s+content\s*=\s*["']([A-Za-z][\w-]*)(?:\s+([^"']*))?["']"#,
        )
        .expect("generator regex is valid")
    })
}

/// Read the generator from the start of an HTML document.
///
/// # Example
/// ```
/// use doxpanel::detect::detect_generator;
///
/// let info = detect_generator(r#"<meta name="generator" content="Doxygen 1.8.9.1"/>"#).unwrap();
/// assert!(info.is_doxygen());
/// assert_eq!(info.version, "1.8.9.1");
/// ```
pub fn detect_generator(html: &str) -> Option<GeneratorInfo> {
    let mut end = html.len().min(HEAD_SCAN_LIMIT);
    while !html.is_char_boundary(end) {
        end -= 1;
    }
    let caps = generator_regex().captures(&html[..end])?;
    Some(GeneratorInfo {
        name: caps[1].to_string(),
        version: caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

/// Check whether HTML text was generated by Doxygen.
pub fn is_doxygen_page(html: &str) -> bool {
    detect_generator(html).is_some_and(|g| g.is_doxygen())
}

/// Detect the generator of an HTML file.
///
/// # Returns
/// * `Ok(GeneratorInfo)` if the page is a Doxygen page
/// * `Err(Error::NotDoxygen)` otherwise
pub fn detect_from_path<P: AsRef<Path>>(path: P) -> Result<GeneratorInfo> {
    let path = path.as_ref();
    let html = fs::read_to_string(path)?;
    match detect_generator(&html) {
        Some(info) if info.is_doxygen() => Ok(info),
        _ => Err(Error::NotDoxygen(path.display().to_string())),
    }
}
