//! Page reader: loads HTML from files, bytes or readers into a [`PageTree`].

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::is_doxygen_page;
use crate::error::{Error, Result};
use crate::model::PageTree;

use super::html::parse_html;
use super::options::{ErrorMode, ParseOptions};

/// Generated page parser.
pub struct PageParser {
    html: String,
    source: String,
    options: ParseOptions,
}

impl PageParser {
    /// Open an HTML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an HTML file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let source = path.display().to_string();
        Self::decode(data, source, options)
    }

    /// Parse HTML from a string.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            source: "<memory>".to_string(),
            options: ParseOptions::default(),
        }
    }

    /// Parse HTML from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse HTML from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Self::decode(data.to_vec(), "<memory>".to_string(), options)
    }

    /// Parse HTML from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse HTML from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::decode(data, "<reader>".to_string(), options)
    }

    fn decode(data: Vec<u8>, source: String, options: ParseOptions) -> Result<Self> {
        let html = match String::from_utf8(data) {
            Ok(html) => html,
            Err(e) => match options.error_mode {
                ErrorMode::Strict => {
                    return Err(Error::Other(format!("{} is not valid UTF-8: {}", source, e)));
                }
                ErrorMode::Lenient => {
                    log::warn!("{} contains invalid UTF-8, replacing bad sequences", source);
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            },
        };
        Ok(Self {
            html,
            source,
            options,
        })
    }

    /// Raw HTML text.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Where the HTML came from (file path or a placeholder).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse into a page tree.
    pub fn parse(&self) -> Result<PageTree> {
        if self.options.require_doxygen && !is_doxygen_page(&self.html) {
            return Err(Error::NotDoxygen(self.source.clone()));
        }
        Ok(parse_html(&self.html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementMatcher;

    #[test]
    fn test_from_bytes_strict_rejects_invalid_utf8() {
        let data = [b'<', b'p', b'>', 0xFF, 0xFE];
        assert!(PageParser::from_bytes(&data).is_err());
    }

    #[test]
    fn test_from_bytes_lenient_replaces_invalid_utf8() {
        let data = [b'<', b'p', b'>', b'a', 0xFF];
        let parser =
            PageParser::from_bytes_with_options(&data, ParseOptions::new().lenient()).unwrap();
        let tree = parser.parse().unwrap();
        let p = tree.find_first(tree.root(), &ElementMatcher::tag("p")).unwrap();
        assert!(tree.text_content(p).starts_with('a'));
    }

    #[test]
    fn test_require_doxygen() {
        let options = ParseOptions::new().require_doxygen(true);
        let parser = PageParser::from_bytes_with_options(b"<p>x</p>", options).unwrap();
        assert!(matches!(parser.parse(), Err(Error::NotDoxygen(_))));

        let html = r#"<html><head><meta name="generator" content="Doxygen 1.8.9.1"/></head></html>"#;
        let options = ParseOptions::new().require_doxygen(true);
        let parser = PageParser::from_bytes_with_options(html.as_bytes(), options).unwrap();
        assert!(parser.parse().is_ok());
    }

    #[test]
    fn test_from_reader() {
        let parser = PageParser::from_reader("<p>reader</p>".as_bytes()).unwrap();
        assert_eq!(parser.source(), "<reader>");
        assert!(parser.parse().is_ok());
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            PageParser::open("/nonexistent/page.html"),
            Err(Error::Io(_))
        ));
    }
}
