//! HTML page parsing module.

mod html;
mod options;
mod page_parser;

pub use html::parse_html;
pub use options::{ErrorMode, ParseOptions};
pub use page_parser::PageParser;
