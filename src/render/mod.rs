//! Rendering module for writing page trees back out.

mod html;
mod json;

pub use html::{node_to_html, to_html};
pub use json::{to_json, to_value, JsonFormat};
