//! # pastedown
//!
//! Convert pasted HTML fragments to Markdown.
//!
//! When rich text is pasted into a Markdown editor, the clipboard carries an
//! HTML representation. This crate turns that fragment into Markdown ready to
//! be inserted at the cursor.
//!
//! ## Design
//!
//! The HTML string is parsed into an owned [`Node`] tree, which is then
//! folded bottom-up: each element's children are converted first, and the
//! element's [`Rule`] wraps the result in a fixed template. Conversion is
//! total. Unknown tags pass their children through, and missing attributes
//! become empty strings.
//!
//! Text is inserted verbatim. Markdown metacharacters in pasted text are not
//! escaped unless [`ConverterOptions::escape_text`] is set.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use pastedown::Converter;
//!
//! let converter = Converter::new();
//! let markdown = converter.convert("<h2>Hello <b>World</b></h2>");
//! assert_eq!(markdown, "## Hello **World**");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use pastedown::{Converter, Node};
//!
//! let ul = Node::element("ul")
//!     .with_child(Node::element("li").with_child(Node::text("a")))
//!     .with_child(Node::element("li").with_child(Node::text("b")));
//!
//! assert_eq!(Converter::new().convert_node(&ul), "- a\n- b\n\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use rules::{Filter, Rule, Rules};
pub use service::{Converter, ConverterOptions};
pub use utilities::*;

/// Error type for pastedown operations
#[derive(Debug, thiserror::Error)]
pub enum PastedownError {
    #[error("Invalid heading tag: {0}")]
    InvalidHeading(String),
}

pub type Result<T> = std::result::Result<T, PastedownError>;
