//! # pastedown-editor
//!
//! The editing side of a Markdown editor: a text buffer with a selection,
//! HTML paste (converted with [`pastedown::Converter`]), toolbar snippets,
//! live preview rendering and standalone HTML export.
//!
//! ```rust
//! use pastedown::Converter;
//! use pastedown_editor::{Document, Selection};
//!
//! let mut doc = Document::new("Intro\n\n").with_selection(Selection::cursor(7)).unwrap();
//! doc.paste_html(&Converter::new(), "<h2>Pasted</h2>");
//! assert_eq!(doc.text(), "Intro\n\n## Pasted");
//! ```

mod document;
pub mod export;
pub mod preview;
pub mod toolbar;

pub use document::{Document, Selection};
pub use export::{export_html, standalone_html};
pub use preview::render_markdown;
pub use toolbar::{Snippet, ToolbarAction};

/// Error type for editor operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Invalid selection {start}..{end} for a document of {len} bytes")]
    InvalidSelection { start: usize, end: usize, len: usize },

    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("Unknown toolbar action: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
