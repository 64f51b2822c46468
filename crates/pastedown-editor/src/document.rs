//! Editable Markdown buffer with a selection.

use pastedown::Converter;

use crate::toolbar::Snippet;
use crate::{EditorError, Result};

/// Selected byte range of a document. A collapsed selection is the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Selection from `start` to `end`; validated when set on a [`Document`]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at `offset`
    pub fn cursor(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Whether the selection is a bare cursor
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// The Markdown text being edited.
///
/// The selection always lies within the text on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    text: String,
    selection: Selection,
}

impl Document {
    /// Create a document with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = Selection::cursor(text.len());
        Self { text, selection }
    }

    /// Builder form of [`Document::set_selection`]
    pub fn with_selection(mut self, selection: Selection) -> Result<Self> {
        self.set_selection(selection)?;
        Ok(self)
    }

    /// Move the selection. Fails if it is reversed, runs past the end of
    /// the text or splits a character.
    pub fn set_selection(&mut self, selection: Selection) -> Result<()> {
        let len = self.text.len();
        if selection.start > selection.end || selection.end > len {
            return Err(EditorError::InvalidSelection {
                start: selection.start,
                end: selection.end,
                len,
            });
        }
        for offset in [selection.start, selection.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(EditorError::NotCharBoundary(offset));
            }
        }
        self.selection = selection;
        Ok(())
    }

    /// Current Markdown text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Text covered by the selection, empty for a cursor
    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.start..self.selection.end]
    }

    /// Replace the selected text and leave the cursor after the insertion
    pub fn replace_selection(&mut self, insert: &str) {
        let Selection { start, end } = self.selection;
        self.text.replace_range(start..end, insert);
        self.selection = Selection::cursor(start + insert.len());
    }

    /// Paste an HTML clipboard payload.
    ///
    /// The HTML is converted to Markdown and replaces the selection. Returns
    /// the inserted Markdown.
    pub fn paste_html(&mut self, converter: &Converter, html: &str) -> String {
        let markdown = converter.convert(html);
        log::debug!(
            "pasting {} bytes of HTML as {} bytes of Markdown at {}..{}",
            html.len(),
            markdown.len(),
            self.selection.start,
            self.selection.end
        );
        self.replace_selection(&markdown);
        markdown
    }

    /// Paste plain text, used when the clipboard has no HTML flavour
    pub fn paste_text(&mut self, text: &str) {
        self.replace_selection(text);
    }

    /// Apply a toolbar snippet.
    ///
    /// With a cursor, the template is inserted and its placeholder selected.
    /// A template without a placeholder (`hr`) leaves the cursor where the
    /// insertion starts. With a selection, the selected text takes the
    /// placeholder's place and the whole insertion is selected.
    pub fn insert_snippet(&mut self, snippet: &Snippet) {
        let start = self.selection.start;
        log::debug!("applying {:?} snippet at {}", snippet.action(), start);

        if self.selection.is_collapsed() {
            self.replace_selection(snippet.template());
            let placeholder = snippet.placeholder().unwrap_or(0..0);
            self.selection = Selection::new(start + placeholder.start, start + placeholder.end);
        } else {
            let wrapped = snippet.wrap(self.selected_text());
            self.replace_selection(&wrapped);
            self.selection = Selection::new(start, start + wrapped.len());
        }
    }

    /// Empty the document
    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = Selection::default();
    }
}
