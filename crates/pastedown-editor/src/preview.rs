//! Markdown preview rendering.
//!
//! Rendering is delegated to pulldown-cmark with the GFM extensions the
//! editor relies on. Single newlines render as line breaks, and raw HTML in
//! the source is passed through.

use pulldown_cmark::{html, Event, Options, Parser};

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render Markdown to an HTML fragment
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
