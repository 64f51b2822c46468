//! Standalone HTML export.

use crate::preview::render_markdown;

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            padding: 20px;
            max-width: 800px;
            margin: 0 auto;
        }
        pre {
            background-color: #f6f8fa;
            border-radius: 3px;
            padding: 16px;
            overflow: auto;
        }
        code {
            font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
            background-color: rgba(27, 31, 35, 0.05);
            border-radius: 3px;
            padding: 0.2em 0.4em;
            font-size: 85%;
        }
        pre code {
            background-color: transparent;
            padding: 0;
        }
        blockquote {
            padding: 0 1rem;
            color: #6a737d;
            border-left: 0.25rem solid #dfe2e5;
        }
        table {
            border-collapse: collapse;
            width: 100%;
        }
        table th, table td {
            padding: 6px 13px;
            border: 1px solid #dfe2e5;
        }
        img {
            max-width: 100%;
        }
"#;

/// Wrap a rendered HTML fragment in a complete document with the export
/// stylesheet. The title is escaped; the body is inserted as is.
pub fn standalone_html(title: &str, body_html: &str) -> String {
    let mut document = String::with_capacity(STYLE.len() + body_html.len() + 256);
    document.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n");
    document.push_str("    <title>");
    document.push_str(&html_escape::encode_text(title));
    document.push_str("</title>\n    <style>\n");
    document.push_str(STYLE);
    document.push_str("    </style>\n</head>\n<body>\n");
    document.push_str(body_html);
    document.push_str("</body>\n</html>\n");
    document
}

/// Render Markdown and wrap it with [`standalone_html`]
pub fn export_html(markdown: &str, title: &str) -> String {
    standalone_html(title, &render_markdown(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_escaped() {
        let html = standalone_html("a < b & c", "");
        assert!(html.contains("<title>a &lt; b &amp; c</title>"));
    }

    #[test]
    fn test_body_is_inserted() {
        let html = standalone_html("t", "<p>x</p>\n");
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.ends_with("<body>\n<p>x</p>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_export_document() {
        insta::assert_snapshot!(export_html("# Notes\n\n- one\n- two", "Notes"));
    }
}
