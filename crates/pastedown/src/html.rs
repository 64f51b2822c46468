//! HTML parsing support.
//!
//! Parses clipboard HTML with scraper (html5ever) and copies the result into
//! the owned [`Node`] tree used by the converter. Parsing never fails:
//! malformed markup is repaired by the HTML5 tree builder.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// The returned node is a fragment root whose children are the top-level
/// nodes of the input. Comments and doctypes are dropped.
///
/// # Example
///
/// ```rust
/// use pastedown::{parse_html, Converter};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let converter = Converter::new();
/// assert_eq!(converter.convert_node(&node), "# Hello *World*\n\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);

    let mut root = Node::fragment();
    append_children(&mut root, document.root_element());

    log::trace!("parsed fragment with {} top-level nodes", root.children.len());
    root
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = Node::element_with_attrs(tag, attrs);
    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert_eq!(node.node_type, NodeType::Fragment);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].tag_name(), "p");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_empty() {
        let node = parse_html("");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_parse_keeps_attributes() {
        let node = parse_html(r#"<a HREF="https://x.com" title="X">x</a>"#);
        let a = &node.children[0];
        assert_eq!(a.attr("href"), Some("https://x.com"));
        assert_eq!(a.attr("title"), Some("X"));
    }

    #[test]
    fn test_parse_drops_comments() {
        let node = parse_html("<!-- note --><b>x</b>");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].tag_name(), "b");
    }

    #[test]
    fn test_parse_inserts_tbody() {
        let node = parse_html("<table><tr><td>a</td></tr></table>");
        let table = &node.children[0];
        assert_eq!(table.children[0].tag_name(), "tbody");
        assert_eq!(table.table_rows().len(), 1);
    }

    #[test]
    fn test_parse_repairs_unclosed_tags() {
        let node = parse_html("<ul><li>a<li>b</ul>");
        let ul = &node.children[0];
        assert_eq!(ul.element_children().count(), 2);
    }
}
