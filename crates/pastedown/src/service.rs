//! Converter - the main entry point for pasted HTML to Markdown conversion.

use crate::node::{Node, NodeType};
use crate::rules::{Filter, Rule, Rules};
use crate::utilities::escape_markdown;

/// Options for Converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Horizontal rule string
    pub hr: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Backslash-escape Markdown metacharacters in text nodes.
    /// Off by default: pasted text is inserted verbatim.
    pub escape_text: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            bullet_list_marker: '-',
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
            hr: "---".to_string(),
            fence: "```".to_string(),
            escape_text: false,
        }
    }
}

/// Converts HTML fragments to Markdown.
///
/// Conversion is a post-order fold: every element's children are converted
/// first, then the element's rule is applied to the concatenated result.
/// It never fails; elements without a rule pass their content through.
pub struct Converter {
    options: ConverterOptions,
    rules: Rules,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self {
            options: ConverterOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConverterOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert an HTML fragment to Markdown.
    ///
    /// The result is trimmed of leading and trailing whitespace, ready to be
    /// inserted at the cursor.
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> String {
        let root = crate::html::parse_html(html);
        self.convert_node(&root).trim().to_string()
    }

    /// Convert a single node, without trimming the result
    pub fn convert_node(&self, node: &Node) -> String {
        match node.node_type {
            NodeType::Text => self.convert_text(node.node_value.as_deref().unwrap_or("")),
            NodeType::Fragment => self.process_children(node),
            NodeType::Element => self.process_element(node),
        }
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove elements matching the filter
    pub fn remove(&mut self, filter: Filter) -> &mut Self {
        self.rules.remove(filter);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConverterOptions {
        &mut self.options
    }

    /// Process children of a node
    fn process_children(&self, node: &Node) -> String {
        node.children().map(|child| self.convert_node(child)).collect()
    }

    fn convert_text(&self, text: &str) -> String {
        if self.options.escape_text {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }

    /// Process a single element
    fn process_element(&self, node: &Node) -> String {
        if self.rules.should_remove(node, &self.options) {
            log::trace!("removing <{}>", node.tag_name());
            return String::new();
        }

        match self.rules.for_node(node, &self.options) {
            Some(rule) if rule.needs_content => {
                let content = self.process_children(node);
                rule.replace(node, &content, self)
            }
            Some(rule) => rule.replace(node, "", self),
            None => {
                log::trace!("passing through <{}>", node.tag_name());
                self.process_children(node)
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_element(html: &str) -> String {
        let converter = Converter::new();
        let root = crate::html::parse_html(html);
        converter.convert_node(&root)
    }

    #[test]
    fn test_empty_input() {
        let converter = Converter::new();
        assert_eq!(converter.convert(""), "");
        assert_eq!(convert_element(""), "");
    }

    #[test]
    fn test_strong() {
        assert_eq!(convert_element("<b>x</b>"), "**x**");
        assert_eq!(convert_element("<strong>x</strong>"), "**x**");
    }

    #[test]
    fn test_heading() {
        assert_eq!(convert_element("<h2>Title</h2>"), "## Title\n\n");
    }

    #[test]
    fn test_top_level_result_is_trimmed() {
        let converter = Converter::new();
        assert_eq!(converter.convert("<h2>Title</h2>"), "## Title");
        assert_eq!(converter.convert("  <p>a</p>\n"), "a");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            convert_element(r#"<a href="https://x.com">link</a>"#),
            "[link](https://x.com)"
        );
        assert_eq!(convert_element("<a>link</a>"), "[link]()");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(convert_element("<ul><li>a</li><li>b</li></ul>"), "- a\n- b\n\n");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(convert_element("<ol><li>a</li><li>b</li></ol>"), "1. a\n2. b\n\n");
    }

    #[test]
    fn test_table() {
        assert_eq!(
            convert_element(
                "<table><tr><th>H1</th><th>H2</th></tr><tr><td>a</td><td>b</td></tr></table>"
            ),
            "| H1 | H2 |\n| --- | --- |\n| a | b |\n\n"
        );
    }

    #[test]
    fn test_table_with_sections() {
        assert_eq!(
            convert_element(
                "<table><tbody><tr><td>b</td></tr></tbody><thead><tr><th>h</th></tr></thead></table>"
            ),
            "| h |\n| --- |\n| b |\n\n"
        );
    }

    #[test]
    fn test_empty_elements() {
        for (tag, expected) in [
            ("p", "\n\n"),
            ("b", "****"),
            ("em", "**"),
            ("a", "[]()"),
            ("code", "``"),
            ("pre", "```\n\n```\n\n"),
            ("blockquote", "> \n\n"),
            ("h1", "# \n\n"),
            ("li", ""),
            ("div", ""),
        ] {
            let node = Node::element(tag);
            assert_eq!(Converter::new().convert_node(&node), expected, "<{}>", tag);
        }
    }

    #[test]
    fn test_unknown_tag_passthrough() {
        assert_eq!(convert_element("<foo><i>y</i></foo>"), "*y*");
        assert_eq!(convert_element("<div><span>a</span> b</div>"), "a b");
    }

    #[test]
    fn test_nested_formatting() {
        assert_eq!(
            convert_element("<p><strong>a<em>b</em></strong></p>"),
            "**a*b***\n\n"
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        let converter = Converter::new();
        assert_eq!(converter.convert("<p>2 * 3 = 6_</p>"), "2 * 3 = 6_");
    }

    #[test]
    fn test_escape_text_option() {
        let converter = Converter::with_options(ConverterOptions {
            escape_text: true,
            ..Default::default()
        });
        assert_eq!(converter.convert("<b>2*3</b>"), "**2\\*3**");
    }

    #[test]
    fn test_custom_delimiters() {
        let converter = Converter::with_options(ConverterOptions {
            bullet_list_marker: '*',
            em_delimiter: '_',
            strong_delimiter: "__".to_string(),
            hr: "***".to_string(),
            fence: "~~~".to_string(),
            escape_text: false,
        });
        assert_eq!(
            converter.convert("<ul><li><i>a</i></li><li><b>b</b></li></ul><hr><pre>c</pre>"),
            "* _a_\n* __b__\n\n***\n\n~~~\nc\n~~~"
        );
    }

    #[test]
    fn test_add_rule_and_plugin() {
        let mut converter = Converter::new();
        converter.use_plugin(|c| {
            c.add_rule(
                "strikethrough",
                Rule::for_tags(&["del", "s"], |_, content, _| format!("~~{}~~", content)),
            );
        });
        assert_eq!(converter.convert("<p><del>gone</del></p>"), "~~gone~~");
    }

    #[test]
    fn test_remove_filter() {
        let mut converter = Converter::new();
        converter.remove(Filter::tags(&["script", "style"]));
        assert_eq!(
            converter.convert("<style>p{}</style><p>kept</p><script>x()</script>"),
            "kept"
        );
    }

    #[test]
    fn test_scripts_pass_through_by_default() {
        let converter = Converter::new();
        assert_eq!(converter.convert("<span>a</span><script>b</script>"), "ab");
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
