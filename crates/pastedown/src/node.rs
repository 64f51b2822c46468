//! Owned HTML node tree for HTML to Markdown conversion.
//!
//! Every element exclusively owns its children, so a parsed fragment is a
//! plain recursive value. Any HTML parser can build this structure; the
//! `html` feature provides one on top of scraper.

/// Node kinds carried by the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node
    Element,
    /// Text node
    Text,
    /// Synthetic root holding the top-level nodes of a parsed fragment
    Fragment,
}

/// A node of a parsed HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node kind
    pub node_type: NodeType,

    /// Lowercase tag name for elements, "#text" / "#fragment" otherwise
    pub node_name: String,

    /// Character data for text nodes
    pub node_value: Option<String>,

    /// Attributes in source order
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty fragment root
    pub fn fragment() -> Self {
        Self {
            node_type: NodeType::Fragment,
            node_name: "#fragment".to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }


    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Logical rows of a table element.
    ///
    /// Rows of `thead` come first, then rows of `tbody` and rows placed
    /// directly under the table in tree order, then rows of `tfoot`. Rows of
    /// nested tables are not included.
    pub fn table_rows(&self) -> Vec<&Node> {
        let mut head = Vec::new();
        let mut body = Vec::new();
        let mut foot = Vec::new();

        for child in self.element_children() {
            match child.tag_name() {
                "tr" => body.push(child),
                "thead" => head.extend(child.element_children().filter(|n| n.tag_name() == "tr")),
                "tbody" => body.extend(child.element_children().filter(|n| n.tag_name() == "tr")),
                "tfoot" => foot.extend(child.element_children().filter(|n| n.tag_name() == "tr")),
                _ => {}
            }
        }

        head.into_iter().chain(body).chain(foot).collect()
    }

    /// Cells (`td` / `th`) of a table row
    pub fn row_cells(&self) -> impl Iterator<Item = &Node> {
        self.element_children()
            .filter(|n| matches!(n.tag_name(), "td" | "th"))
    }
}
