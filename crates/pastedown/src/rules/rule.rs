//! Tag rules: which elements a rule claims and the Markdown it produces.

use crate::node::Node;
use crate::service::{Converter, ConverterOptions};

/// Produces the Markdown for a matched element.
///
/// Receives the element, its already converted `childContent` and the
/// converter, which rules use to read options or convert children on their
/// own (list items, table cells).
pub type ReplacementFn = Box<dyn Fn(&Node, &str, &Converter) -> String + Send + Sync>;

type MatchFn = Box<dyn Fn(&Node, &ConverterOptions) -> bool + Send + Sync>;

/// Elements a rule or a removal applies to. Tag names compare lowercase.
pub enum Filter {
    Tag(String),
    AnyTag(Vec<String>),
    Matches(MatchFn),
}

impl Filter {
    /// `<name>` elements
    pub fn tag(name: &str) -> Self {
        Filter::Tag(name.to_lowercase())
    }

    /// Elements whose tag is one of `names`
    pub fn tags(names: &[&str]) -> Self {
        Filter::AnyTag(names.iter().map(|name| name.to_lowercase()).collect())
    }

    /// Elements accepted by `f`, which also sees the converter options
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Node, &ConverterOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Matches(Box::new(f))
    }

    pub fn matches(&self, node: &Node, options: &ConverterOptions) -> bool {
        let tag = node.tag_name();
        match self {
            Filter::Tag(name) => tag == name,
            Filter::AnyTag(names) => names.iter().any(|name| name == tag),
            Filter::Matches(f) => f(node, options),
        }
    }
}

/// A template from matched elements to Markdown
pub struct Rule {
    pub filter: Filter,
    pub replacement: ReplacementFn,
    /// Whether the converter folds the children into `childContent` before
    /// calling the replacement. Lists, tables and void elements skip it.
    pub needs_content: bool,
}

impl Rule {
    /// Rule whose replacement receives the converted children
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Converter) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
            needs_content: true,
        }
    }

    /// Rule that walks the element's children itself.
    ///
    /// The replacement receives an empty `childContent`.
    pub fn structural<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Converter) -> String + Send + Sync + 'static,
    {
        Self {
            needs_content: false,
            ..Self::new(filter, replacement)
        }
    }

    /// Shorthand for `Rule::new(Filter::tag(tag), ..)`
    pub fn for_tag<F>(tag: &str, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Converter) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), replacement)
    }

    /// Shorthand for `Rule::new(Filter::tags(tags), ..)`
    pub fn for_tags<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&Node, &str, &Converter) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tags(tags), replacement)
    }

    pub fn replace(&self, node: &Node, content: &str, converter: &Converter) -> String {
        (self.replacement)(node, content, converter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_tag_is_case_insensitive() {
        let options = ConverterOptions::default();
        let filter = Filter::tag("B");
        assert!(filter.matches(&Node::element("b"), &options));
        assert!(!filter.matches(&Node::element("strong"), &options));
    }

    #[test]
    fn test_filter_tags() {
        let options = ConverterOptions::default();
        let filter = Filter::tags(&["del", "S"]);
        assert!(filter.matches(&Node::element("s"), &options));
        assert!(!filter.matches(&Node::element("u"), &options));
    }

    #[test]
    fn test_filter_predicate() {
        let options = ConverterOptions::default();
        let filter = Filter::predicate(|node, _| node.tag_name() == "a" && node.has_attr("href"));
        let with_href = Node::element_with_attrs("a", vec![("href", "#")]);
        assert!(filter.matches(&with_href, &options));
        assert!(!filter.matches(&Node::element("a"), &options));
    }

    #[test]
    fn test_rule_replace() {
        let converter = Converter::new();
        let rule = Rule::for_tag("mark", |_, content, _| format!("=={}==", content));
        assert_eq!(rule.replace(&Node::element("mark"), "hi", &converter), "==hi==");
        assert!(rule.needs_content);
    }

    #[test]
    fn test_structural_rule_skips_content() {
        let rule = Rule::structural(Filter::tag("hr"), |_, _, _| String::new());
        assert!(!rule.needs_content);
    }
}
