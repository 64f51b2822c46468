//! Rule system for HTML to Markdown conversion.

mod markdown;
mod rule;

pub use markdown::markdown_rules;
pub use rule::{Filter, ReplacementFn, Rule};

use indexmap::IndexMap;

use crate::node::Node;
use crate::service::ConverterOptions;

/// Collection of rules for conversion
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Remove rules (drop the element and its content)
    remove_rules: Vec<Filter>,
    /// Built-in tag rules
    markdown_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in tag rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            remove_rules: Vec::new(),
            markdown_rules: markdown_rules(),
        }
    }

    /// Add a custom rule, replacing any rule registered under the same key
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Add a remove filter
    pub fn remove(&mut self, filter: Filter) {
        self.remove_rules.push(filter);
    }

    /// Find the appropriate rule for a node
    pub fn for_node<'a>(&'a self, node: &Node, options: &ConverterOptions) -> Option<&'a Rule> {
        self.custom_rules
            .values()
            .chain(self.markdown_rules.iter())
            .find(|rule| rule.filter.matches(node, options))
    }

    /// Check if a node should be removed
    pub fn should_remove(&self, node: &Node, options: &ConverterOptions) -> bool {
        if self.for_node(node, options).is_some() {
            return false;
        }

        self.remove_rules
            .iter()
            .any(|filter| filter.matches(node, options))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
