//! Built-in tag rules for pasted HTML.
//!
//! Each rule is a fixed template over the element's `childContent`. Tags
//! without a rule (`div`, `span`, anything unknown) pass their children
//! through unchanged.

use super::{Filter, Rule};
use crate::node::Node;
use crate::service::Converter;
use crate::utilities::{heading_level, repeat};

/// Create all built-in rules
pub fn markdown_rules() -> Vec<Rule> {
    vec![
        heading_rule(),
        paragraph_rule(),
        strong_rule(),
        emphasis_rule(),
        link_rule(),
        image_rule(),
        code_rule(),
        code_block_rule(),
        unordered_list_rule(),
        ordered_list_rule(),
        list_item_rule(),
        blockquote_rule(),
        horizontal_rule(),
        table_rule(),
        line_break_rule(),
    ]
}

fn heading_rule() -> Rule {
    Rule::for_tags(&["h1", "h2", "h3", "h4", "h5", "h6"], |node, content, _| {
        let level = heading_level(node.tag_name()).unwrap_or(1);
        format!("{} {}\n\n", repeat("#", level), content)
    })
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", |_, content, _| format!("{}\n\n", content))
}

fn strong_rule() -> Rule {
    Rule::for_tags(&["strong", "b"], |_, content, converter| {
        let delimiter = &converter.options().strong_delimiter;
        format!("{}{}{}", delimiter, content, delimiter)
    })
}

fn emphasis_rule() -> Rule {
    Rule::for_tags(&["em", "i"], |_, content, converter| {
        let delimiter = converter.options().em_delimiter;
        format!("{}{}{}", delimiter, content, delimiter)
    })
}

fn link_rule() -> Rule {
    Rule::for_tag("a", |node, content, _| {
        format!("[{}]({})", content, node.attr("href").unwrap_or(""))
    })
}

fn image_rule() -> Rule {
    Rule::structural(Filter::tag("img"), |node, _, _| {
        format!(
            "![{}]({})",
            node.attr("alt").unwrap_or(""),
            node.attr("src").unwrap_or("")
        )
    })
}

fn code_rule() -> Rule {
    Rule::for_tag("code", |_, content, _| format!("`{}`", content))
}

fn code_block_rule() -> Rule {
    Rule::for_tag("pre", |_, content, converter| {
        let fence = &converter.options().fence;
        format!("{}\n{}\n{}\n\n", fence, content, fence)
    })
}

fn unordered_list_rule() -> Rule {
    Rule::structural(Filter::tag("ul"), |node, _, converter| {
        let marker = converter.options().bullet_list_marker;
        let items: Vec<String> = list_items(node, converter)
            .map(|item| format!("{} {}", marker, item))
            .collect();
        format!("{}\n\n", items.join("\n"))
    })
}

fn ordered_list_rule() -> Rule {
    Rule::structural(Filter::tag("ol"), |node, _, converter| {
        let items: Vec<String> = list_items(node, converter)
            .enumerate()
            .map(|(index, item)| format!("{}. {}", index + 1, item))
            .collect();
        format!("{}\n\n", items.join("\n"))
    })
}

/// Converted, trimmed content of every element child of a list
fn list_items<'a>(node: &'a Node, converter: &'a Converter) -> impl Iterator<Item = String> + 'a {
    node.element_children()
        .map(move |item| converter.convert_node(item).trim().to_string())
}

fn list_item_rule() -> Rule {
    Rule::for_tag("li", |_, content, _| content.to_string())
}

fn blockquote_rule() -> Rule {
    Rule::for_tag("blockquote", |_, content, _| format!("> {}\n\n", content))
}

fn horizontal_rule() -> Rule {
    Rule::structural(Filter::tag("hr"), |_, _, converter| {
        format!("{}\n\n", converter.options().hr)
    })
}

fn table_rule() -> Rule {
    Rule::structural(Filter::tag("table"), |node, _, converter| {
        let rows = node.table_rows();
        let Some((header, body)) = rows.split_first() else {
            return String::new();
        };

        let header_cells = table_cells(header, converter);
        let separator = vec!["---".to_string(); header_cells.len()];

        let mut table = table_row(&header_cells);
        table.push_str(&table_row(&separator));
        for row in body {
            table.push_str(&table_row(&table_cells(row, converter)));
        }
        table.push('\n');
        table
    })
}

fn table_cells(row: &Node, converter: &Converter) -> Vec<String> {
    row.row_cells()
        .map(|cell| converter.convert_node(cell).trim().to_string())
        .collect()
}

fn table_row(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

fn line_break_rule() -> Rule {
    Rule::structural(Filter::tag("br"), |_, _, _| "\n".to_string())
}
