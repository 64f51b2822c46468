//! Toolbar snippets.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::EditorError;

/// Placeholder words of the snippet templates, in the order they are tried.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("粗体文本|斜体文本|标题|链接文本|图片描述|代码示例|引用文本|列表项 1|表头 1").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Bold,
    Italic,
    Heading,
    Link,
    Image,
    List,
    Code,
    Quote,
    Hr,
    Table,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 10] = [
        ToolbarAction::Bold,
        ToolbarAction::Italic,
        ToolbarAction::Heading,
        ToolbarAction::Link,
        ToolbarAction::Image,
        ToolbarAction::List,
        ToolbarAction::Code,
        ToolbarAction::Quote,
        ToolbarAction::Hr,
        ToolbarAction::Table,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolbarAction::Bold => "bold",
            ToolbarAction::Italic => "italic",
            ToolbarAction::Heading => "heading",
            ToolbarAction::Link => "link",
            ToolbarAction::Image => "image",
            ToolbarAction::List => "list",
            ToolbarAction::Code => "code",
            ToolbarAction::Quote => "quote",
            ToolbarAction::Hr => "hr",
            ToolbarAction::Table => "table",
        }
    }
}

impl fmt::Display for ToolbarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolbarAction {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| EditorError::UnknownAction(s.to_string()))
    }
}

/// Fixed text inserted by a toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    action: ToolbarAction,
    template: &'static str,
}

impl Snippet {
    pub fn for_action(action: ToolbarAction) -> Self {
        let template = match action {
            ToolbarAction::Bold => "**粗体文本**",
            ToolbarAction::Italic => "*斜体文本*",
            ToolbarAction::Heading => "## 标题",
            ToolbarAction::Link => "[链接文本](https://example.com)",
            ToolbarAction::Image => "![图片描述](https://example.com/image.jpg)",
            ToolbarAction::List => "- 列表项 1\n- 列表项 2\n- 列表项 3",
            ToolbarAction::Code => "```javascript\n// 代码示例\nconsole.log(\"Hello World\");\n```",
            ToolbarAction::Quote => "> 引用文本",
            ToolbarAction::Hr => "\n---\n",
            ToolbarAction::Table => concat!(
                "| 表头 1 | 表头 2 | 表头 3 |\n",
                "| --- | --- | --- |\n",
                "| 单元格 1 | 单元格 2 | 单元格 3 |\n",
                "| 单元格 4 | 单元格 5 | 单元格 6 |"
            ),
        };
        Self { action, template }
    }

    pub fn action(&self) -> ToolbarAction {
        self.action
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Byte range of the placeholder within the template
    pub fn placeholder(&self) -> Option<Range<usize>> {
        PLACEHOLDER.find(self.template).map(|m| m.range())
    }

    /// Template with the placeholder replaced by `selected`
    pub fn wrap(&self, selected: &str) -> String {
        PLACEHOLDER
            .replacen(self.template, 1, NoExpand(selected))
            .into_owned()
    }
}
