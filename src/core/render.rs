use std::io::{self, Write};

use crate::core::color::{self, Category};
use crate::models::{EntryKind, TreeNode};

/// One printable row. The prefix encodes the "was last sibling" state of
/// every ancestor and never depends on sibling content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderLine {
    pub prefix: String,
    pub glyph: &'static str,
    pub name: String,
    pub category: Category,
}

/// Flatten a tree into display records, pre-order. Separated from the
/// writer so line structure is testable without capturing process output.
pub fn render_lines(children: &[TreeNode]) -> Vec<RenderLine> {
    let mut lines = Vec::new();
    push_lines(children, "", &mut lines);
    lines
}

fn push_lines(children: &[TreeNode], prefix: &str, lines: &mut Vec<RenderLine>) {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let glyph = if is_last { "└── " } else { "├── " };

        lines.push(RenderLine {
            prefix: prefix.to_owned(),
            glyph,
            name: node.name.clone(),
            category: color::categorize(&node.name, node.kind == EntryKind::Directory),
        });

        if !node.children.is_empty() {
            let continuation = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{prefix}{continuation}");
            push_lines(&node.children, &child_prefix, lines);
        }
    }
}

/// Write the tree to `writer`, one line per visible entry, with the name
/// painted in its category color. No line is emitted for the root itself.
pub fn write_tree<W: Write>(writer: &mut W, children: &[TreeNode]) -> io::Result<()> {
    for line in render_lines(children) {
        writeln!(
            writer,
            "{}{}{}",
            line.prefix,
            line.glyph,
            line.category.paint(&line.name)
        )?;
    }
    Ok(())
}
