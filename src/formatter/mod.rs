//! Human readable rendering of parse trees.
//!
//! The output is meant for display only; no parser reads it back.

pub mod config;

pub use config::FormatterConfig;

use crate::ast::{BinaryExpression, Node};

pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Renders `node`, or `None` when the tree contains a sequence node.
    pub fn format(&self, node: &Node) -> Option<String> {
        match node {
            Node::Char(c) => Some(c.to_string()),
            Node::Number(n) => Some(n.to_string()),
            Node::Constant { negative, value } => Some(format!(
                "Constant expression {}{}",
                if *negative { "-" } else { "" },
                value
            )),
            Node::Binary(binary) => self.format_binary(binary),
            Node::Sequence(_) => None,
        }
    }

    fn format_binary(&self, binary: &BinaryExpression) -> Option<String> {
        let left = self.indent_lines(&self.format(&binary.left)?);
        let right = self.indent_lines(&self.format(&binary.right)?);
        Some(format!(
            "Binary expression:\n(\n{}\n{}{}\n{}\n)",
            left, self.config.indent, binary.op, right
        ))
    }

    fn indent_lines(&self, text: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", self.config.indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

/// Renders `node` with the default one-tab indentation.
pub fn readable_form(node: &Node) -> Option<String> {
    Formatter::default().format(node)
}
