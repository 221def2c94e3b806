//! # kumiawase
//!
//! A small recursive-descent parser built from composable parser combinators,
//! applied to fully parenthesized integer arithmetic such as `((1+2)*-3)`.
//!
//! ```
//! use kumiawase::{parse_expression, readable_form, Node, Operator};
//!
//! let record = parse_expression("(1--2)");
//! assert!(record.is_ok());
//! assert_eq!(
//!     record.result(),
//!     Some(&Node::binary(
//!         Node::constant(false, 1),
//!         Operator::Sub,
//!         Node::constant(true, 2)
//!     ))
//! );
//! assert!(readable_form(record.result().unwrap()).is_some());
//! ```

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;
pub mod formatter;

// Re-exports
pub use analyzer::parsers::parse_expression;
pub use analyzer::{ParseError, ParseRecord, Parser, Tag};
pub use ast::*;
pub use error::*;
pub use formatter::{readable_form, Formatter, FormatterConfig};

/// Parses a complete expression and renders it with `formatter`.
pub fn render_expression(input: &str, formatter: &Formatter) -> InternalResult<String> {
    let (node, _) = parse_expression(input).into_result()?;
    formatter
        .format(&node)
        .ok_or_else(|| Error::render(format!("no readable form for {:?}", node)))
}
