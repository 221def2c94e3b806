use strum::IntoEnumIterator;

use crate::analyzer::combinators::{CharParser, Choice, Lazy, NumberParser, Sequence};
use crate::analyzer::core::{ParseRecord, Parser};
use crate::ast::{Node, Operator};

/// Signed integer literal: an optional `-` followed by digits.
///
/// A consumed minus sign is given back when no digits follow it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantExpressionParser;

impl Parser for ConstantExpressionParser {
    #[tracing::instrument(level = "debug", skip(self))]
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        let sign = CharParser::new('-').parse(input);
        let negative = sign.is_ok();
        match NumberParser::new().parse(sign.leftover()).into_parts() {
            (Some(Node::Number(value)), rest) => {
                ParseRecord::ok(Node::constant(negative, value), rest)
            }
            _ => ParseRecord::error(input),
        }
    }
}

/// Fully parenthesized binary expression: `(` operand operator operand `)`.
///
/// Operands recurse into this parser through [`Lazy`], so the inner parser is
/// only built once a nested expression has to be tried.
pub struct BinaryExpressionParser {
    sequence: Sequence,
}

impl BinaryExpressionParser {
    pub fn new() -> Self {
        let operators = Operator::iter()
            .map(|op| Box::new(CharParser::new(op.as_char())) as Box<dyn Parser>)
            .collect();
        Self {
            sequence: Sequence::new(vec![
                Box::new(CharParser::new('(')),
                Box::new(operand()),
                Box::new(Choice::new(operators)),
                Box::new(operand()),
                Box::new(CharParser::new(')')),
            ]),
        }
    }
}

impl Default for BinaryExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn operand() -> Choice {
    Choice::new(vec![
        Box::new(ConstantExpressionParser),
        Box::new(Lazy::new(BinaryExpressionParser::new)),
    ])
}

impl Parser for BinaryExpressionParser {
    #[tracing::instrument(level = "debug", skip(self))]
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        let (result, rest) = self.sequence.parse(input).into_parts();
        let Some(Node::Sequence(items)) = result else {
            // 途中までの消費は捨て、元の入力を返す
            return ParseRecord::error(input);
        };
        let Ok([_, left, op, right, _]) = <[Node; 5]>::try_from(items) else {
            return ParseRecord::error(input);
        };
        match Operator::try_from(&op) {
            Ok(op) => ParseRecord::ok(Node::binary(left, op, right), rest),
            Err(()) => ParseRecord::error(input),
        }
    }
}

/// Top-level expression. The whole input has to be consumed.
pub struct ExpressionParser {
    choice: Choice,
}

impl ExpressionParser {
    pub fn new() -> Self {
        Self {
            choice: Choice::new(vec![
                Box::new(BinaryExpressionParser::new()),
                Box::new(ConstantExpressionParser),
            ]),
        }
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for ExpressionParser {
    #[tracing::instrument(level = "debug", skip(self))]
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        let record = self.choice.parse(input);
        if !record.leftover().is_empty() {
            tracing::debug!(leftover = record.leftover(), "unconsumed input");
            return ParseRecord::error(record.leftover());
        }
        record
    }
}

/// Parses `input` as a complete expression.
pub fn parse_expression(input: &str) -> ParseRecord<'_> {
    ExpressionParser::new().parse(input)
}
