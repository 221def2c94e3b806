use strum::Display;
use thiserror::Error;

use crate::ast::Node;

// パーサートレイト

/// A parser consumes a prefix of `input` and reports what is left.
///
/// Implementations must be pure functions of `input`: combinators call them
/// speculatively and rely on repeated calls giving the same record.
pub trait Parser {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a>;
}

impl<P: Parser + ?Sized> Parser for &P {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        (**self).parse(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Tag {
    #[strum(serialize = "OK")]
    Ok,
    #[strum(serialize = "ERROR")]
    Error,
}

/// Outcome of a single parse attempt.
///
/// `leftover` borrows from the input handed to the parser, so it is always a
/// suffix of it. A record carries a node if and only if its tag is `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRecord<'a> {
    tag: Tag,
    result: Option<Node>,
    leftover: &'a str,
}

impl<'a> ParseRecord<'a> {
    pub fn ok(result: Node, leftover: &'a str) -> Self {
        Self {
            tag: Tag::Ok,
            result: Some(result),
            leftover,
        }
    }

    pub fn error(leftover: &'a str) -> Self {
        Self {
            tag: Tag::Error,
            result: None,
            leftover,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_ok(&self) -> bool {
        self.tag == Tag::Ok
    }

    pub fn result(&self) -> Option<&Node> {
        self.result.as_ref()
    }

    pub fn leftover(&self) -> &'a str {
        self.leftover
    }

    /// Splits the record into its node and leftover.
    pub fn into_parts(self) -> (Option<Node>, &'a str) {
        (self.result, self.leftover)
    }

    pub fn into_result(self) -> ParseResult<'a> {
        match self.result {
            Some(node) => Ok((node, self.leftover)),
            None => Err(ParseError::Rejected {
                leftover: self.leftover.to_string(),
            }),
        }
    }
}

pub type ParseResult<'a> = Result<(Node, &'a str), ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: input rejected, leftover {leftover:?}")]
    Rejected { leftover: String },
}
