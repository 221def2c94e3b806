use super::combinators::*;
use super::core::Parser;
use super::parsers::*;

pub fn literal(ch: char) -> CharParser {
    CharParser::new(ch)
}

pub fn number() -> NumberParser {
    NumberParser::new()
}

pub fn choice(parsers: Vec<Box<dyn Parser>>) -> Choice {
    Choice::new(parsers)
}

pub fn sequence(parsers: Vec<Box<dyn Parser>>) -> Sequence {
    Sequence::new(parsers)
}

pub fn lazy<F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(f)
}

pub fn constant_expression() -> ConstantExpressionParser {
    ConstantExpressionParser
}

pub fn binary_expression() -> BinaryExpressionParser {
    BinaryExpressionParser::new()
}

pub fn expression() -> ExpressionParser {
    ExpressionParser::new()
}
