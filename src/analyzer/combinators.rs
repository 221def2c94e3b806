use super::core::ParseRecord;
use super::core::Parser;
use crate::ast::Node;

// CharParser: 先頭の一文字が一致する場合のみ成功し、その一文字だけを消費する
#[derive(Debug, Clone, Copy)]
pub struct CharParser {
    ch: char,
}

impl CharParser {
    pub fn new(ch: char) -> Self {
        Self { ch }
    }
}

impl Parser for CharParser {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        match input.strip_prefix(self.ch) {
            Some(rest) => ParseRecord::ok(Node::Char(self.ch), rest),
            None => ParseRecord::error(input),
        }
    }
}

/// Greedily consumes the leading run of ASCII decimal digits.
///
/// Accumulation wraps on `u64` overflow; the magnitude is never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParser;

impl NumberParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for NumberParser {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        let end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        if end == 0 {
            return ParseRecord::error(input);
        }
        let (digits, rest) = input.split_at(end);
        let value = digits.bytes().fold(0u64, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
        });
        ParseRecord::ok(Node::Number(value), rest)
    }
}

/// Ordered choice: the first alternative that succeeds wins.
///
/// Every alternative sees the original input, so a failed attempt leaves no
/// trace however much it consumed internally.
pub struct Choice {
    parsers: Vec<Box<dyn Parser>>,
}

impl Choice {
    pub fn new(parsers: Vec<Box<dyn Parser>>) -> Self {
        Self { parsers }
    }
}

impl Parser for Choice {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        for (index, parser) in self.parsers.iter().enumerate() {
            let record = parser.parse(input);
            if record.is_ok() {
                tracing::trace!(alternative = index, "choice matched");
                return record;
            }
        }
        tracing::trace!(alternatives = self.parsers.len(), "choice exhausted");
        ParseRecord::error(input)
    }
}

/// Ordered sequence: threads each leftover into the next parser.
///
/// The first failure is returned as reported by the failing parser, so its
/// leftover points at the failure, not at the start of the sequence.
pub struct Sequence {
    parsers: Vec<Box<dyn Parser>>,
}

impl Sequence {
    pub fn new(parsers: Vec<Box<dyn Parser>>) -> Self {
        Self { parsers }
    }
}

impl Parser for Sequence {
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut current = input;
        for (index, parser) in self.parsers.iter().enumerate() {
            match parser.parse(current).into_parts() {
                (Some(node), rest) => {
                    results.push(node);
                    current = rest;
                }
                (None, rest) => {
                    tracing::trace!(step = index, leftover = rest, "sequence failed");
                    return ParseRecord::error(rest);
                }
            }
        }
        ParseRecord::ok(Node::Sequence(results), current)
    }
}

// Lazy: parse が呼ばれるまでパーサーの生成を遅らせる (再帰的な文法用)
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    fn parse<'a>(&self, input: &'a str) -> ParseRecord<'a> {
        (self.f)().parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::core::Tag;

    fn abc() -> Vec<Box<dyn Parser>> {
        vec![
            Box::new(CharParser::new('a')),
            Box::new(CharParser::new('b')),
            Box::new(CharParser::new('c')),
        ]
    }

    #[test]
    fn test_char_parser() {
        let parser = CharParser::new('a');
        assert_eq!(parser.parse("abc"), ParseRecord::ok(Node::Char('a'), "bc"));
        assert_eq!(parser.parse("a"), ParseRecord::ok(Node::Char('a'), ""));

        // 失敗するケース
        assert_eq!(parser.parse("bc"), ParseRecord::error("bc"));
        assert_eq!(parser.parse(""), ParseRecord::error(""));
    }

    #[test]
    fn test_number_parser() {
        let parser = NumberParser::new();
        assert_eq!(parser.parse("123"), ParseRecord::ok(Node::Number(123), ""));
        assert_eq!(
            parser.parse("123abc"),
            ParseRecord::ok(Node::Number(123), "abc")
        );
        assert_eq!(parser.parse("007"), ParseRecord::ok(Node::Number(7), ""));

        // 失敗するケース
        assert_eq!(parser.parse("abc"), ParseRecord::error("abc"));
        assert_eq!(parser.parse("abc123"), ParseRecord::error("abc123"));
        assert_eq!(parser.parse("-123"), ParseRecord::error("-123"));
        assert_eq!(parser.parse(""), ParseRecord::error(""));
    }

    #[test]
    fn test_number_parser_wraps_on_overflow() {
        let parser = NumberParser::new();
        let record = parser.parse("18446744073709551616");
        assert_eq!(record, ParseRecord::ok(Node::Number(0), ""));
    }

    #[test]
    fn test_choice() {
        let parser = Choice::new(abc());
        assert_eq!(parser.parse("abc"), ParseRecord::ok(Node::Char('a'), "bc"));
        assert_eq!(parser.parse("a"), ParseRecord::ok(Node::Char('a'), ""));
        assert_eq!(parser.parse("bca"), ParseRecord::ok(Node::Char('b'), "ca"));
        assert_eq!(parser.parse("da"), ParseRecord::error("da"));
        assert_eq!(parser.parse(""), ParseRecord::error(""));
    }

    #[test]
    fn test_choice_is_left_biased() {
        let parser = Choice::new(vec![
            Box::new(CharParser::new('a')),
            Box::new(Sequence::new(vec![
                Box::new(CharParser::new('a')),
                Box::new(CharParser::new('b')),
            ])),
        ]);
        assert_eq!(parser.parse("ab"), ParseRecord::ok(Node::Char('a'), "b"));
    }

    #[test]
    fn test_choice_restarts_from_original_input() {
        // 'a' を消費してから失敗する候補の後でも、次の候補は元の入力から始まる
        let parser = Choice::new(vec![
            Box::new(Sequence::new(vec![
                Box::new(CharParser::new('a')),
                Box::new(CharParser::new('x')),
            ])),
            Box::new(CharParser::new('a')),
        ]);
        assert_eq!(parser.parse("ab"), ParseRecord::ok(Node::Char('a'), "b"));

        let parser = Choice::new(vec![Box::new(Sequence::new(vec![
            Box::new(CharParser::new('a')),
            Box::new(CharParser::new('x')),
        ]))]);
        assert_eq!(parser.parse("ab"), ParseRecord::error("ab"));
    }

    #[test]
    fn test_sequence() {
        let parser = Sequence::new(abc());
        assert_eq!(
            parser.parse("abc"),
            ParseRecord::ok(
                Node::Sequence(vec![Node::Char('a'), Node::Char('b'), Node::Char('c')]),
                ""
            )
        );

        // 失敗するケース (途中で失敗): leftover は失敗した地点
        assert_eq!(parser.parse("a"), ParseRecord::error(""));
        assert_eq!(parser.parse("bca"), ParseRecord::error("bca"));
        assert_eq!(parser.parse("acc"), ParseRecord::error("cc"));
    }

    #[test]
    fn test_empty_sequence_succeeds_without_consuming() {
        let parser = Sequence::new(vec![]);
        assert_eq!(parser.parse("abc"), ParseRecord::ok(Node::Sequence(vec![]), "abc"));
    }

    #[test]
    fn test_lazy() {
        let parser = Lazy::new(|| CharParser::new('z'));
        assert_eq!(parser.parse("zz").tag(), Tag::Ok);
        assert_eq!(parser.parse("zz").leftover(), "z");
        assert_eq!(parser.parse("a"), ParseRecord::error("a"));
    }
}
