use strum::{Display, EnumIter};

/// A node of the parse tree.
///
/// Nodes are built bottom-up while parsing and are never mutated afterwards.
/// `Sequence` only exists as scaffolding produced by the sequence combinator;
/// grammar parsers unpack it before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Char(char),
    Number(u64),
    /// Signed integer literal kept as sign and magnitude, so `-0` survives.
    Constant {
        negative: bool,
        value: u64,
    },
    Binary(BinaryExpression),
    Sequence(Vec<Node>),
}

impl Node {
    pub fn constant(negative: bool, value: u64) -> Self {
        Node::Constant { negative, value }
    }

    pub fn binary(left: Node, op: Operator, right: Node) -> Self {
        Node::Binary(BinaryExpression {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    pub left: Box<Node>,
    pub op: Operator,
    pub right: Box<Node>,
}

/// Operators accepted between the operands of a binary expression.
///
/// Declaration order is the order the grammar tries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }
}

impl TryFrom<&Node> for Operator {
    type Error = ();

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        match node {
            Node::Char(c) => Operator::from_char(*c).ok_or(()),
            _ => Err(()),
        }
    }
}
