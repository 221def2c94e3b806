pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use core::ParseError;
pub use core::ParseRecord;
pub use core::ParseResult;
pub use core::Parser;
pub use core::Tag;

pub use crate::ast;
