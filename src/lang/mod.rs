/*!
# Rust Language Module

This Rust module provides lexical analysis and the recognizer of the
turtle language. Recognition and evaluation happen in a single pass.

*/

pub type Position = usize;

mod error;
mod lex;
mod parse;
mod sequence;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use parse::parse;
pub use sequence::Sequence;
pub use token::{Operand, Operator, Token, Word};
