//! Graft Parser
//!
//! This crate turns query text into a selection tree:
//! - Tokenization (identifiers, braces, parens, colon, integer and string
//!   literals)
//! - Recursive-descent parsing of nested, argument-bearing field selections
//! - Error reporting with source locations

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
