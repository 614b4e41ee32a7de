//! Grammar, parser, and AST builder for the symcalc directive
//! language (§6 and §4.1–§4.2).
//!
//! [`parse_file`] is the only entry point the driver needs: it turns
//! a whole input file into an ordered sequence of [`ast::ParsedLine`]
//! values, one per non-comment directive, each carrying both the
//! verbatim source text to echo and the [`ast::Directive`] it denotes.

pub mod ast;
pub mod error;
pub mod grammar;

pub use ast::{parse_file, AssignRhs, Directive, Op, Operation, ParsedLine};
pub use error::ParseError;
