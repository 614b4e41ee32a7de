//! Parser error type: wraps [`pest::error::Error`] with the source
//! line/column the driver prints in its diagnostic.

use crate::grammar::Rule;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        let (line, column) = match &e.line_col {
            pest::error::LineColLocation::Pos((l, c)) => (*l, *c),
            pest::error::LineColLocation::Span((l, c), _) => (*l, *c),
        };
        ParseError { line, column, message: e.to_string() }
    }
}

impl ParseError {
    /// An AST-construction failure with no pest span of its own (e.g.
    /// a malformed variable exponent), as opposed to a grammar
    /// rejection carrying a precise line/column.
    pub fn ast(message: impl Into<String>) -> Self {
        ParseError { line: 0, column: 0, message: message.into() }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 && self.column == 0 {
            write!(f, "parse error: {}", self.message)
        } else {
            write!(f, "parse error at line {}, column {}: {}", self.line, self.column, self.message)
        }
    }
}

impl std::error::Error for ParseError {}
