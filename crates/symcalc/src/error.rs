//! Driver-level error type (§7): I/O failures reading the input file,
//! grammar rejections, and the two `solve` conditions §7 calls
//! fatal — no variable to solve for, and an unsupported degree. Every
//! other algebra-core error (division by zero chief among them) is
//! local to its directive and printed inline by [`crate::execute`]
//! instead of ever reaching here.

use std::fmt;
use std::path::PathBuf;
use symcalc_core::MathError;
use symcalc_parser::ParseError;

#[derive(Debug)]
pub enum DriverError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(ParseError),
    Fatal(MathError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            DriverError::Parse(e) => write!(f, "{e}"),
            DriverError::Fatal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<ParseError> for DriverError {
    fn from(e: ParseError) -> Self {
        DriverError::Parse(e)
    }
}
