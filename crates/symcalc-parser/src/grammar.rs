//! Generated PEG parser for the directive grammar (§6).

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "symcalc.pest"]
pub struct SymcalcParser;
