//! Driver configuration: a plain struct-with-`Default` holding the
//! knobs that shape a run beyond the input file path itself.

/// Options that shape how [`crate::run_with_config`] behaves, beyond
/// the input file path itself.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Suppress the `(i is the imaginary unit)` comment line that
    /// otherwise precedes a `solve` result containing a complex root.
    pub quiet: bool,
}
