use std::fmt;
use std::path::PathBuf;

/// Run configuration for the miner. `validate` is called before any I/O.
#[derive(Debug, Clone)]
pub struct Arguments {
    /// Input dataset in CSV format: one transaction per line, items
    /// separated by commas.
    pub input: PathBuf,
    /// File path for the generated rules.
    pub output: PathBuf,
    /// Minimum itemset support threshold, in [0, 1].
    pub min_support: f64,
    /// Minimum rule confidence threshold, in [0, 1].
    pub min_confidence: f64,
    /// Minimum rule lift threshold, in [1, ∞); 0 disables the lift filter.
    pub min_lift: f64,
    /// Optional file path for the generated itemsets.
    pub itemsets_path: Option<PathBuf>,
    /// Worker threads for the mining phase; defaults to the logical CPU
    /// count when unset.
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MinSupportOutOfRange,
    MinConfidenceOutOfRange,
    MinLiftOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MinSupportOutOfRange => {
                write!(f, "minimum support is out of range [0,1]")
            }
            ValidationError::MinConfidenceOutOfRange => {
                write!(f, "minimum confidence is out of range [0,1]")
            }
            ValidationError::MinLiftOutOfRange => {
                write!(f, "minimum lift must be at least 1, or 0 to disable the filter")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl Arguments {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(ValidationError::MinSupportOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ValidationError::MinConfidenceOutOfRange);
        }
        if self.min_lift != 0.0 && self.min_lift < 1.0 {
            return Err(ValidationError::MinLiftOutOfRange);
        }
        Ok(())
    }
}
