//! Error types for ICC estimation.

/// Term of the variance decomposition that evaluated to zero (or to an
/// undefined value) and made the estimate ill-posed.
///
/// A degenerate term means the statistical question has no answer for this
/// input. It is distinct from a valid but extreme result such as an ICC
/// close to 1 or a negative ICC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateTerm {
    /// `n - 1 = 0`: only one subject, so subject variance is undefined.
    SubjectDegreesOfFreedom,

    /// `k - 1 = 0`: only one rater, so rater variance is undefined.
    RaterDegreesOfFreedom,

    /// `MSR + (k-1)·MSE + (k/n)·(MSC - MSE) = 0`, typically constant input.
    CoefficientDenominator,

    /// `a·MSC + b·MSE = 0`. With `r0 = 0` this is `MSE = 0`, i.e. raters agree
    /// up to an additive offset and the F statistic is unbounded.
    FValueDenominator,

    /// `1 - icc = 0`: the confidence-interval weights are undefined at
    /// perfect agreement.
    PerfectAgreement,

    /// Satterthwaite degrees of freedom are zero, negative or not finite.
    SatterthwaiteDegreesOfFreedom,

    /// The F distribution could not be constructed or its quantile is not finite.
    FDistribution,

    /// Denominator of the lower confidence bound is zero.
    LowerBoundDenominator,

    /// Denominator of the upper confidence bound is zero.
    UpperBoundDenominator,
}

impl std::fmt::Display for DegenerateTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubjectDegreesOfFreedom => write!(f, "fewer than two subjects (n - 1 = 0)"),
            Self::RaterDegreesOfFreedom => write!(f, "fewer than two raters (k - 1 = 0)"),
            Self::CoefficientDenominator => {
                write!(f, "ICC denominator is zero (no variance in the measurements)")
            }
            Self::FValueDenominator => {
                write!(f, "F-value denominator is zero (residual mean square vanishes)")
            }
            Self::PerfectAgreement => {
                write!(f, "ICC equals 1, confidence bounds are undefined")
            }
            Self::SatterthwaiteDegreesOfFreedom => {
                write!(f, "Satterthwaite degrees of freedom are undefined")
            }
            Self::FDistribution => write!(f, "F distribution quantile is undefined"),
            Self::LowerBoundDenominator => write!(f, "lower confidence bound denominator is zero"),
            Self::UpperBoundDenominator => write!(f, "upper confidence bound denominator is zero"),
        }
    }
}

/// Error returned by the ICC estimators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IccError {
    /// The input array does not have the required rank, shape or contents.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The estimator configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A division by zero in the variance decomposition.
    #[error("degenerate input: {0}")]
    Degenerate(DegenerateTerm),

    /// A replicate of a repeated experiment failed.
    #[error("replicate {index}: {source}")]
    Replicate {
        /// Position of the failing replicate.
        index: usize,
        /// What went wrong.
        #[source]
        source: Box<IccError>,
    },
}

impl IccError {
    /// Returns the degenerate term, looking through replicate wrappers.
    pub fn degenerate_term(&self) -> Option<DegenerateTerm> {
        match self {
            Self::Degenerate(term) => Some(*term),
            Self::Replicate { source, .. } => source.degenerate_term(),
            _ => None,
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type for ICC estimation.
pub type Result<T> = std::result::Result<T, IccError>;
