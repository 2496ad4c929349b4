//! Error type for numeric domain operations.

/// Error type for [`Domain`][crate::domain::Domain] operations.
///
/// None of these are fatal: every operation that can fail reports the failure
/// through this type (and a `warn!` diagnostic) instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The input value is NaN.
    NotANumber,
    /// The domain has no member that could contain a value.
    EmptyDomain,
    /// The input value lies outside the domain.
    OutOfDomain { value: f64 },
    /// The tolerance step is not a finite positive number.
    InvalidStep { step: f64 },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotANumber => write!(f, "value is NaN"),
            DomainError::EmptyDomain => write!(f, "domain is empty"),
            DomainError::OutOfDomain { value } => write!(f, "value {} is outside the domain", value),
            DomainError::InvalidStep { step } => write!(f, "step {} must be finite and positive", step),
        }
    }
}

impl std::error::Error for DomainError {}
