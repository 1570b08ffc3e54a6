//! Error types for dosha calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the dosha risk engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DoshaError {
    /// An enumeration value or numeric range was violated.
    InvalidArgument(&'static str),
    /// Catalog lookup miss.
    NotFound(&'static str),
}

impl Display for DoshaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl Error for DoshaError {}
