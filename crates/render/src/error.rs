//! Error types for rendering and linking.
//!
//! Both are reported before any side effect: a failed fill has written no
//! samples and left the time register alone.

use core::fmt;

use crate::link::{Primitive, Signature};

/// Why a fill was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// The output buffer cannot hold `buffer_length` samples.
    BufferTooSmall {
        /// Samples requested
        required: usize,
        /// Samples that fit in the provided memory
        available: usize,
    },
    /// The formula declared a different number of arguments than were passed.
    ArityMismatch {
        /// Arguments the formula declares
        expected: usize,
        /// Arguments supplied to the fill
        got: usize,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "output buffer holds {} samples but {} were requested",
                available, required
            ),
            FillError::ArityMismatch { expected, got } => write!(
                f,
                "formula takes {} arguments but {} were passed",
                expected, got
            ),
        }
    }
}

impl core::error::Error for FillError {}

/// Why a symbol could not be linked or looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// No primitive has the requested name.
    UnknownSymbol,
    /// The primitive exists but was not linked into this module.
    NotLinked(Primitive),
    /// The primitive was looked up with the wrong signature.
    SignatureMismatch {
        /// The primitive found
        primitive: Primitive,
        /// The signature it actually has
        actual: Signature,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::UnknownSymbol => write!(f, "unknown symbol"),
            LinkError::NotLinked(primitive) => {
                write!(f, "`{}` is not linked into this module", primitive)
            }
            LinkError::SignatureMismatch { primitive, actual } => {
                write!(f, "`{}` has signature {}", primitive, actual)
            }
        }
    }
}

impl core::error::Error for LinkError {}
