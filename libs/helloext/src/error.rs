// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Error types for greeting operations.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use thiserror::Error;

/// Errors raised while validating greeting input.
///
/// Arity and type mismatches never reach this type: PyO3's argument
/// extraction rejects them with `TypeError` before the function body runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetingError {
    /// The name contains a NUL character and cannot be passed on as C text.
    #[error("embedded null character")]
    EmbeddedNul { position: usize },
}

/// Result type alias for greeting operations.
pub type Result<T> = std::result::Result<T, GreetingError>;

impl From<GreetingError> for PyErr {
    fn from(err: GreetingError) -> PyErr {
        match err {
            GreetingError::EmbeddedNul { .. } => PyValueError::new_err(err.to_string()),
        }
    }
}
