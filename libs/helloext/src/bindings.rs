// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Python-callable greeting functions.
//!
//! `name` is positional-only and must be a `str`; PyO3 rejects anything
//! else with `TypeError` before these bodies run.

use pyo3::prelude::*;

use crate::greeting::{self, Name};
use crate::stdout;

/// Print Hello, {name} to stdout.
#[pyfunction]
#[pyo3(name = "hellop", signature = (name, /))]
pub fn print_greeting(py: Python<'_>, name: &str) -> PyResult<()> {
    let name = Name::parse(name)?;
    tracing::debug!(%name, "hellop");

    stdout::write_stdout(py, &greeting::greeting_line(name))
}

/// Return Hello, {name} as a string.
#[pyfunction]
#[pyo3(name = "hellos", signature = (name, /))]
pub fn make_greeting(name: &str) -> PyResult<String> {
    let name = Name::parse(name)?;
    tracing::debug!(%name, "hellos");

    Ok(greeting::make_greeting(name))
}
