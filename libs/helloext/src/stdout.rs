// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Output through Python's `sys.stdout`.
//!
//! Output goes through the interpreter's stream object rather than fd 1, so
//! it stays ordered with Python's buffered `print` calls and is seen by
//! `contextlib.redirect_stdout` and pytest's `capsys`.

use pyo3::exceptions::PyAttributeError;
use pyo3::intern;
use pyo3::prelude::*;

/// Write `text` to `sys.stdout` in a single `write` call.
///
/// A missing or `None` `sys.stdout` (pythonw, closed embedders) discards
/// the text. Exceptions raised by the stream's `write` propagate.
pub fn write_stdout(py: Python<'_>, text: &str) -> PyResult<()> {
    let sys = py.import(intern!(py, "sys"))?;

    let stdout = match sys.getattr(intern!(py, "stdout")) {
        Ok(stdout) => stdout,
        Err(err) if err.is_instance_of::<PyAttributeError>(py) => {
            tracing::debug!("sys.stdout is missing; discarding {} bytes", text.len());
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if stdout.is_none() {
        tracing::debug!("sys.stdout is None; discarding {} bytes", text.len());
        return Ok(());
    }

    stdout.call_method1(intern!(py, "write"), (text,))?;
    Ok(())
}
