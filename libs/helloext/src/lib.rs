// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Example Python extension module.
//!
//! Builds the `helloext._hello` module exposing two callables:
//! `hellop(name)` prints `Hello, {name}` to `sys.stdout` and `hellos(name)`
//! returns it as a string. The greeting logic lives in [`greeting`] and has
//! no Python dependency; [`bindings`] adapts it to the interpreter.

use pyo3::prelude::*;

pub mod bindings;
pub mod error;
pub mod greeting;
mod stdout;

pub use error::GreetingError;
pub use greeting::{Name, greeting_line, make_greeting};

/// Example CPython extension module.
#[pymodule]
pub fn _hello(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Bridge Rust logging into Python's `logging` module. Levels are looked
    // up on every record so `logging.getLogger("helloext").setLevel(..)`
    // takes effect immediately. An embedder may already own the `log`
    // backend; greetings still work without the bridge.
    let bridge = pyo3_log::Logger::new(m.py(), pyo3_log::Caching::Nothing)?;
    if let Err(e) = bridge.install() {
        tracing::debug!("pyo3-log bridge not installed: {}", e);
    }

    m.add_function(wrap_pyfunction!(bindings::print_greeting, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::make_greeting, m)?)?;

    Ok(())
}
