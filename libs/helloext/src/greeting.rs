// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Greeting formatting, independent of the Python binding layer.

use std::fmt;

use crate::error::{GreetingError, Result};

const GREETING_PREFIX: &str = "Hello, ";

/// A validated name to greet.
///
/// Any UTF-8 text is accepted except text containing NUL, which the
/// extension has always rejected at the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'a>(&'a str);

impl<'a> Name<'a> {
    pub fn parse(raw: &'a str) -> Result<Self> {
        match raw.find('\0') {
            Some(position) => Err(GreetingError::EmbeddedNul { position }),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// `"Hello, {name}"`, without a trailing newline.
pub fn make_greeting(name: Name<'_>) -> String {
    let mut greeting = String::with_capacity(GREETING_PREFIX.len() + name.as_str().len());
    greeting.push_str(GREETING_PREFIX);
    greeting.push_str(name.as_str());
    greeting
}

/// `"Hello, {name}\n"`, the line written by `hellop`.
pub fn greeting_line(name: Name<'_>) -> String {
    let mut line = make_greeting(name);
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_greeting() {
        let name = Name::parse("World").unwrap();
        assert_eq!(make_greeting(name), "Hello, World");
    }

    #[test]
    fn test_make_greeting_empty_name() {
        let name = Name::parse("").unwrap();
        assert_eq!(make_greeting(name), "Hello, ");
    }

    #[test]
    fn test_greeting_line_has_single_newline() {
        let name = Name::parse("Kris").unwrap();
        assert_eq!(greeting_line(name), "Hello, Kris\n");
    }

    #[test]
    fn test_non_ascii_name_passes_through() {
        let name = Name::parse("Zoë 世界").unwrap();
        assert_eq!(make_greeting(name), "Hello, Zoë 世界");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let name = Name::parse("World").unwrap();
        let first = make_greeting(name);
        for _ in 0..3 {
            assert_eq!(make_greeting(name), first);
        }
    }

    #[test]
    fn test_embedded_nul_rejected() {
        assert_eq!(
            Name::parse("ab\0cd"),
            Err(GreetingError::EmbeddedNul { position: 2 })
        );
        assert!(Name::parse("\0").is_err());
    }

    #[test]
    fn test_name_display() {
        let name = Name::parse("World").unwrap();
        assert_eq!(name.to_string(), "World");
    }
}
