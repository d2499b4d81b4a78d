//! Include-directive matching for amalg-core

use anyhow::{anyhow, Context, Result};
use regex::Regex;

/// Default convention: `#include "relative/path"`.
const QUOTED_INCLUDE: &str = r#"#include "([^"]+)""#;

/// Recognizer for one textual include convention.
///
/// A line-oriented regex with exactly one capture group yielding the include
/// target. Deliberately not a tokenizer: a line either carries the directive
/// or it is passed through untouched.
#[derive(Debug, Clone)]
pub struct IncludeDirective {
    pattern: Regex,
}

impl IncludeDirective {
    /// The quoted form, `#include "..."`.
    ///
    /// Angle-bracket includes (`#include <...>`) never match.
    pub fn quoted() -> Self {
        Self {
            pattern: Regex::new(QUOTED_INCLUDE).expect("quoted include pattern compiles"),
        }
    }

    /// Build a matcher for an alternate include convention.
    ///
    /// The pattern must contain exactly one capture group; the group's text is
    /// taken as the include target.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let compiled =
            Regex::new(pattern).with_context(|| format!("invalid directive pattern: {pattern}"))?;

        // captures_len counts the implicit whole-match group.
        if compiled.captures_len() != 2 {
            return Err(anyhow!(
                "directive pattern needs exactly one capture group: {pattern}"
            ));
        }

        Ok(Self { pattern: compiled })
    }

    /// The include target if `line` carries the directive.
    pub fn target<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for IncludeDirective {
    fn default() -> Self {
        Self::quoted()
    }
}
