//! Hostmask glob matching.
//!
//! Ban and exception lists use globs such as `*!*@*.example.com`:
//!
//! - `*` matches zero or more characters, line breaks included
//! - `?` matches exactly one character, line breaks included
//!
//! Every other character is literal. Matching is anchored at both ends and
//! case-sensitive; fold both sides through a [`Casemap`](crate::Casemap)
//! first when case-insensitive matching is wanted.

use regex::Regex;
use tracing::warn;

use crate::error::{GrammarError, Result};

/// A compiled hostmask pattern.
#[derive(Clone, Debug)]
pub struct Mask {
    pattern: String,
    regex: Regex,
}

impl Mask {
    /// Compile a glob pattern.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&glob_to_regex(&pattern)).map_err(|cause| {
            GrammarError::InvalidMask {
                pattern: pattern.clone(),
                cause,
            }
        })?;
        Ok(Mask { pattern, regex })
    }

    /// The glob this mask was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test a hostmask against the pattern.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PartialEq for Mask {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Mask {}

fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 12);
    out.push_str("(?s)^");
    let mut buf = [0u8; 4];
    let mut prev_star = false;
    for c in pattern.chars() {
        match c {
            '*' if prev_star => {}
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            c => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
        prev_star = c == '*';
    }
    out.push('$');
    out
}

/// Match `candidate` against the glob `pattern`.
///
/// Never panics. A pattern that fails to compile matches nothing.
///
/// ```
/// use slirc_grammar::match_mask;
///
/// assert!(match_mask("nick!user@host.example.com", "*!*@*.example.com"));
/// assert!(!match_mask("nick!user@other.com", "*!*@*.example.com"));
/// ```
pub fn match_mask(candidate: &str, pattern: &str) -> bool {
    match Mask::new(pattern) {
        Ok(mask) => mask.matches(candidate),
        Err(err) => {
            warn!(pattern, error = %err, "hostmask pattern failed to compile");
            false
        }
    }
}
