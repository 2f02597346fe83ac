//! IRCv3 capability tokens.
//!
//! A `CAP LS`/`CAP ACK` reply carries a space-separated list of capability
//! tokens, each either `name` or `name=value`.
//!
//! # Reference
//! - IRCv3 Capability Negotiation: <https://ircv3.net/specs/extensions/capability-negotiation>

use std::fmt;
use std::slice;

use crate::parse::impl_parseable;

/// A single capability, e.g. `sasl=PLAIN,EXTERNAL` or `multi-prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cap {
    name: String,
    value: Option<String>,
}

impl Cap {
    /// A capability without a value.
    pub fn new(name: impl Into<String>) -> Self {
        Cap {
            name: name.into(),
            value: None,
        }
    }

    /// A capability with a value. An empty value is stored as no value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Cap {
            name: name.into(),
            value: (!value.is_empty()).then_some(value),
        }
    }

    /// Parse `name` or `name=value`, splitting on the first `=`.
    pub fn parse(text: &str) -> Self {
        match text.split_once('=') {
            Some((name, value)) => Cap::with_value(name, value),
            None => Cap::new(text),
        }
    }

    /// The capability name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The capability value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(value) = &self.value {
            write!(f, "={}", value)?;
        }
        Ok(())
    }
}

/// An ordered list of capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapList(Vec<Cap>);

impl CapList {
    /// An empty list.
    pub fn new() -> Self {
        CapList(Vec::new())
    }

    /// Parse a capability list.
    ///
    /// One leading `:` is removed and surrounding whitespace trimmed (some
    /// networks send a trailing space in `CAP ACK`). Empty input gives an
    /// empty list. Runs of spaces between tokens count as one separator, so
    /// no empty capability is ever produced.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix(':').unwrap_or(text);
        CapList(
            text.trim()
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(Cap::parse)
                .collect(),
        )
    }

    /// Find a capability by name.
    pub fn get(&self, name: &str) -> Option<&Cap> {
        self.0.iter().find(|cap| cap.name == name)
    }

    /// Whether a capability with this name is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append a capability.
    pub fn push(&mut self, cap: Cap) {
        self.0.push(cap);
    }

    /// Iterate in list order.
    pub fn iter(&self) -> slice::Iter<'_, Cap> {
        self.0.iter()
    }

    /// Number of capabilities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CapList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cap) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cap)?;
        }
        Ok(())
    }
}

impl From<Vec<Cap>> for CapList {
    fn from(caps: Vec<Cap>) -> Self {
        CapList(caps)
    }
}

impl FromIterator<Cap> for CapList {
    fn from_iter<I: IntoIterator<Item = Cap>>(iter: I) -> Self {
        CapList(iter.into_iter().collect())
    }
}

impl IntoIterator for CapList {
    type Item = Cap;
    type IntoIter = std::vec::IntoIter<Cap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CapList {
    type Item = &'a Cap;
    type IntoIter = slice::Iter<'a, Cap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[Cap]> for CapList {
    fn eq(&self, other: &[Cap]) -> bool {
        self.0 == other
    }
}

impl_parseable!(Cap, CapList);
