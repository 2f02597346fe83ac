//! Message parameter lists and the trailing-parameter rule.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::slice;

use tracing::debug;

use crate::parse::impl_parseable;

/// The parameters of a message.
///
/// Only the final parameter may contain spaces, start with `:` or be empty,
/// and then only when written in trailing form (`:` prefixed).
/// [`has_trail`](Self::has_trail) records whether the trailing form was used;
/// serialization also switches to it whenever the final item needs it, so
/// rendered output always parses back to the same items.
///
/// Equality compares the items only.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    items: Vec<String>,
    has_trail: bool,
}

impl Parameters {
    /// Build from a list of items.
    ///
    /// The trailing form is selected when the last item is empty or starts
    /// with `:`.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let has_trail = items
            .last()
            .is_some_and(|last| last.is_empty() || last.starts_with(':'));
        Parameters { items, has_trail }
    }

    /// Build from a list of items, always writing the last one in trailing form.
    pub fn with_trail<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Parameters {
            items: items.into_iter().map(Into::into).collect(),
            has_trail: true,
        }
    }

    /// Parse the parameter section of a line.
    ///
    /// Space-separated tokens become items, runs of spaces are skipped. A
    /// token starting with `:` makes the rest of the text, minus that `:`,
    /// the final item verbatim.
    pub fn parse(text: &str) -> Self {
        let mut items = Vec::new();
        let mut has_trail = false;
        let mut rest = text;

        while !rest.is_empty() {
            if let Some(trailing) = rest.strip_prefix(':') {
                items.push(trailing.to_owned());
                has_trail = true;
                break;
            }

            let (arg, tail) = rest.split_once(' ').unwrap_or((rest, ""));
            if !arg.is_empty() {
                items.push(arg.to_owned());
            }
            rest = tail;
        }

        Parameters { items, has_trail }
    }

    /// The parameter values.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether the last item was (or will be) written in trailing form.
    pub fn has_trail(&self) -> bool {
        self.has_trail
    }

    /// Whether serialization will use the trailing form.
    pub fn needs_trail(&self) -> bool {
        match self.items.last() {
            Some(last) => self.has_trail || !is_middle(last),
            None => false,
        }
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// The last item.
    pub fn last(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    /// Iterate over the items.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take the items.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

fn is_middle(item: &str) -> bool {
    !item.is_empty() && !item.starts_with(':') && !item.contains(' ')
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, middle)) = self.items.split_last() else {
            return Ok(());
        };

        for item in middle {
            if !is_middle(item) {
                debug!(param = %item, "non-final parameter cannot round-trip");
            }
            f.write_str(item)?;
            f.write_char(' ')?;
        }

        if self.needs_trail() {
            f.write_char(':')?;
        }
        f.write_str(last)
    }
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Parameters {}

impl Hash for Parameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for Parameters {
    fn eq(&self, other: &[S]) -> bool {
        self.items.len() == other.len()
            && self.items.iter().zip(other).all(|(a, b)| a == b.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for Parameters {
    fn eq(&self, other: &[S; N]) -> bool {
        *self == other[..]
    }
}

impl<S: AsRef<str>> PartialEq<Vec<S>> for Parameters {
    fn eq(&self, other: &Vec<S>) -> bool {
        *self == other[..]
    }
}

impl<S: Into<String>> FromIterator<S> for Parameters {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Parameters::new(iter)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl_parseable!(Parameters);
