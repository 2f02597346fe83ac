//! Casemap-aware strings.
//!
//! [`CaseString`] wraps text together with the [`Casemap`] it should be
//! compared under. Equality, ordering, hashing and searching all go through
//! the folded (lower-case) form, so `#Foo[1]` and `#foo{1}` are the same
//! channel under RFC 1459.
//!
//! Plain strings compare against a `CaseString` by being folded with the
//! `CaseString`'s own casemap:
//!
//! ```
//! use slirc_grammar::{CaseString, casemap::RFC1459};
//!
//! let chan = CaseString::with_casemap("#Foo[1]", &RFC1459);
//! assert_eq!(chan, "#FOO{1}");
//! assert_eq!("#foo{1}", chan);
//! assert!(chan.starts_with("#f"));
//! ```
//!
//! There is deliberately no `Deref<Target = str>`: that would expose the
//! case-sensitive `str` methods next to the casemapped ones.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Bound, RangeBounds};

use crate::casemap::{Casemap, ASCII};
use crate::error::CaseStringError;

/// Characters stripped by [`CaseString::strip`] when no set is given.
const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// A string bound to a [`Casemap`].
///
/// The folded form is computed once at construction; every derived string
/// (slices, case conversions, concatenations) shares the source casemap.
#[derive(Clone)]
pub struct CaseString<'m> {
    raw: String,
    folded: String,
    casemap: &'m Casemap,
}

impl CaseString<'static> {
    /// Create a string compared under the [`ASCII`] casemap.
    pub fn new(raw: impl Into<String>) -> Self {
        CaseString::with_casemap(raw, &ASCII)
    }
}

impl<'m> CaseString<'m> {
    /// Create a string compared under `casemap`.
    pub fn with_casemap(raw: impl Into<String>, casemap: &'m Casemap) -> Self {
        let raw = raw.into();
        let folded = casemap.to_lower(&raw);
        CaseString {
            raw,
            folded,
            casemap,
        }
    }

    fn wrap(&self, raw: impl Into<String>) -> Self {
        CaseString::with_casemap(raw, self.casemap)
    }

    fn fold(&self, s: &str) -> String {
        self.casemap.to_lower(s)
    }

    /// The original text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded text used for comparisons.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Consume the wrapper and return the original text.
    pub fn into_string(self) -> String {
        self.raw
    }

    /// The casemap this string compares under.
    pub fn casemap(&self) -> &'m Casemap {
        self.casemap
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Lower-case copy.
    pub fn lower(&self) -> Self {
        self.wrap(self.folded.clone())
    }

    /// Upper-case copy.
    pub fn upper(&self) -> Self {
        self.wrap(self.casemap.to_upper(&self.raw))
    }

    /// Alias for [`lower`](Self::lower).
    pub fn casefold(&self) -> Self {
        self.lower()
    }

    /// Copy with every cased character flipped.
    pub fn swapcase(&self) -> Self {
        self.wrap(
            self.raw
                .chars()
                .map(|c| self.casemap.swap_char(c))
                .collect::<String>(),
        )
    }

    /// Copy with the first character upper-cased and the rest lower-cased.
    pub fn capitalize(&self) -> Self {
        let mut chars = self.raw.chars();
        let out = match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(self.raw.len());
                out.push(self.casemap.upper_char(first));
                out.extend(chars.map(|c| self.casemap.lower_char(c)));
                out
            }
            None => String::new(),
        };
        self.wrap(out)
    }

    /// Substring by byte range, carrying the casemap.
    ///
    /// Returns `None` when the range is out of bounds or splits a character.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<Self> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.raw.get(bounds).map(|s| self.wrap(s))
    }

    /// Case-insensitive substring test.
    pub fn contains(&self, needle: impl AsRef<str>) -> bool {
        self.folded.contains(self.fold(needle.as_ref()).as_str())
    }

    /// Case-insensitive prefix test.
    pub fn starts_with(&self, prefix: impl AsRef<str>) -> bool {
        self.folded.starts_with(self.fold(prefix.as_ref()).as_str())
    }

    /// Whether the string starts with any of `prefixes`.
    pub fn starts_with_any<S: AsRef<str>>(&self, prefixes: &[S]) -> bool {
        prefixes.iter().any(|p| self.starts_with(p))
    }

    /// Case-insensitive suffix test.
    pub fn ends_with(&self, suffix: impl AsRef<str>) -> bool {
        self.folded.ends_with(self.fold(suffix.as_ref()).as_str())
    }

    /// Whether the string ends with any of `suffixes`.
    pub fn ends_with_any<S: AsRef<str>>(&self, suffixes: &[S]) -> bool {
        suffixes.iter().any(|s| self.ends_with(s))
    }

    /// Byte offset of the first case-insensitive match.
    pub fn find(&self, needle: impl AsRef<str>) -> Option<usize> {
        self.folded.find(self.fold(needle.as_ref()).as_str())
    }

    /// Byte offset of the last case-insensitive match.
    pub fn rfind(&self, needle: impl AsRef<str>) -> Option<usize> {
        self.folded.rfind(self.fold(needle.as_ref()).as_str())
    }

    /// Like [`find`](Self::find) but fails with [`CaseStringError::NotFound`].
    pub fn index(&self, needle: impl AsRef<str>) -> Result<usize, CaseStringError> {
        let needle = needle.as_ref();
        self.find(needle)
            .ok_or_else(|| CaseStringError::NotFound(needle.to_owned()))
    }

    /// Like [`rfind`](Self::rfind) but fails with [`CaseStringError::NotFound`].
    pub fn rindex(&self, needle: impl AsRef<str>) -> Result<usize, CaseStringError> {
        let needle = needle.as_ref();
        self.rfind(needle)
            .ok_or_else(|| CaseStringError::NotFound(needle.to_owned()))
    }

    /// Number of non-overlapping case-insensitive matches.
    pub fn count(&self, needle: impl AsRef<str>) -> usize {
        self.folded.matches(self.fold(needle.as_ref()).as_str()).count()
    }

    /// Split around the first occurrence of `sep`.
    ///
    /// When `sep` is absent the whole string comes first, followed by two
    /// empty strings.
    pub fn partition(&self, sep: impl AsRef<str>) -> (Self, Self, Self) {
        let sep = sep.as_ref();
        match self.find(sep) {
            Some(pos) => self.split_at_match(pos, sep.len()),
            None => (self.clone(), self.wrap(""), self.wrap("")),
        }
    }

    /// Split around the last occurrence of `sep`.
    ///
    /// When `sep` is absent two empty strings come first, followed by the
    /// whole string.
    pub fn rpartition(&self, sep: impl AsRef<str>) -> (Self, Self, Self) {
        let sep = sep.as_ref();
        match self.rfind(sep) {
            Some(pos) => self.split_at_match(pos, sep.len()),
            None => (self.wrap(""), self.wrap(""), self.clone()),
        }
    }

    // Casemap pairs have equal UTF-8 widths, so folded offsets are raw offsets.
    fn split_at_match(&self, pos: usize, len: usize) -> (Self, Self, Self) {
        let end = pos + len;
        (
            self.wrap(&self.raw[..pos]),
            self.wrap(&self.raw[pos..end]),
            self.wrap(&self.raw[end..]),
        )
    }

    fn strip_set(&self, chars: Option<&str>) -> String {
        self.fold(chars.unwrap_or(WHITESPACE))
    }

    /// Strip leading and trailing characters in `chars` (default: whitespace).
    pub fn strip(&self, chars: Option<&str>) -> Self {
        self.lstrip(chars).rstrip(chars)
    }

    /// Strip leading characters in `chars` (default: whitespace).
    pub fn lstrip(&self, chars: Option<&str>) -> Self {
        let set = self.strip_set(chars);
        let start = self
            .raw
            .char_indices()
            .find(|(_, c)| !set.contains(self.casemap.lower_char(*c)))
            .map_or(self.raw.len(), |(i, _)| i);
        self.wrap(&self.raw[start..])
    }

    /// Strip trailing characters in `chars` (default: whitespace).
    pub fn rstrip(&self, chars: Option<&str>) -> Self {
        let set = self.strip_set(chars);
        let end = self
            .raw
            .char_indices()
            .rev()
            .find(|(_, c)| !set.contains(self.casemap.lower_char(*c)))
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.wrap(&self.raw[..end])
    }

    /// Not supported: replacement has no single casemapped meaning.
    pub fn replace(&self, _from: &str, _to: &str) -> Result<Self, CaseStringError> {
        Err(CaseStringError::Unsupported("replace"))
    }

    /// Not supported: title-casing is locale-dependent.
    pub fn title(&self) -> Result<Self, CaseStringError> {
        Err(CaseStringError::Unsupported("title"))
    }

    /// Not supported.
    pub fn split(&self, _sep: Option<&str>) -> Result<Vec<Self>, CaseStringError> {
        Err(CaseStringError::Unsupported("split"))
    }

    /// Not supported.
    pub fn rsplit(&self, _sep: Option<&str>) -> Result<Vec<Self>, CaseStringError> {
        Err(CaseStringError::Unsupported("rsplit"))
    }
}

impl fmt::Display for CaseString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for CaseString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CaseString").field(&self.raw).finish()
    }
}

impl AsRef<str> for CaseString<'_> {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for CaseString<'static> {
    fn from(s: &str) -> Self {
        CaseString::new(s)
    }
}

impl From<String> for CaseString<'static> {
    fn from(s: String) -> Self {
        CaseString::new(s)
    }
}

impl<'m> From<CaseString<'m>> for String {
    fn from(s: CaseString<'m>) -> Self {
        s.raw
    }
}

impl Default for CaseString<'static> {
    fn default() -> Self {
        CaseString::new("")
    }
}

impl<'m, 'n> PartialEq<CaseString<'n>> for CaseString<'m> {
    fn eq(&self, other: &CaseString<'n>) -> bool {
        self.folded == other.folded
    }
}

impl Eq for CaseString<'_> {}

impl<'m, 'n> PartialOrd<CaseString<'n>> for CaseString<'m> {
    fn partial_cmp(&self, other: &CaseString<'n>) -> Option<Ordering> {
        Some(self.folded.cmp(&other.folded))
    }
}

impl Ord for CaseString<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl Hash for CaseString<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

macro_rules! impl_text_cmp {
    ($($text:ty),*) => {$(
        impl<'m, 'a> PartialEq<$text> for CaseString<'m> {
            fn eq(&self, other: &$text) -> bool {
                self.folded == self.fold(other)
            }
        }

        impl<'m, 'a> PartialEq<CaseString<'m>> for $text {
            fn eq(&self, other: &CaseString<'m>) -> bool {
                other == self
            }
        }

        impl<'m, 'a> PartialOrd<$text> for CaseString<'m> {
            fn partial_cmp(&self, other: &$text) -> Option<Ordering> {
                Some(self.folded.as_str().cmp(self.fold(other).as_str()))
            }
        }

        impl<'m, 'a> PartialOrd<CaseString<'m>> for $text {
            fn partial_cmp(&self, other: &CaseString<'m>) -> Option<Ordering> {
                Some(other.fold(self).as_str().cmp(other.folded.as_str()))
            }
        }
    )*};
}

impl_text_cmp!(str, &'a str, String);

impl<'m> Add<&str> for CaseString<'m> {
    type Output = CaseString<'m>;

    fn add(mut self, rhs: &str) -> Self::Output {
        self.raw.push_str(rhs);
        self.folded.push_str(&self.casemap.to_lower(rhs));
        self
    }
}

impl<'m> Add<&str> for &CaseString<'m> {
    type Output = CaseString<'m>;

    fn add(self, rhs: &str) -> Self::Output {
        self.clone() + rhs
    }
}
