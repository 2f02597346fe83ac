//! IRC case-mapping tables.
//!
//! IRC compares nicknames and channel names case-insensitively, but what
//! counts as "the same letter" depends on the network's `CASEMAPPING`
//! ISUPPORT token. Under `rfc1459`, for example, `[`, `]`, `\` and `^` are
//! the upper-case forms of `{`, `}`, `|` and `~`.
//!
//! A [`Casemap`] is a pair of equally long character sequences where
//! `lower[i]` and `upper[i]` are the two cases of the same letter. Every
//! other character is caseless.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::{GrammarError, Result};

/// A pair of lower/upper translation tables.
///
/// Positional correspondence: the i-th character of [`lower`](Self::lower)
/// is the lower-case form of the i-th character of [`upper`](Self::upper).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Casemap {
    lower: Cow<'static, str>,
    upper: Cow<'static, str>,
}

/// Plain ASCII: `A-Z` ↔ `a-z`.
pub static ASCII: Casemap = Casemap::from_static(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
);

/// RFC 1459: ASCII plus `[\]^` ↔ `{|}~`.
pub static RFC1459: Casemap = Casemap::from_static(
    "abcdefghijklmnopqrstuvwxyz{|}~",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^",
);

/// Strict RFC 1459: ASCII plus `[\]` ↔ `{|}`.
pub static STRICT_RFC1459: Casemap = Casemap::from_static(
    "abcdefghijklmnopqrstuvwxyz{|}",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]",
);

impl Casemap {
    const fn from_static(lower: &'static str, upper: &'static str) -> Self {
        Casemap {
            lower: Cow::Borrowed(lower),
            upper: Cow::Borrowed(upper),
        }
    }

    /// Build a casemap from its lower and upper character sequences.
    ///
    /// Fails when the sequences differ in length, when a character repeats
    /// on one side, or when a pair has different UTF-8 widths. The last
    /// rule keeps byte offsets in a folded string aligned with the original.
    pub fn new(lower: impl Into<String>, upper: impl Into<String>) -> Result<Self> {
        let lower = lower.into();
        let upper = upper.into();

        let (lower_len, upper_len) = (lower.chars().count(), upper.chars().count());
        if lower_len != upper_len {
            return Err(GrammarError::CasemapLength {
                lower: lower_len,
                upper: upper_len,
            });
        }

        for side in [&lower, &upper] {
            let mut seen = HashSet::new();
            if let Some(dup) = side.chars().find(|c| !seen.insert(*c)) {
                return Err(GrammarError::DuplicateCasemapChar(dup));
            }
        }

        if let Some((l, u)) = lower
            .chars()
            .zip(upper.chars())
            .find(|(l, u)| l.len_utf8() != u.len_utf8())
        {
            return Err(GrammarError::CasemapWidth { lower: l, upper: u });
        }

        Ok(Casemap {
            lower: Cow::Owned(lower),
            upper: Cow::Owned(upper),
        })
    }

    /// Look up a predefined casemap by its ISUPPORT `CASEMAPPING` name.
    pub fn by_name(name: &str) -> Option<&'static Casemap> {
        match name.to_ascii_lowercase().as_str() {
            "ascii" => Some(&ASCII),
            "rfc1459" => Some(&RFC1459),
            "strict-rfc1459" | "rfc1459-strict" => Some(&STRICT_RFC1459),
            _ => None,
        }
    }

    /// The lower-case side of the table.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// The upper-case side of the table.
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Map one character to its lower-case form.
    #[inline]
    pub fn lower_char(&self, c: char) -> char {
        self.upper
            .chars()
            .zip(self.lower.chars())
            .find_map(|(u, l)| (u == c).then_some(l))
            .unwrap_or(c)
    }

    /// Map one character to its upper-case form.
    #[inline]
    pub fn upper_char(&self, c: char) -> char {
        self.lower
            .chars()
            .zip(self.upper.chars())
            .find_map(|(l, u)| (l == c).then_some(u))
            .unwrap_or(c)
    }

    /// Swap the case of one character.
    #[inline]
    pub fn swap_char(&self, c: char) -> char {
        let lower = self.lower_char(c);
        if lower != c {
            lower
        } else {
            self.upper_char(c)
        }
    }

    /// Lower-case a whole string.
    pub fn to_lower(&self, s: &str) -> String {
        s.chars().map(|c| self.lower_char(c)).collect()
    }

    /// Upper-case a whole string.
    pub fn to_upper(&self, s: &str) -> String {
        s.chars().map(|c| self.upper_char(c)).collect()
    }

    /// Compare two strings case-insensitively under this casemap.
    pub fn eq_ignore_case(&self, a: &str, b: &str) -> bool {
        a.len() == b.len()
            && a
                .chars()
                .zip(b.chars())
                .all(|(ca, cb)| self.lower_char(ca) == self.lower_char(cb))
    }
}

impl Default for Casemap {
    fn default() -> Self {
        ASCII.clone()
    }
}

/// Convert a string to IRC lowercase using RFC 1459 case mapping.
pub fn irc_to_lower(s: &str) -> String {
    RFC1459.to_lower(s)
}

/// Compare two strings using RFC 1459 case-insensitive comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    RFC1459.eq_ignore_case(a, b)
}
