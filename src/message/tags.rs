//! IRCv3 message tags.
//!
//! The tag section of a line is `@name[=value];name[=value]...`. Values are
//! escaped so that they never contain `;`, space, CR or LF.
//!
//! # Reference
//! - IRCv3 Message Tags: <https://ircv3.net/specs/extensions/message-tags>

use std::collections::HashMap;
use std::fmt::{self, Result as FmtResult, Write};
use std::hash::{Hash, Hasher};
use std::slice;

use crate::parse::impl_parseable;

/// Escape a tag value for serialization.
///
/// Escapes special characters according to the IRCv3 message-tags spec.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// Reverses the escaping applied by [`escape_tag_value`]. Decoding is
/// lenient: an unknown escape `\x` yields `x` and a trailing lone `\` is
/// dropped.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

/// A single message tag.
///
/// `a` and `a=` are distinct on the wire: the first has no value, the second
/// an explicitly empty one. [`has_value`](Self::has_value) records which form
/// was used so it survives a round trip, but it does not take part in
/// equality.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageTag {
    name: String,
    value: String,
    has_value: bool,
}

impl MessageTag {
    /// A tag without a value, rendered as bare `name`.
    pub fn new(name: impl Into<String>) -> Self {
        MessageTag {
            name: name.into(),
            value: String::new(),
            has_value: false,
        }
    }

    /// A tag with a value, rendered as `name=value` even when `value` is empty.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        MessageTag {
            name: name.into(),
            value: value.into(),
            has_value: true,
        }
    }

    /// Parse `name` or `name=escaped-value`, splitting on the first `=`.
    pub fn parse(text: &str) -> Self {
        match text.split_once('=') {
            Some((name, value)) => MessageTag::with_value(name, unescape_tag_value(value)),
            None => MessageTag::new(text),
        }
    }

    /// The tag name, including any vendor prefix or client-only `+`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unescaped value; empty when the tag has none.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the tag was written with an `=`.
    pub fn has_value(&self) -> bool {
        self.has_value
    }
}

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.has_value {
            f.write_char('=')?;
            escape_tag_value(f, &self.value)?;
        }
        Ok(())
    }
}

impl PartialEq for MessageTag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for MessageTag {}

impl Hash for MessageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.hash(state);
    }
}

/// The tags of one message, keyed by name.
///
/// Insertion keeps the position where a name was first seen; a later tag
/// with the same name replaces the value in place. Equality ignores order.
/// Lookups go through a name index, so building a list is linear in the
/// number of tags.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<MessageTag>", from = "Vec<MessageTag>")
)]
pub struct TagList {
    tags: Vec<MessageTag>,
    index: HashMap<String, usize>,
}

impl TagList {
    /// An empty tag list.
    pub fn new() -> Self {
        TagList::default()
    }

    /// Parse the tag section without its leading `@`.
    ///
    /// Empty segments from stray `;` are skipped.
    pub fn parse(text: &str) -> Self {
        text.split(';')
            .filter(|segment| !segment.is_empty())
            .map(MessageTag::parse)
            .collect()
    }

    /// Build a list of valued tags from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| MessageTag::with_value(k, v))
            .collect()
    }

    /// Insert a tag, replacing any tag of the same name in place.
    ///
    /// Returns the replaced tag.
    pub fn insert(&mut self, tag: MessageTag) -> Option<MessageTag> {
        match self.index.get(&tag.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.tags[pos], tag)),
            None => {
                self.index.insert(tag.name.clone(), self.tags.len());
                self.tags.push(tag);
                None
            }
        }
    }

    /// Remove a tag by name.
    pub fn remove(&mut self, name: &str) -> Option<MessageTag> {
        let pos = self.index.remove(name)?;
        let removed = self.tags.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Look up a tag by name.
    pub fn get(&self, name: &str) -> Option<&MessageTag> {
        self.index.get(name).map(|&pos| &self.tags[pos])
    }

    /// Look up a tag's value by name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(MessageTag::value)
    }

    /// Whether a tag with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> slice::Iter<'_, MessageTag> {
        self.tags.iter()
    }

    /// Number of distinct tag names.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_char(';')?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

impl PartialEq for TagList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|tag| other.get(&tag.name) == Some(tag))
    }
}

impl Eq for TagList {}

impl FromIterator<MessageTag> for TagList {
    fn from_iter<I: IntoIterator<Item = MessageTag>>(iter: I) -> Self {
        let mut list = TagList::new();
        for tag in iter {
            list.insert(tag);
        }
        list
    }
}

impl Extend<MessageTag> for TagList {
    fn extend<I: IntoIterator<Item = MessageTag>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl From<Vec<MessageTag>> for TagList {
    fn from(tags: Vec<MessageTag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagList> for Vec<MessageTag> {
    fn from(list: TagList) -> Self {
        list.tags
    }
}

impl IntoIterator for TagList {
    type Item = MessageTag;
    type IntoIter = std::vec::IntoIter<MessageTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a MessageTag;
    type IntoIter = slice::Iter<'a, MessageTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl_parseable!(MessageTag, TagList);
