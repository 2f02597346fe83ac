use chrono::{DateTime, Utc};

use crate::case_string::CaseString;
use crate::prefix::Prefix;

use super::params::Parameters;
use super::tags::{MessageTag, TagList};

/// An owned IRC message.
///
/// Tags and prefix are three-state: `None` when the line had no `@`/`:`
/// section at all, `Some` of an empty value when the marker was present but
/// empty (`@ CMD`, `: CMD`), and `Some` with content otherwise. The command
/// compares case-insensitively and is upper-cased when parsed.
///
/// # Example
///
/// ```
/// use slirc_grammar::{Message, Prefix};
///
/// // Parse a message
/// let msg = Message::parse(":nick!user@host PRIVMSG #channel :Hello!");
/// assert_eq!(msg.command, "privmsg");
/// assert_eq!(msg.params, ["#channel", "Hello!"]);
///
/// // Construct a message
/// let msg = Message::new("PRIVMSG")
///     .with_prefix(Prefix::new("nick", "user", "host"))
///     .with_params(["#channel", "Hello!"]);
/// assert_eq!(msg, ":nick!user@host PRIVMSG #channel Hello!");
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", from = "String")
)]
pub struct Message {
    /// IRCv3 message tags (e.g., `time`, `msgid`).
    pub tags: Option<TagList>,
    /// Message prefix/source (e.g., `nick!user@host`).
    pub prefix: Option<Prefix>,
    /// The command or three-digit numeric.
    pub command: CaseString<'static>,
    /// The command parameters.
    pub params: Parameters,
}

impl Message {
    /// Create a message with a command and nothing else.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Message {
            command: CaseString::new(command),
            ..Default::default()
        }
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: TagList) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Add an IRCv3 tag to this message.
    ///
    /// A tag with the same key replaces the existing value in place.
    #[must_use]
    pub fn with_tag<K, V>(mut self, key: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let tag = match value {
            Some(v) => MessageTag::with_value(key, v),
            None => MessageTag::new(key),
        };
        self.tags.get_or_insert_with(TagList::new).insert(tag);
        self
    }

    /// Set the prefix/source of this message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Replace the parameters.
    ///
    /// The last item is written in trailing form when it is empty or starts
    /// with `:`, see [`Parameters::new`].
    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = Parameters::new(params);
        self
    }

    /// Get the nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix
            .as_ref()
            .filter(|p| !p.is_empty())
            .map(Prefix::nick)
    }

    /// Get the value of an IRCv3 tag by key.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.value(key)
    }

    /// Decode the IRCv3 `time` tag.
    ///
    /// Returns `None` when the tag is missing or is not an RFC 3339
    /// timestamp.
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.tag_value("time")?;
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .ok()
    }

    /// Whether every component is empty.
    ///
    /// Absent tags and prefix count as empty, as do an empty tag list, a
    /// prefix without a nick, an empty command and no parameters.
    pub fn is_empty(&self) -> bool {
        !self.tags.as_ref().is_some_and(|tags| !tags.is_empty())
            && !self.prefix.as_ref().is_some_and(|prefix| !prefix.is_empty())
            && self.command.is_empty()
            && self.params.is_empty()
    }
}
