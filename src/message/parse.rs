//! Message parsing.
//!
//! The line is split into spans by the nom scanner, then each span is
//! handed to its atom's parser. Parsing never fails: malformed input gives
//! a best-effort message, possibly with an empty command.

use std::borrow::Cow;

use crate::case_string::CaseString;
use crate::parse::impl_parseable;
use crate::prefix::Prefix;

use super::nom_parser::LineSpans;
use super::params::Parameters;
use super::tags::TagList;
use super::types::Message;

impl Message {
    /// Parse one line, without its CR-LF terminator.
    ///
    /// A leading `@` section becomes the tags and a following `:` section
    /// the prefix; either is `None` when its marker is missing. The next
    /// token is the command, upper-cased. Everything after it goes to
    /// [`Parameters::parse`].
    pub fn parse(line: &str) -> Message {
        let spans = LineSpans::scan(line);
        Message {
            tags: spans.tags.map(TagList::parse),
            prefix: spans.prefix.map(Prefix::parse_body),
            command: CaseString::new(spans.command.to_uppercase()),
            params: Parameters::parse(spans.params),
        }
    }

    /// Parse a line from raw bytes.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD before parsing.
    pub fn parse_bytes(line: &[u8]) -> Message {
        match String::from_utf8_lossy(line) {
            Cow::Borrowed(text) => Message::parse(text),
            Cow::Owned(text) => {
                tracing::trace!(len = line.len(), "replaced invalid UTF-8 in line");
                Message::parse(&text)
            }
        }
    }
}

impl From<&str> for Message {
    fn from(line: &str) -> Self {
        Message::parse(line)
    }
}

impl From<String> for Message {
    fn from(line: String) -> Self {
        Message::parse(&line)
    }
}

impl From<&[u8]> for Message {
    fn from(line: &[u8]) -> Self {
        Message::parse_bytes(line)
    }
}

impl PartialEq<[u8]> for Message {
    fn eq(&self, other: &[u8]) -> bool {
        *self == Message::parse_bytes(other)
    }
}

impl<'a> PartialEq<&'a [u8]> for Message {
    fn eq(&self, other: &&'a [u8]) -> bool {
        *self == Message::parse_bytes(other)
    }
}

impl PartialEq<Vec<u8>> for Message {
    fn eq(&self, other: &Vec<u8>) -> bool {
        *self == Message::parse_bytes(other)
    }
}

impl_parseable!(Message);
