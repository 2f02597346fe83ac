//! IRC message prefix types.
//!
//! The prefix identifies the origin of a message: a server name or a user's
//! `nick!user@host`. Both shapes land in the same three fields; a server
//! name is simply a nick with no user or host.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use crate::parse::impl_parseable;

/// IRC message prefix: `nick[!user][@host]`.
///
/// All parts default to the empty string. A prefix whose nick is empty is
/// considered empty, see [`is_empty`](Self::is_empty).
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    nick: String,
    user: String,
    host: String,
}

impl Prefix {
    /// Create a prefix from nick, user, and host components.
    ///
    /// # Example
    ///
    /// ```
    /// use slirc_grammar::Prefix;
    ///
    /// let prefix = Prefix::new("nick", "user", "host.example.com");
    /// assert_eq!(prefix.nick(), "nick");
    /// assert_eq!(prefix.user(), "user");
    /// assert_eq!(prefix.host(), "host.example.com");
    /// assert_eq!(prefix, "nick!user@host.example.com");
    /// ```
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Prefix {
            nick: nick.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    /// Parse a prefix string.
    ///
    /// One leading `:` is ignored. The nick runs up to the first `!` or `@`;
    /// the user runs from `!` up to the next `@`; the host is everything
    /// after that `@`. This never fails and does not validate the parts.
    pub fn parse(s: &str) -> Self {
        Prefix::parse_body(s.strip_prefix(':').unwrap_or(s))
    }

    /// Parse a prefix whose `:` marker has already been removed.
    ///
    /// Every character belongs to the prefix, so a nick that itself starts
    /// with `:` survives a round trip through a message line.
    pub(crate) fn parse_body(s: &str) -> Self {
        #[derive(Copy, Clone, Eq, PartialEq)]
        enum Part {
            Nick,
            User,
            Host,
        }

        let mut prefix = Prefix::default();
        let mut part = Part::Nick;

        for c in s.chars() {
            match c {
                '!' if part == Part::Nick => part = Part::User,
                '@' if part != Part::Host => part = Part::Host,
                _ => match part {
                    Part::Nick => &mut prefix.nick,
                    Part::User => &mut prefix.user,
                    Part::Host => &mut prefix.host,
                }
                .push(c),
            }
        }

        prefix
    }

    /// The nickname, or the server name for server-sourced messages.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// The username.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Alias for [`user`](Self::user).
    pub fn ident(&self) -> &str {
        &self.user
    }

    /// The hostname.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The full `nick!user@host` mask, omitting empty parts.
    pub fn mask(&self) -> String {
        self.to_string()
    }

    /// Whether the nick is empty.
    pub fn is_empty(&self) -> bool {
        self.nick.is_empty()
    }

    /// Split into `(nick, user, host)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.nick, self.user, self.host)
    }
}

impl<N, U, H> From<(N, U, H)> for Prefix
where
    N: Into<String>,
    U: Into<String>,
    H: Into<String>,
{
    fn from((nick, user, host): (N, U, H)) -> Self {
        Prefix::new(nick, user, host)
    }
}

impl_parseable!(Prefix);
