use std::fmt;

use super::types::Prefix;

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.nick(), self.user(), self.host()) {
            (nick, "", "") => write!(f, "{}", nick),
            (nick, user, "") => write!(f, "{}!{}", nick, user),
            (nick, "", host) => write!(f, "{}@{}", nick, host),
            (nick, user, host) => write!(f, "{}!{}@{}", nick, user, host),
        }
    }
}
