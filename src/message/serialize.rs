use std::fmt::{self, Display, Formatter};

use super::types::Message;

impl Display for Message {
    /// Renders `@tags :prefix COMMAND params`, skipping absent or empty
    /// pieces and joining the rest with single spaces. No CR-LF is added.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut sep = |f: &mut Formatter<'_>| -> fmt::Result {
            if !std::mem::take(&mut first) {
                f.write_str(" ")?;
            }
            Ok(())
        };

        if let Some(ref tags) = self.tags {
            sep(f)?;
            write!(f, "@{}", tags)?;
        }

        if let Some(ref prefix) = self.prefix {
            sep(f)?;
            write!(f, ":{}", prefix)?;
        }

        if !self.command.is_empty() {
            sep(f)?;
            write!(f, "{}", self.command)?;
        }

        if !self.params.is_empty() {
            sep(f)?;
            write!(f, "{}", self.params)?;
        }

        Ok(())
    }
}

impl From<Message> for String {
    fn from(msg: Message) -> String {
        msg.to_string()
    }
}
