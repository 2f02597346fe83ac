//! IRC command descriptors.
//!
//! # Reference
//! - RFC 2812 Section 3: Message Details

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{GrammarError, Result};
use crate::message::Message;

/// One argument in a command signature: `<name>` when required, `[name]`
/// when optional.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommandArgument {
    name: String,
    required: bool,
}

impl CommandArgument {
    /// A required argument.
    pub fn required(name: impl Into<String>) -> Self {
        CommandArgument {
            name: name.into(),
            required: true,
        }
    }

    /// An optional argument.
    pub fn optional(name: impl Into<String>) -> Self {
        CommandArgument {
            name: name.into(),
            required: false,
        }
    }

    /// Parse `<name>` or `[name]`.
    ///
    /// Any other shape is a [`GrammarError::InvalidArgument`].
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(name) = s.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
            Ok(CommandArgument::required(name))
        } else if let Some(name) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            Ok(CommandArgument::optional(name))
        } else {
            Err(GrammarError::InvalidArgument(s.to_owned()))
        }
    }

    /// The argument name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the argument must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl fmt::Display for CommandArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(f, "<{}>", self.name)
        } else {
            write!(f, "[{}]", self.name)
        }
    }
}

/// A command name with its argument signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    name: &'static str,
    args: Vec<CommandArgument>,
    min_args: usize,
    max_args: Option<usize>,
}

impl CommandSpec {
    /// Parse a signature such as `"<channel> [key]"`.
    ///
    /// The minimum is the number of required arguments and the maximum the
    /// total number of arguments.
    pub fn new(name: &'static str, signature: &str) -> Result<Self> {
        let args = signature
            .split_whitespace()
            .map(CommandArgument::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(CommandSpec::from_args(name, args))
    }

    /// Build from already parsed arguments.
    pub fn from_args(name: &'static str, args: Vec<CommandArgument>) -> Self {
        let min_args = args.iter().filter(|a| a.required).count();
        let max_args = Some(args.len());
        CommandSpec {
            name,
            args,
            min_args,
            max_args,
        }
    }

    /// Lift the upper bound, for commands with variadic trailing arguments.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_args = None;
        self
    }

    /// The command name, upper case.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The argument descriptors in order.
    pub fn args(&self) -> &[CommandArgument] {
        &self.args
    }

    /// Minimum parameter count.
    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Maximum parameter count, `None` when unbounded.
    pub fn max_args(&self) -> Option<usize> {
        self.max_args
    }

    /// Check a message's parameter count against this signature.
    ///
    /// Only the count is checked; the message's command is not compared.
    pub fn check(&self, message: &Message) -> Result<()> {
        let got = message.params.len();
        if got < self.min_args {
            return Err(GrammarError::NotEnoughArguments {
                command: self.name,
                expected: self.min_args,
                got,
            });
        }
        match self.max_args {
            Some(max) if got > max => Err(GrammarError::TooManyArguments {
                command: self.name,
                expected: max,
                got,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

fn client_table() -> &'static HashMap<&'static str, CommandSpec> {
    static TABLE: OnceLock<HashMap<&'static str, CommandSpec>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let target_content = || {
            vec![
                CommandArgument::required("target"),
                CommandArgument::required("content"),
            ]
        };
        [
            CommandSpec::from_args("PRIVMSG", target_content()),
            CommandSpec::from_args("NOTICE", target_content()),
            CommandSpec::from_args(
                "JOIN",
                vec![
                    CommandArgument::required("channel"),
                    CommandArgument::optional("key"),
                ],
            ),
        ]
        .into_iter()
        .map(|spec| (spec.name, spec))
        .collect()
    })
}

/// Look up a client-to-server command, ignoring ASCII case.
///
/// The bounds of each entry are derived from its argument descriptors
/// rather than left open: PRIVMSG and NOTICE take exactly two parameters,
/// JOIN one or two. Use [`CommandSpec::unbounded`] on a copy to accept
/// extra parameters.
pub fn client_command(name: &str) -> Option<&'static CommandSpec> {
    client_table().get(name.to_ascii_uppercase().as_str())
}

/// All known client-to-server commands, in no particular order.
pub fn client_commands() -> impl Iterator<Item = &'static CommandSpec> {
    client_table().values()
}
