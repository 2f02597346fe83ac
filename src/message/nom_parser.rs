//! Nom-based line scanner.
//!
//! Splits a raw line into its tag, prefix, command and parameter spans
//! without allocating. The scan is a fixed left-to-right pass with no
//! backtracking: each section runs up to the next single space, and the
//! parameter span is everything left over.

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::opt,
    error::{context, VerboseError},
    sequence::{preceded, terminated},
    IResult,
};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

fn is_space(c: char) -> bool {
    c == ' '
}

/// Parse IRCv3 message tags (the part after `@` and before the first space).
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRCv3 message tags",
        terminated(preceded(char('@'), take_till(is_space)), opt(char(' '))),
    )(input)
}

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        terminated(preceded(char(':'), take_till(is_space)), opt(char(' '))),
    )(input)
}

/// Parse the command token. It may be empty.
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRC command",
        terminated(take_till(is_space), opt(char(' '))),
    )(input)
}

/// Scan a line into its spans.
///
/// ```text
/// [@tags SP] [:prefix SP] command [SP params]
/// ```
pub(crate) fn scan_line(input: &str) -> ParseResult<&str, LineSpans<'_>> {
    let (input, tags) = opt(parse_tags)(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (params, command) = parse_command(input)?;

    Ok((
        "",
        LineSpans {
            tags,
            prefix,
            command,
            params,
        },
    ))
}

/// The raw sections of one line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineSpans<'a> {
    /// Tag section without the leading `@`, if the line had one.
    pub tags: Option<&'a str>,
    /// Prefix section without the leading `:`, if the line had one.
    pub prefix: Option<&'a str>,
    /// The command token as written.
    pub command: &'a str,
    /// Everything after the command and its separating space.
    pub params: &'a str,
}

impl<'a> LineSpans<'a> {
    /// Split a line into spans.
    ///
    /// The combinators above cannot fail on `&str` input, but should that
    /// ever change the whole line is treated as the command rather than
    /// dropped.
    pub fn scan(input: &'a str) -> Self {
        match scan_line(input) {
            Ok((_, spans)) => spans,
            Err(err) => {
                tracing::trace!(line = input, error = ?err, "line scan failed, keeping raw line");
                LineSpans {
                    tags: None,
                    prefix: None,
                    command: input,
                    params: "",
                }
            }
        }
    }
}
