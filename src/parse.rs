//! The shared parse/serialize capability of the grammar atoms.

use std::fmt;

/// A grammar atom that can be read from and rendered back to wire text.
///
/// Parsing is total: every input string yields a value, possibly an empty
/// one. `Display` produces the wire form.
pub trait Parseable: fmt::Display + Sized {
    /// Parse the atom from wire text.
    fn parse(text: &str) -> Self;
}

/// Wire up an atom's inherent `parse` with [`Parseable`], `FromStr`, and
/// equality against raw text in both operand orders.
///
/// Comparing against text parses the text first and then compares the
/// structured values.
macro_rules! impl_parseable {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::parse::Parseable for $ty {
            fn parse(text: &str) -> Self {
                <$ty>::parse(text)
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(<$ty>::parse(s))
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                *self == <$ty>::parse(other)
            }
        }

        impl<'a> PartialEq<&'a str> for $ty {
            fn eq(&self, other: &&'a str) -> bool {
                *self == <$ty>::parse(other)
            }
        }

        impl PartialEq<String> for $ty {
            fn eq(&self, other: &String) -> bool {
                *self == <$ty>::parse(other)
            }
        }

        impl PartialEq<$ty> for str {
            fn eq(&self, other: &$ty) -> bool {
                other == self
            }
        }

        impl<'a> PartialEq<$ty> for &'a str {
            fn eq(&self, other: &$ty) -> bool {
                other == *self
            }
        }

        impl PartialEq<$ty> for String {
            fn eq(&self, other: &$ty) -> bool {
                other == self.as_str()
            }
        }
    )*};
}

pub(crate) use impl_parseable;
