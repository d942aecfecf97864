use std::fmt;
use std::hash::{Hash, Hasher};

use crate::op::Opt;
use crate::util::Printable;

/// A single telnet subnegotiation: the option it concerns and the content
/// found between `IAC SB <option>` and `IAC SE`.
///
/// The content is borrowed from whoever decoded the frame and is expected to
/// already be stripped of `IAC` escaping. Nothing is validated; interpreting
/// the content is left to the handler for `option`.
///
/// Two subnegotiations are equal when their option codes match and their
/// content is byte-for-byte identical, regardless of where the bytes live.
/// There's intentionally no ordering.
#[derive(Copy, Clone)]
pub struct Subnegotiation<'a> {
    option: Opt,
    content: &'a [u8],
}

impl<'a> Subnegotiation<'a> {
    /// Pair an option with its content.
    pub fn new(option: impl Into<Opt>, content: &'a [u8]) -> Self {
        Self::from_parts(option.into(), content)
    }

    /// Same as [`Subnegotiation::new`], usable in `const` contexts.
    pub const fn from_parts(option: Opt, content: &'a [u8]) -> Self {
        Subnegotiation { option, content }
    }

    /// The option this subnegotiation is for.
    pub const fn option(&self) -> Opt {
        self.option
    }

    /// The subnegotiation's content, which may be empty.
    pub const fn content(&self) -> &'a [u8] {
        self.content
    }
}

impl PartialEq for Subnegotiation<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.option == other.option && self.content == other.content
    }
}

impl Eq for Subnegotiation<'_> {}

impl Hash for Subnegotiation<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.option.hash(state);
        self.content.hash(state);
    }
}

impl fmt::Display for Subnegotiation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SB {} {}", self.option, Printable(self.content))
    }
}

impl fmt::Debug for Subnegotiation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subnegotiation")
            .field("option", &self.option)
            .field("content", &Printable(self.content))
            .finish()
    }
}
