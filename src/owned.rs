use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;
use tracing::trace;

use crate::op::Opt;
use crate::subnegotiation::Subnegotiation;

/// A subnegotiation that owns its content.
///
/// Handy when a subnegotiation has to be kept around after the buffer it was
/// decoded from is reused. Getting one from a borrowed [`Subnegotiation`]
/// copies the content; building one from [`Bytes`] or a `Vec<u8>` does not.
#[derive(Clone)]
pub struct OwnedSubnegotiation {
    option: Opt,
    content: Bytes,
}

impl OwnedSubnegotiation {
    /// Pair an option with its content.
    pub fn new(option: impl Into<Opt>, content: impl Into<Bytes>) -> Self {
        OwnedSubnegotiation {
            option: option.into(),
            content: content.into(),
        }
    }

    /// The option this subnegotiation is for.
    pub fn option(&self) -> Opt {
        self.option
    }

    /// The subnegotiation's content.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Borrow as a [`Subnegotiation`] without copying.
    pub fn as_subnegotiation(&self) -> Subnegotiation<'_> {
        Subnegotiation::from_parts(self.option, &self.content)
    }

    /// Take the option and content apart.
    pub fn into_parts(self) -> (Opt, Bytes) {
        (self.option, self.content)
    }
}

impl Subnegotiation<'_> {
    /// Copy the content out into an [`OwnedSubnegotiation`].
    pub fn to_owned_content(&self) -> OwnedSubnegotiation {
        trace!(
            option = %self.option(),
            len = self.content().len(),
            "copying subnegotiation content"
        );
        OwnedSubnegotiation {
            option: self.option(),
            content: Bytes::copy_from_slice(self.content()),
        }
    }
}

impl From<Subnegotiation<'_>> for OwnedSubnegotiation {
    fn from(other: Subnegotiation<'_>) -> Self {
        other.to_owned_content()
    }
}

impl<'a> From<&'a OwnedSubnegotiation> for Subnegotiation<'a> {
    fn from(other: &'a OwnedSubnegotiation) -> Self {
        other.as_subnegotiation()
    }
}

impl PartialEq for OwnedSubnegotiation {
    fn eq(&self, other: &Self) -> bool {
        self.as_subnegotiation() == other.as_subnegotiation()
    }
}

impl Eq for OwnedSubnegotiation {}

impl PartialEq<Subnegotiation<'_>> for OwnedSubnegotiation {
    fn eq(&self, other: &Subnegotiation<'_>) -> bool {
        self.as_subnegotiation() == *other
    }
}

impl PartialEq<OwnedSubnegotiation> for Subnegotiation<'_> {
    fn eq(&self, other: &OwnedSubnegotiation) -> bool {
        *self == other.as_subnegotiation()
    }
}

impl Hash for OwnedSubnegotiation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_subnegotiation().hash(state)
    }
}

impl fmt::Display for OwnedSubnegotiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_subnegotiation(), f)
    }
}

impl fmt::Debug for OwnedSubnegotiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_subnegotiation(), f)
    }
}
