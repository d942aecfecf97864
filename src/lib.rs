#![warn(missing_docs)]

//! Telnet subnegotiation values.
//!
//! A [`Subnegotiation`] is what's left of an `IAC SB <option> ... IAC SE`
//! frame once the framing and `IAC` escaping have been stripped: an option
//! code and a borrowed view of the content. Option handlers take these apart;
//! nothing here interprets the content.
//!
//! With the `bytes` feature (on by default), [`OwnedSubnegotiation`] holds
//! onto the content past the lifetime of the decode buffer.

#[macro_use]
mod macros;

mod op;
mod util;
#[doc(inline)]
pub use op::*;
mod subnegotiation;
#[doc(inline)]
pub use subnegotiation::Subnegotiation;

#[cfg(feature = "bytes")]
mod owned;
#[cfg(feature = "bytes")]
#[doc(inline)]
pub use owned::OwnedSubnegotiation;
