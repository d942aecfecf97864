use std::ascii;
use std::fmt;

/// Renders a byte slice as a quoted string, escaping anything that isn't
/// printable ASCII.
pub(crate) struct Printable<'a>(pub(crate) &'a [u8]);

impl fmt::Display for Printable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for byte in self.0 {
            fmt::Display::fmt(&ascii::escape_default(*byte), f)?;
        }
        f.write_str("\"")
    }
}

impl fmt::Debug for Printable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
