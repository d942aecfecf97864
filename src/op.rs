use std::fmt;
use std::hash::{Hash, Hasher};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Failures converting between option representations.
pub enum Error {
    /// The option code has no registered name.
    #[error("unrecognized telnet option: {0}")]
    UnrecognizedOption(u8),
}

/// Result alias for option conversions.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, Debug)]
/// A telnet option code.
///
/// Equality and hashing only look at the numeric code, so a hand-built
/// `Opt::Unknown(24)` is the same option as `Opt::Known(KnownOpt::TERMINAL_TYPE)`.
/// Use [`Opt::from`] on a raw byte to get the normalized form.
pub enum Opt {
    /// A recognized telnet option.
    Known(KnownOpt),
    /// A valid, but unrecognized option.
    Unknown(u8),
}

impl Opt {
    /// The option's wire byte.
    pub const fn code(self) -> u8 {
        match self {
            Opt::Known(opt) => opt as u8,
            Opt::Unknown(code) => code,
        }
    }

    /// The registered option for this code, if there is one.
    pub fn known(self) -> Option<KnownOpt> {
        KnownOpt::try_from(self).ok()
    }
}

impl PartialEq for Opt {
    fn eq(&self, other: &Opt) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Opt {}

impl Hash for Opt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state)
    }
}

impl From<u8> for Opt {
    fn from(other: u8) -> Self {
        match KnownOpt::try_from_primitive(other) {
            Ok(opt) => Opt::Known(opt),
            Err(_) => {
                trace!(code = other, "unrecognized telnet option");
                Opt::Unknown(other)
            }
        }
    }
}

impl From<KnownOpt> for Opt {
    fn from(other: KnownOpt) -> Self {
        Opt::Known(other)
    }
}

impl From<Opt> for u8 {
    fn from(other: Opt) -> u8 {
        other.code()
    }
}

impl TryFrom<Opt> for KnownOpt {
    type Error = Error;

    fn try_from(other: Opt) -> Result<KnownOpt> {
        match other {
            Opt::Known(opt) => Ok(opt),
            Opt::Unknown(code) => {
                KnownOpt::try_from_primitive(code).map_err(|_| Error::UnrecognizedOption(code))
            }
        }
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(opt) => write!(f, "{}({})", opt, self.code()),
            None => write!(f, "{}", self.code()),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[allow(non_camel_case_types)]
/// A registered telnet option.
#[allow(missing_docs)]
pub enum KnownOpt {
    /// RFC 856
    TRANSMIT_BINARY = 0,
    /// RFC 857
    ECHO = 1,
    RECONNECTION = 2,
    /// RFC 858
    SUPPRESS_GA = 3,
    MESSAGE_SIZE = 4,
    /// RFC 859
    STATUS = 5,
    /// RFC 860
    TIMING_MARK = 6,
    RC_TRANS = 7,
    LINE_WIDTH = 8,
    PAGE_SIZE = 9,
    NAOCRD = 10,
    NAOHTS = 11,
    NAOHTD = 12,
    NAOFFD = 13,
    NAOVTS = 14,
    NAOVTD = 15,
    NAOLFD = 16,
    EXTENDED_ASCII = 17,
    LOGOUT = 18,
    BYTE_MACRO = 19,
    DATA_ENTRY_TERMINAL = 20,
    SUPDUP = 21,
    SUPDUP_OUT = 22,
    SEND_LOC = 23,
    /// RFC 1091. Content is `IS <name>` or `SEND`.
    TERMINAL_TYPE = 24,
    EOR = 25,
    TACACS = 26,
    OUT_MARK = 27,
    TERM_LOC_NO = 28,
    TN3270 = 29,
    X3_PAD = 30,
    /// RFC 1073. Content is width and height as big-endian u16s.
    NAWS = 31,
    TERMINAL_SPEED = 32,
    TOGGLE_FLOW_CONTROL = 33,
    LINEMODE = 34,
    X_DISPLAY_LOCATION = 35,
    OLD_ENVIRON = 36,
    AUTHENTICATION = 37,
    ENCRYPTION = 38,
    /// RFC 1572
    NEW_ENVIRONMENT = 39,
    TN3270E = 40,
    XAUTH = 41,
    CHARSET = 42,
    RSP = 43,
    CPC = 44,
    SLE = 45,
    STARTTLS = 46,
    KERMIT = 47,
    SEND_URL = 48,
    FORWARD_X = 49,
    MSDP = 69,
    MSSP = 70,
    MCCPV1 = 85,
    MCCPV2 = 86,
    MSP = 90,
    MXP = 91,
    ZMP = 93,
    LOGON = 138,
    SSPI_LOGON = 139,
    HEARTBEAT = 140,
    ATCP = 200,
    GMCP = 201,
    /// RFC 861, extended options list.
    EXOPL = 255,
}

impl fmt::Display for KnownOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

u8_eq!(KnownOpt, Opt);
