//! One-byte codes carried by the connection-lifecycle frames.
//!
//! Each code is a thin wrapper over the raw byte. Decoding never rejects a
//! value: unrecognised codes survive a decode/encode cycle unchanged and only
//! show up as "Unknown ..." when described.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::reader::{FieldReader, Unpack};
use crate::writer::{FieldWriter, Pack};

/// Layer on which a tunnelling connection operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TunnelLayer(pub u8);

impl TunnelLayer {
    /// Data link layer tunnel.
    pub const DATA: TunnelLayer = TunnelLayer(0x02);
    /// Raw tunnel.
    pub const RAW: TunnelLayer = TunnelLayer(0x04);
    /// Bus monitor tunnel.
    pub const BUSMON: TunnelLayer = TunnelLayer(0x80);

    /// Human-readable description of the layer code.
    pub fn describe(self) -> String {
        match self {
            Self::DATA => "Data link layer tunnel".to_string(),
            Self::RAW => "Raw tunnel".to_string(),
            Self::BUSMON => "Bus monitor tunnel".to_string(),
            Self(code) => format!("Unknown tunnel layer {code:#04X}"),
        }
    }
}

/// Status code of a connection response.
///
/// A non-ok status is also an error value, so a caller can bubble it up with
/// `status.into_result()?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnResStatus(pub u8);

impl ConnResStatus {
    /// Connection established.
    pub const OK: ConnResStatus = ConnResStatus(0x00);
    /// Requested connection type is not supported.
    pub const UNSUPPORTED_TYPE: ConnResStatus = ConnResStatus(0x22);
    /// One of the requested options is not supported.
    pub const UNSUPPORTED_OPTION: ConnResStatus = ConnResStatus(0x23);
    /// No free data channel.
    pub const BUSY: ConnResStatus = ConnResStatus(0x24);

    /// Human-readable description of the status code, also used as the
    /// error message.
    pub fn describe(self) -> String {
        match self {
            Self::OK => "Connection established".to_string(),
            Self::UNSUPPORTED_TYPE => "Requested connection type is unsupported".to_string(),
            Self::UNSUPPORTED_OPTION => "One of the requested options is unsupported".to_string(),
            Self::BUSY => "No data channel is available".to_string(),
            Self(code) => format!("Unknown status code {code:#04X}"),
        }
    }

    /// Returns true if the gateway accepted the connection.
    pub fn is_ok(self) -> bool {
        self == Self::OK
    }

    /// `Ok(())` for [`ConnResStatus::OK`], the status itself as the error otherwise.
    pub fn into_result(self) -> std::result::Result<(), ConnResStatus> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::error::Error for ConnResStatus {}

/// State of a tunnelling connection, as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnState(pub u8);

impl ConnState {
    /// Connection is intact.
    pub const NORMAL: ConnState = ConnState(0x00);
    /// Connection is inactive.
    pub const INACTIVE: ConnState = ConnState(0x21);
    /// Gateway saw a data error on the connection.
    pub const DATA_ERROR: ConnState = ConnState(0x26);
    /// Gateway saw an error on the KNX bus.
    pub const KNX_ERROR: ConnState = ConnState(0x27);

    /// Human-readable description of the connection state.
    pub fn describe(self) -> String {
        match self {
            Self::NORMAL => "Connection is intact".to_string(),
            Self::INACTIVE => "Connection is inactive".to_string(),
            Self::DATA_ERROR => "Gateway encountered a data error".to_string(),
            Self::KNX_ERROR => "Gateway encountered a KNX error".to_string(),
            Self(code) => format!("Unknown connection state {code:#04X}"),
        }
    }

    /// Returns true if the gateway reports the connection as intact.
    pub fn is_normal(self) -> bool {
        self == Self::NORMAL
    }
}

// Display, byte conversions and field codec are identical for every code type.
macro_rules! byte_code {
    ($($ty:ident),+) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.describe())
            }
        }

        impl From<u8> for $ty {
            fn from(code: u8) -> Self {
                Self(code)
            }
        }

        impl From<$ty> for u8 {
            fn from(code: $ty) -> Self {
                code.0
            }
        }

        impl Unpack for $ty {
            fn unpack_from(reader: &mut FieldReader<'_>) -> Result<Self> {
                reader.read_u8().map(Self)
            }
        }

        impl Pack for $ty {
            fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
                writer.write_u8(self.0)
            }
        }
    )+};
}

byte_code!(TunnelLayer, ConnResStatus, ConnState);
