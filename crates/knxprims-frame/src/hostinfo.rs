//! Host protocol address information (HPAI).
//!
//! Every connection-lifecycle frame refers to at least one endpoint through
//! this 8-byte block:
//!
//! ```text
//! ┌──────────┬──────────┬────────────────┬──────────────┐
//! │ Len (1B) │ Proto    │ IPv4 address   │ Port (2B BE) │
//! │ 0x08     │ (1B)     │ (4B)           │              │
//! └──────────┴──────────┴────────────────┴──────────────┘
//! ```

use std::fmt;
use std::io::Write;
use std::net::{Ipv4Addr, SocketAddrV4};

use tracing::debug;

use crate::error::{FrameError, Result};
use crate::reader::{FieldReader, Unpack};
use crate::writer::{FieldWriter, Pack};

/// Transport protocol code of a [`HostInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostProtocol(pub u8);

impl HostProtocol {
    /// UDP over IPv4.
    pub const UDP4: HostProtocol = HostProtocol(0x01);
    /// TCP over IPv4.
    pub const TCP4: HostProtocol = HostProtocol(0x02);

    /// Human-readable description of the protocol code.
    pub fn describe(self) -> String {
        match self {
            Self::UDP4 => "UDP over IPv4".to_string(),
            Self::TCP4 => "TCP over IPv4".to_string(),
            Self(code) => format!("Unknown host protocol {code:#04X}"),
        }
    }
}

impl fmt::Display for HostProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<u8> for HostProtocol {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<HostProtocol> for u8 {
    fn from(protocol: HostProtocol) -> Self {
        protocol.0
    }
}

/// Endpoint descriptor: protocol, IPv4 address and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostInfo {
    pub protocol: HostProtocol,
    pub address: Ipv4Addr,
    pub port: u16,
}

impl HostInfo {
    /// Encoded size of the structure, including its own length byte.
    pub const SIZE: usize = 8;

    /// UDP endpoint `0.0.0.0:0`, asking the peer to reply to the source address
    /// of the datagram (NAT mode).
    pub const UNSPECIFIED: HostInfo = HostInfo {
        protocol: HostProtocol::UDP4,
        address: Ipv4Addr::UNSPECIFIED,
        port: 0,
    };

    /// Create a UDP endpoint descriptor.
    pub fn udp(addr: SocketAddrV4) -> Self {
        Self {
            protocol: HostProtocol::UDP4,
            address: *addr.ip(),
            port: addr.port(),
        }
    }

    /// Create a TCP endpoint descriptor.
    pub fn tcp(addr: SocketAddrV4) -> Self {
        Self {
            protocol: HostProtocol::TCP4,
            address: *addr.ip(),
            port: addr.port(),
        }
    }

    /// The endpoint as a socket address.
    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.address, self.port)
    }

    /// Returns true for the `0.0.0.0:0` route-back descriptor.
    pub fn is_unspecified(&self) -> bool {
        self.address.is_unspecified() && self.port == 0
    }
}

impl Default for HostInfo {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proto = match self.protocol {
            HostProtocol::UDP4 => "udp",
            HostProtocol::TCP4 => "tcp",
            _ => "unknown",
        };
        write!(f, "{proto}://{}:{}", self.address, self.port)
    }
}

impl Unpack for HostInfo {
    fn unpack_from(reader: &mut FieldReader<'_>) -> Result<Self> {
        let length = reader.read_u8()?;
        let protocol = HostProtocol(reader.read_u8()?);
        let address = Ipv4Addr::from(reader.read_array::<4>()?);
        let port = reader.read_u16()?;

        if usize::from(length) != Self::SIZE {
            debug!(length, "rejecting host info with bad structure length");
            return Err(FrameError::InvalidHostInfoLength(length));
        }

        Ok(Self {
            protocol,
            address,
            port,
        })
    }
}

impl Pack for HostInfo {
    fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u8(Self::SIZE as u8)?;
        writer.write_u8(self.protocol.0)?;
        writer.write_bytes(&self.address.octets())?;
        writer.write_u16(self.port)
    }
}
