//! Connection request and response.

use std::io::Write;

use tracing::debug;

use crate::codes::{ConnResStatus, TunnelLayer};
use crate::error::{FrameError, Result};
use crate::hostinfo::HostInfo;
use crate::message::Message;
use crate::reader::FieldReader;
use crate::service::{ServiceId, CONN_REQ, CONN_RES};
use crate::writer::FieldWriter;

/// Length byte of the connection request info block.
pub const CRI_LENGTH: u8 = 4;

/// Connection type byte for a tunnelling connection.
pub const TUNNEL_CONNECTION: u8 = 4;

/// Requests a tunnelling connection from a gateway.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────┬──────┬──────┬───────┬──────────┐
/// │ Control (8B) │ Tunnel (8B)  │ 0x04 │ 0x04 │ Layer │ Reserved │
/// │ HostInfo     │ HostInfo     │ len  │ type │       │ 0x00     │
/// └──────────────┴──────────────┴──────┴──────┴───────┴──────────┘
/// ```
///
/// The reserved byte is discarded on decode and always written as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnReq {
    pub control: HostInfo,
    pub tunnel: HostInfo,
    pub layer: TunnelLayer,
}

impl ConnReq {
    pub fn new(control: HostInfo, tunnel: HostInfo, layer: TunnelLayer) -> Self {
        Self {
            control,
            tunnel,
            layer,
        }
    }

    /// Data link layer tunnel request using one endpoint for control and data.
    pub fn tunnel(endpoint: HostInfo) -> Self {
        Self::new(endpoint, endpoint, TunnelLayer::DATA)
    }
}

impl Message for ConnReq {
    const SERVICE: ServiceId = CONN_REQ;
    const WIRE_SIZE: usize = 2 * HostInfo::SIZE + 4;

    fn unpack_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        let control = reader.read()?;
        let tunnel = reader.read()?;
        let length = reader.read_u8()?;
        let conn_type = reader.read_u8()?;
        let layer = reader.read()?;
        let _reserved = reader.read_u8()?;

        if length != CRI_LENGTH {
            debug!(length, "rejecting connection request info length");
            return Err(FrameError::InvalidConnReqLength(length));
        }

        if conn_type != TUNNEL_CONNECTION {
            debug!(conn_type, "rejecting non-tunnel connection type");
            return Err(FrameError::InvalidConnectionType(conn_type));
        }

        Ok(Self {
            control,
            tunnel,
            layer,
        })
    }

    fn pack_fields<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write(&self.control)?;
        writer.write(&self.tunnel)?;
        writer.write(&[CRI_LENGTH, TUNNEL_CONNECTION, self.layer.0, 0x00])
    }
}

/// Gateway's answer to a [`ConnReq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnRes {
    pub channel: u8,
    pub status: ConnResStatus,
    pub control: HostInfo,
}

impl ConnRes {
    /// The assigned channel, or the status as an error if the gateway refused.
    pub fn accepted_channel(&self) -> std::result::Result<u8, ConnResStatus> {
        self.status.into_result().map(|()| self.channel)
    }
}

impl Message for ConnRes {
    const SERVICE: ServiceId = CONN_RES;
    const WIRE_SIZE: usize = 2 + HostInfo::SIZE;

    fn unpack_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            channel: reader.read_u8()?,
            status: reader.read()?,
            control: reader.read()?,
        })
    }

    fn pack_fields<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u8(self.channel)?;
        writer.write(&self.status)?;
        writer.write(&self.control)
    }
}
