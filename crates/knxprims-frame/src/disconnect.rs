//! Disconnect request and response.

use std::io::Write;

use crate::error::Result;
use crate::hostinfo::HostInfo;
use crate::message::Message;
use crate::reader::FieldReader;
use crate::service::{ServiceId, DISC_REQ, DISC_RES};
use crate::writer::FieldWriter;

/// Asks the peer to tear down a tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscReq {
    pub channel: u8,
    pub status: u8,
    pub control: HostInfo,
}

impl Message for DiscReq {
    const SERVICE: ServiceId = DISC_REQ;
    const WIRE_SIZE: usize = 2 + HostInfo::SIZE;

    fn unpack_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            channel: reader.read_u8()?,
            status: reader.read_u8()?,
            control: reader.read()?,
        })
    }

    fn pack_fields<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u8(self.channel)?;
        writer.write_u8(self.status)?;
        writer.write(&self.control)
    }
}

/// Acknowledges a [`DiscReq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscRes {
    pub channel: u8,
    pub status: u8,
}

impl Message for DiscRes {
    const SERVICE: ServiceId = DISC_RES;
    const WIRE_SIZE: usize = 2;

    fn unpack_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            channel: reader.read_u8()?,
            status: reader.read_u8()?,
        })
    }

    fn pack_fields<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u8(self.channel)?;
        writer.write_u8(self.status)
    }
}
