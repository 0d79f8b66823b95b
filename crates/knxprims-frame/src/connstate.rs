//! Connection state request and response (tunnel heartbeat).

use std::io::Write;

use crate::codes::ConnState;
use crate::error::Result;
use crate::hostinfo::HostInfo;
use crate::message::Message;
use crate::reader::FieldReader;
use crate::service::{ServiceId, CONN_STATE_REQ, CONN_STATE_RES};
use crate::writer::FieldWriter;

/// Asks the gateway whether a tunnel is still alive.
///
/// `status` is a free-form byte echoed by the session layer, not a [`ConnState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnStateReq {
    pub channel: u8,
    pub status: u8,
    pub control: HostInfo,
}

impl Message for ConnStateReq {
    const SERVICE: ServiceId = CONN_STATE_REQ;
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

/// Gateway's answer to a [`ConnStateReq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnStateRes {
    pub channel: u8,
    pub status: ConnState,
}

impl Message for ConnStateRes {
    const SERVICE: ServiceId = CONN_STATE_RES;
    const WIRE_SIZE: usize = 2;

    fn unpack_fields(reader: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            channel: reader.read_u8()?,
            status: reader.read()?,
        })
    }

    fn pack_fields<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u8(self.channel)?;
        writer.write(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;

    #[test]
    fn conn_state_req_round_trip() {
        let wire = [0x07, 0xAB, 0x08, 0x02, 10, 0, 0, 1, 0x0E, 0x57];
        let (req, consumed) = ConnStateReq::unpack(&wire).unwrap();

        assert_eq!(consumed, ConnStateReq::WIRE_SIZE);
        assert_eq!(req.channel, 0x07);
        assert_eq!(req.status, 0xAB);
        assert_eq!(req.control.to_string(), "tcp://10.0.0.1:3671");
        assert_eq!(req.to_bytes().unwrap().as_ref(), &wire);
    }

    #[test]
    fn conn_state_req_one_byte_short_is_truncated() {
        let wire = [0x07, 0x00, 0x08, 0x01, 0, 0, 0, 0, 0];
        assert!(matches!(
            ConnStateReq::unpack(&wire),
            Err(FrameError::Truncated { .. })
        ));
    }

    #[test]
    fn conn_state_res_knx_error() {
        let (res, consumed) = ConnStateRes::unpack(&[0x01, 0x27]).unwrap();

        assert_eq!(consumed, 2);
        assert_eq!(res.channel, 1);
        assert_eq!(res.status, ConnState::KNX_ERROR);
        assert_eq!(res.status.describe(), "Gateway encountered a KNX error");
        assert!(!res.status.is_normal());
    }

    #[test]
    fn conn_state_res_round_trip() {
        let res = ConnStateRes {
            channel: 0x42,
            status: ConnState(0x55),
        };
        let mut wire = Vec::new();
        assert_eq!(res.write_to(&mut wire).unwrap(), 2);
        assert_eq!(wire, vec![0x42, 0x55]);
        assert_eq!(ConnStateRes::unpack(&wire).unwrap(), (res, 2));
    }

    #[test]
    fn conn_state_res_one_byte_short_is_truncated() {
        assert!(matches!(
            ConnStateRes::unpack(&[0x01]),
            Err(FrameError::Truncated {
                needed: 1,
                remaining: 0
            })
        ));
    }
}
