use std::io::Write;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::Result;
use crate::reader::FieldReader;
use crate::service::{service_name, ServiceId};
use crate::writer::FieldWriter;

/// A connection-lifecycle frame body with a fixed wire layout.
///
/// Implementors describe their layout once in [`Message::unpack_fields`] and
/// [`Message::pack_fields`]; the provided methods add byte accounting and
/// buffer helpers on top.
pub trait Message: Sized {
    /// Service identifier the outer envelope carries for this body.
    const SERVICE: ServiceId;

    /// Exact encoded length in bytes.
    const WIRE_SIZE: usize;

    /// Read all fields in wire order.
    fn unpack_fields(reader: &mut FieldReader<'_>) -> Result<Self>;

    /// Write all fields in wire order.
    fn pack_fields<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()>;

    /// Service identifier of this value.
    fn service(&self) -> ServiceId {
        Self::SERVICE
    }

    /// Decode a body from the start of `data`.
    ///
    /// Returns the message and the number of bytes consumed. Bytes after the
    /// body are left untouched so the caller can detect trailing data.
    fn unpack(data: &[u8]) -> Result<(Self, usize)> {
        let mut reader = FieldReader::new(data);
        let message = Self::unpack_fields(&mut reader)?;
        let consumed = reader.position();
        trace!(
            service = service_name(Self::SERVICE),
            consumed,
            trailing = reader.remaining(),
            "unpacked frame body"
        );
        Ok((message, consumed))
    }

    /// Serialize into `sink`, returning the number of bytes written.
    fn write_to<W: Write>(&self, sink: W) -> Result<usize> {
        let mut writer = FieldWriter::new(sink);
        self.pack_fields(&mut writer)?;
        writer.flush()?;
        trace!(
            service = service_name(Self::SERVICE),
            written = writer.written(),
            "wrote frame body"
        );
        Ok(writer.written())
    }

    /// Append the encoded body to `dst`.
    fn encode(&self, dst: &mut BytesMut) -> Result<usize> {
        dst.reserve(Self::WIRE_SIZE);
        self.write_to(BufMut::writer(&mut *dst))
    }

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(Self::WIRE_SIZE);
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }
}
