use std::io::{ErrorKind, Write};

use crate::error::{FrameError, Result};

/// A fixed-size wire structure that can be written to a [`FieldWriter`].
pub trait Pack {
    /// Write this value at the writer's current position.
    fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()>;
}

/// Sequential field writer over any `Write` sink.
///
/// Counts every byte the sink accepts. When the sink fails, the error carries
/// the count written so far (partial-write semantics).
pub struct FieldWriter<W> {
    inner: W,
    written: usize,
}

impl<W: Write> FieldWriter<W> {
    /// Wrap a sink.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes accepted by the sink so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Write a big-endian (network order) `u16`.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Write a raw byte slice in full.
    pub fn write_bytes(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            match self.inner.write(buf) {
                Ok(0) => {
                    return Err(FrameError::Write {
                        written: self.written,
                        source: std::io::Error::from(ErrorKind::WriteZero),
                    })
                }
                Ok(n) => {
                    self.written += n;
                    buf = &buf[n..];
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    return Err(FrameError::Write {
                        written: self.written,
                        source: err,
                    })
                }
            }
        }
        Ok(())
    }

    /// Write any [`Pack`] structure.
    pub fn write<T: Pack + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.pack_into(self)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    return Err(FrameError::Write {
                        written: self.written,
                        source: err,
                    })
                }
            }
        }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl Pack for u8 {
    fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u8(*self)
    }
}

impl Pack for u16 {
    fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_u16(*self)
    }
}

impl Pack for [u8] {
    fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_bytes(self)
    }
}

impl<const N: usize> Pack for [u8; N] {
    fn pack_into<W: Write>(&self, writer: &mut FieldWriter<W>) -> Result<()> {
        writer.write_bytes(self)
    }
}
