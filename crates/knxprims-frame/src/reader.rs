use bytes::Buf;

use crate::error::{FrameError, Result};

/// A fixed-size wire structure that can be read from a [`FieldReader`].
pub trait Unpack: Sized {
    /// Read one value, advancing the cursor past it.
    fn unpack_from(reader: &mut FieldReader<'_>) -> Result<Self>;
}

/// Cursor over a borrowed byte buffer with typed field readers.
///
/// Every read checks the remaining length first, so a short buffer yields
/// [`FrameError::Truncated`] instead of a panic. The cursor never advances
/// past the end of a field it failed to read.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// The unread tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        let mut src = self.rest();
        let value = src.get_u8();
        self.pos += 1;
        Ok(value)
    }

    /// Read a big-endian (network order) `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.require(2)?;
        let mut src = self.rest();
        let value = src.get_u16();
        self.pos += 2;
        Ok(value)
    }

    /// Read exactly `N` raw bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.require(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Read any [`Unpack`] structure.
    pub fn read<T: Unpack>(&mut self) -> Result<T> {
        T::unpack_from(self)
    }

    fn require(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(FrameError::Truncated { needed, remaining });
        }
        Ok(())
    }
}

impl Unpack for u8 {
    fn unpack_from(reader: &mut FieldReader<'_>) -> Result<Self> {
        reader.read_u8()
    }
}

impl Unpack for u16 {
    fn unpack_from(reader: &mut FieldReader<'_>) -> Result<Self> {
        reader.read_u16()
    }
}

impl<const N: usize> Unpack for [u8; N] {
    fn unpack_from(reader: &mut FieldReader<'_>) -> Result<Self> {
        reader.read_array()
    }
}
