use crate::{Error, Result};

/// Bytes is a sequential cursor over an in-memory RTS message.
///
/// Every read either consumes exactly the bytes it needs or fails with
/// [Error::TruncatedInput] leaving the offset where it was. After any error returned
/// from a composite decode the cursor should be dropped; it may sit part way through
/// a record.
#[derive(Debug, Clone)]
pub struct Bytes<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Bytes<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Bytes { data, offset: 0 }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Consume the next `n` bytes.
    ///
    /// # Errors
    /// [Error::TruncatedInput] if fewer than `n` bytes remain.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::TruncatedInput {
                offset: self.offset,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let (_, tail) = self.data.split_at(self.offset);
        self.offset += n;
        Ok(&tail[..n])
    }

    /// Consume the next `N` bytes as an array.
    ///
    /// # Errors
    /// [Error::TruncatedInput] if fewer than `N` bytes remain.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    /// # Errors
    /// [Error::TruncatedInput] if the input is exhausted.
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.take_array::<1>()?;
        Ok(b)
    }

    /// # Errors
    /// [Error::TruncatedInput] if fewer than 2 bytes remain.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    /// Little-endian unsigned 24-bit value widened to `u32`.
    ///
    /// # Errors
    /// [Error::TruncatedInput] if fewer than 3 bytes remain.
    pub fn read_u24_le(&mut self) -> Result<u32> {
        let [b0, b1, b2] = self.take_array()?;
        Ok(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    /// # Errors
    /// [Error::TruncatedInput] if fewer than 4 bytes remain.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }
}
