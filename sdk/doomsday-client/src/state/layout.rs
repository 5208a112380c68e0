use anchor_lang::prelude::Pubkey;

use crate::constants::{ANCHOR_DISCRIMINATOR_LEN, PUBKEY_LEN};
use crate::errors::LayoutError;

/// A fixed-layout account record that can be decoded from raw account data.
pub trait AccountLayout: Sized {
    /// `sha256("account:<Name>")[..8]`, as written by the program.
    const DISCRIMINATOR: [u8; 8];
    /// Bytes allocated on chain, discriminator and padding included.
    const LEN: usize;
    /// Bytes the decoder consumes, discriminator included.
    const DECODED_LEN: usize;

    fn decode(data: &[u8]) -> Result<Self, LayoutError>;
}

/// Bounds-checked cursor over account bytes.
///
/// Every read goes through [`LayoutReader::take`], so a short buffer fails
/// with [`LayoutError::Truncated`] at the first field that does not fit.
#[derive(Debug, Clone)]
pub struct LayoutReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> LayoutReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Positions the cursor after the 8-byte account discriminator.
    pub fn for_account(data: &'a [u8]) -> Result<Self, LayoutError> {
        let mut reader = Self::new(data);
        reader.skip(ANCHOR_DISCRIMINATOR_LEN)?;
        Ok(reader)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], LayoutError> {
        let available = self.data.len();
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= available)
            .ok_or(LayoutError::Truncated {
                needed: self.offset.saturating_add(len),
                available,
            })?;
        let bytes = &self.data[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), LayoutError> {
        self.take(len).map(|_| ())
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], LayoutError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, LayoutError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, LayoutError> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, LayoutError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, LayoutError> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64, LayoutError> {
        self.read_array().map(i64::from_le_bytes)
    }

    pub fn read_bool(&mut self) -> Result<bool, LayoutError> {
        let offset = self.offset;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(LayoutError::InvalidBool { offset, value }),
        }
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, LayoutError> {
        self.read_array::<PUBKEY_LEN>().map(Pubkey::new_from_array)
    }

    /// Presence flag followed by a `width`-byte slot that is always consumed.
    pub fn read_option<T>(
        &mut self,
        width: usize,
        read: impl FnOnce(&mut LayoutReader<'a>) -> Result<T, LayoutError>,
    ) -> Result<Option<T>, LayoutError> {
        let present = self.read_bool()?;
        let slot = self.take(width)?;
        if !present {
            return Ok(None);
        }
        read(&mut LayoutReader::new(slot)).map(Some)
    }

    pub fn read_option_i64(&mut self) -> Result<Option<i64>, LayoutError> {
        self.read_option(8, |slot| slot.read_i64())
    }

    /// 4-byte length prefix followed by a `capacity`-byte region. Only the
    /// first `length` bytes are text; the rest is padding.
    pub fn read_bounded_string(
        &mut self,
        field: &'static str,
        capacity: usize,
    ) -> Result<String, LayoutError> {
        let len = self.read_u32()? as usize;
        let region = self.take(capacity)?;
        if len > capacity {
            return Err(LayoutError::TextTooLong {
                field,
                len,
                capacity,
            });
        }
        std::str::from_utf8(&region[..len])
            .map(str::to_owned)
            .map_err(|_| LayoutError::InvalidUtf8 { field })
    }
}

#[cfg(test)]
pub(crate) mod writer {
    use super::*;

    /// Builds account buffers in the layout [`LayoutReader`] expects.
    #[derive(Default)]
    pub struct LayoutWriter {
        pub buf: Vec<u8>,
    }

    impl LayoutWriter {
        pub fn account(discriminator: [u8; 8]) -> Self {
            Self {
                buf: discriminator.to_vec(),
            }
        }

        pub fn u8(mut self, v: u8) -> Self {
            self.buf.push(v);
            self
        }

        pub fn u16(mut self, v: u16) -> Self {
            self.buf.extend_from_slice(&v.to_le_bytes());
            self
        }

        pub fn u64(mut self, v: u64) -> Self {
            self.buf.extend_from_slice(&v.to_le_bytes());
            self
        }

        pub fn i64(mut self, v: i64) -> Self {
            self.buf.extend_from_slice(&v.to_le_bytes());
            self
        }

        pub fn bool(self, v: bool) -> Self {
            self.u8(v as u8)
        }

        pub fn pubkey(mut self, v: &Pubkey) -> Self {
            self.buf.extend_from_slice(v.as_ref());
            self
        }

        pub fn option_i64(self, v: Option<i64>) -> Self {
            match v {
                Some(v) => self.u8(1).i64(v),
                None => self.u8(0).i64(0),
            }
        }

        pub fn option_u8(self, v: Option<u8>) -> Self {
            match v {
                Some(v) => self.u8(1).u8(v),
                None => self.u8(0).u8(0),
            }
        }

        pub fn bounded_string(mut self, s: &str, capacity: usize) -> Self {
            self.buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            let mut region = vec![0u8; capacity];
            region[..s.len()].copy_from_slice(s.as_bytes());
            self.buf.extend_from_slice(&region);
            self
        }

        pub fn padding(mut self, len: usize) -> Self {
            self.buf.resize(self.buf.len() + len, 0);
            self
        }

        pub fn finish(self) -> Vec<u8> {
            self.buf
        }
    }
}
