use crate::error::{Result, RlpError};
use crate::record;
use crate::traits::Decode;
use crate::value::RlpValue;
use rlp_types::Bytes;

/// Decoders refuse lists nested deeper than this unless constructed with
/// [`Decoder::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Cursor over an RLP-encoded slice, validating canonical form as it reads.
pub struct Decoder<'a> {
    data: &'a [u8],
    position: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_max_depth(data, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(data: &'a [u8], max_depth: usize) -> Self {
        Decoder {
            data,
            position: 0,
            max_depth,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Whether the next item is a list. Fails on exhausted input.
    pub fn is_list(&self) -> Result<bool> {
        Ok(self.peek()? >= 0xc0)
    }

    /// Decodes one byte-string item.
    pub fn decode_bytes(&mut self) -> Result<Vec<u8>> {
        let (offset, len, is_data) = self.decode_header()?;
        if !is_data {
            return Err(RlpError::ExpectedBytes);
        }

        self.position += offset;
        let bytes = self.data[self.position..self.position + len].to_vec();
        self.position += len;
        Ok(bytes)
    }

    /// Decodes a list of homogeneous items.
    pub fn decode_list<T: Decode>(&mut self) -> Result<Vec<T>> {
        let mut payload = self.decode_list_payload()?;
        let mut items = Vec::new();
        while !payload.is_finished() {
            items.push(T::decode(&mut payload)?);
        }
        Ok(items)
    }

    /// Consumes a list header and returns a decoder scoped to the list
    /// payload, so callers can walk heterogeneous items one by one. Items
    /// read from the returned decoder cannot run past the end of the list.
    pub fn decode_list_payload(&mut self) -> Result<Decoder<'a>> {
        let (offset, len, is_data) = self.decode_header()?;
        if is_data {
            return Err(RlpError::ExpectedList);
        }

        self.position += offset;
        let payload = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(Decoder::with_max_depth(payload, self.max_depth))
    }

    /// Number of items remaining in the input, scanned without consuming
    /// them. Call on a decoder returned by [`Decoder::decode_list_payload`]
    /// to count list items.
    pub fn item_count(&self) -> Result<usize> {
        let mut scan = Decoder::with_max_depth(&self.data[self.position..], self.max_depth);
        let mut count = 0;
        while !scan.is_finished() {
            scan.skip_item()?;
            count += 1;
        }
        Ok(count)
    }

    /// Decodes the next item into an owned value tree.
    pub fn decode_value(&mut self) -> Result<RlpValue> {
        self.decode_value_at(0)
    }

    /// Decodes a big-endian unsigned integer of up to 16 bytes.
    pub fn decode_uint(&mut self) -> Result<u128> {
        let bytes = self.decode_bytes()?;
        record::decode_uint(&bytes)
    }

    pub fn decode_u8(&mut self) -> Result<u8> {
        u8::try_from(self.decode_uint()?).map_err(|_| RlpError::IntegerOverflow)
    }

    pub fn decode_u16(&mut self) -> Result<u16> {
        u16::try_from(self.decode_uint()?).map_err(|_| RlpError::IntegerOverflow)
    }

    pub fn decode_u32(&mut self) -> Result<u32> {
        u32::try_from(self.decode_uint()?).map_err(|_| RlpError::IntegerOverflow)
    }

    pub fn decode_u64(&mut self) -> Result<u64> {
        u64::try_from(self.decode_uint()?).map_err(|_| RlpError::IntegerOverflow)
    }

    pub fn decode_u128(&mut self) -> Result<u128> {
        self.decode_uint()
    }

    pub fn decode_bool(&mut self) -> Result<bool> {
        match self.decode_uint()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(RlpError::NonCanonical("boolean must encode as 0 or 1")),
        }
    }

    fn decode_value_at(&mut self, depth: usize) -> Result<RlpValue> {
        let (offset, len, is_data) = self.decode_header()?;
        self.position += offset;

        if is_data {
            let bytes = Bytes::from_slice(&self.data[self.position..self.position + len]);
            self.position += len;
            return Ok(RlpValue::Bytes(bytes));
        }

        if depth >= self.max_depth {
            return Err(RlpError::LimitExceeded {
                limit: self.max_depth,
            });
        }

        let end = self.position + len;
        let mut payload = Decoder::with_max_depth(&self.data[self.position..end], self.max_depth);
        self.position = end;

        let mut items = Vec::new();
        while !payload.is_finished() {
            items.push(payload.decode_value_at(depth + 1)?);
        }
        Ok(RlpValue::List(items))
    }

    fn skip_item(&mut self) -> Result<()> {
        let (offset, len, _) = self.decode_header()?;
        self.position += offset + len;
        Ok(())
    }

    fn peek(&self) -> Result<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(RlpError::UnexpectedEnd)
    }

    /// Parses the header of the next item without consuming it, returning
    /// the header width, the payload length and whether the payload is a
    /// byte string. Guarantees the payload lies within the input.
    fn decode_header(&self) -> Result<(usize, usize, bool)> {
        let prefix = self.peek()?;

        let (offset, len, is_data) = match prefix {
            0x00..=0x7f => (0, 1, true),
            0x80 => (1, 0, true),
            0x81..=0xb7 => {
                let len = (prefix - 0x80) as usize;
                if len == 1 {
                    if let Some(&byte) = self.data.get(self.position + 1) {
                        if byte < 0x80 {
                            return Err(RlpError::NonCanonical(
                                "single byte below 0x80 must be encoded as itself",
                            ));
                        }
                    }
                }
                (1, len, true)
            }
            0xb8..=0xbf => {
                let len_of_len = (prefix - 0xb7) as usize;
                let len = self.decode_length(len_of_len)?;
                if len < 56 {
                    return Err(RlpError::NonCanonical(
                        "length below 56 must use the short form",
                    ));
                }
                (1 + len_of_len, len, true)
            }
            0xc0..=0xf7 => (1, (prefix - 0xc0) as usize, false),
            0xf8..=0xff => {
                let len_of_len = (prefix - 0xf7) as usize;
                let len = self.decode_length(len_of_len)?;
                if len < 56 {
                    return Err(RlpError::NonCanonical(
                        "length below 56 must use the short form",
                    ));
                }
                (1 + len_of_len, len, false)
            }
        };

        let remaining = self.data.len() - self.position - offset;
        if len > remaining {
            return Err(RlpError::Truncated { needed: len, remaining });
        }
        Ok((offset, len, is_data))
    }

    /// Reads the long-form length field of `len_of_len` bytes following the
    /// prefix byte.
    fn decode_length(&self, len_of_len: usize) -> Result<usize> {
        let start = self.position + 1;
        if start + len_of_len > self.data.len() {
            return Err(RlpError::UnexpectedEnd);
        }

        let bytes = &self.data[start..start + len_of_len];
        if bytes[0] == 0 {
            return Err(RlpError::NonCanonical("length field has a leading zero byte"));
        }

        // len_of_len is at most 8, so the accumulator cannot overflow
        let mut len = 0u64;
        for &byte in bytes {
            len = (len << 8) | u64::from(byte);
        }
        usize::try_from(len).map_err(|_| RlpError::Truncated {
            needed: usize::MAX,
            remaining: self.data.len() - start - len_of_len,
        })
    }
}
