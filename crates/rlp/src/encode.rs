use crate::traits::Encode;
use crate::value::RlpValue;
use bytes::BytesMut;

/// Streaming RLP encoder accumulating output in a growable buffer.
pub struct Encoder {
    buffer: BytesMut,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder {
            buffer: BytesMut::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    pub fn encode_bytes(&mut self, bytes: &[u8]) {
        match bytes.len() {
            0 => self.buffer.extend_from_slice(&[0x80]),
            1 if bytes[0] < 0x80 => self.buffer.extend_from_slice(bytes),
            len if len < 56 => {
                self.buffer.extend_from_slice(&[0x80 + len as u8]);
                self.buffer.extend_from_slice(bytes);
            }
            len => {
                let len_bytes = encode_length(len);
                self.buffer.extend_from_slice(&[0xb7 + len_bytes.len() as u8]);
                self.buffer.extend_from_slice(&len_bytes);
                self.buffer.extend_from_slice(bytes);
            }
        }
    }

    /// Appends the minimal big-endian form of an unsigned integer. Zero
    /// becomes the empty byte string.
    pub fn encode_uint(&mut self, value: u128) {
        let bytes = value.to_be_bytes();
        let skip = (value.leading_zeros() / 8) as usize;
        self.encode_bytes(&bytes[skip..]);
    }

    pub fn encode_bool(&mut self, value: bool) {
        self.encode_uint(u128::from(value));
    }

    pub fn encode_list<T: Encode>(&mut self, items: &[T]) {
        self.encode_list_with(|encoder| {
            for item in items {
                item.encode(encoder);
            }
        });
    }

    /// Encodes a list whose items are appended by the closure, so callers can
    /// mix item types within one list.
    pub fn encode_list_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Encoder),
    {
        let mut list_encoder = Encoder::new();
        f(&mut list_encoder);
        self.encode_list_payload(&list_encoder.finish());
    }

    pub fn encode_value(&mut self, value: &RlpValue) {
        match value {
            RlpValue::Bytes(bytes) => self.encode_bytes(bytes.as_slice()),
            RlpValue::List(items) => self.encode_list_with(|encoder| {
                for item in items {
                    encoder.encode_value(item);
                }
            }),
        }
    }

    fn encode_list_payload(&mut self, payload: &[u8]) {
        match payload.len() {
            len if len < 56 => {
                self.buffer.extend_from_slice(&[0xc0 + len as u8]);
            }
            len => {
                let len_bytes = encode_length(len);
                self.buffer.extend_from_slice(&[0xf7 + len_bytes.len() as u8]);
                self.buffer.extend_from_slice(&len_bytes);
            }
        }
        self.buffer.extend_from_slice(payload);
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}

/// Minimal big-endian representation of a payload length above 55.
fn encode_length(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    let skip = (len.leading_zeros() / 8) as usize;
    bytes[skip..].to_vec()
}
