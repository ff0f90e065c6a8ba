use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{Result, RlpError};
use rlp_types::{Address, Bytes};

/// Serializes a value onto an RLP encoder.
pub trait Encode {
    fn encode(&self, encoder: &mut Encoder);
}

/// Deserializes a value from an RLP decoder.
pub trait Decode: Sized {
    fn decode(decoder: &mut Decoder) -> Result<Self>;
}

impl Encode for u8 {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_uint(u128::from(*self));
    }
}

impl Decode for u8 {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_u8()
    }
}

impl Encode for u16 {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_uint(u128::from(*self));
    }
}

impl Decode for u16 {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_u16()
    }
}

impl Encode for u32 {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_uint(u128::from(*self));
    }
}

impl Decode for u32 {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_u32()
    }
}

impl Encode for u64 {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_uint(u128::from(*self));
    }
}

impl Decode for u64 {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_u64()
    }
}

impl Encode for u128 {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_uint(*self);
    }
}

impl Decode for u128 {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_u128()
    }
}

impl Encode for usize {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_uint(*self as u128);
    }
}

impl Decode for usize {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        usize::try_from(decoder.decode_uint()?).map_err(|_| RlpError::IntegerOverflow)
    }
}

impl Encode for bool {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bool(*self);
    }
}

impl Decode for bool {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_bool()
    }
}

impl Encode for &[u8] {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self);
    }
}

impl Encode for Vec<u8> {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self);
    }
}

impl Decode for Vec<u8> {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        decoder.decode_bytes()
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self);
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        let bytes = decoder.decode_bytes()?;
        if bytes.len() != N {
            return Err(RlpError::WrongLength {
                expected: N,
                actual: bytes.len(),
            });
        }
        let mut array = [0u8; N];
        array.copy_from_slice(&bytes);
        Ok(array)
    }
}

impl Encode for &str {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self.as_bytes());
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self.as_bytes());
    }
}

impl Decode for String {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        let bytes = decoder.decode_bytes()?;
        String::from_utf8(bytes).map_err(|_| RlpError::InvalidUtf8)
    }
}

impl Encode for Bytes {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self.as_slice());
    }
}

impl Decode for Bytes {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        Ok(Bytes::from_vec(decoder.decode_bytes()?))
    }
}

impl Encode for Address {
    fn encode(&self, encoder: &mut Encoder) {
        encoder.encode_bytes(self.as_bytes());
    }
}

impl Decode for Address {
    fn decode(decoder: &mut Decoder) -> Result<Self> {
        let bytes: [u8; 20] = Decode::decode(decoder)?;
        Ok(Address::from_bytes(bytes))
    }
}
