pub mod decode;
pub mod encode;
pub mod error;
pub mod record;
pub mod traits;
pub mod value;

pub use decode::{Decoder, DEFAULT_MAX_DEPTH};
pub use encode::Encoder;
pub use error::{Result, RlpError};
pub use record::{
    decode_fixed_bytes, decode_uint, encode_fixed_bytes, encode_uint, FieldCodec, FieldDef,
    FieldValue, RecordSchema,
};
pub use traits::{Decode, Encode};
pub use value::RlpValue;

pub use rlp_types::{Address, Bytes};

/// Prefix byte of the empty byte string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Prefix byte of the empty list.
pub const EMPTY_LIST_CODE: u8 = 0xc0;

/// Encodes a value to its canonical RLP form.
pub fn encode<T: Encode>(value: &T) -> Bytes {
    let mut encoder = Encoder::new();
    value.encode(&mut encoder);
    Bytes::from_vec(encoder.finish())
}

/// Decodes a value from canonical RLP, consuming the whole input.
pub fn decode<T: Decode>(data: &[u8]) -> Result<T> {
    let mut decoder = Decoder::new(data);
    let value = T::decode(&mut decoder)?;
    if !decoder.is_finished() {
        return Err(RlpError::TrailingBytes {
            count: decoder.remaining(),
        });
    }
    Ok(value)
}

/// Encodes a value tree to its canonical RLP form.
pub fn encode_value(value: &RlpValue) -> Bytes {
    let mut encoder = Encoder::new();
    encoder.encode_value(value);
    Bytes::from_vec(encoder.finish())
}

/// Decodes canonical RLP into a value tree, consuming the whole input.
pub fn decode_value(data: &[u8]) -> Result<RlpValue> {
    let mut decoder = Decoder::new(data);
    let value = decoder.decode_value()?;
    if !decoder.is_finished() {
        return Err(RlpError::TrailingBytes {
            count: decoder.remaining(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_string() {
        let data = b"hello world";
        let encoded = encode(&data.as_slice());
        let decoded: Vec<u8> = decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_encode_decode_empty() {
        let data: &[u8] = &[];
        let encoded = encode(&data);
        assert_eq!(encoded.as_slice(), &[EMPTY_STRING_CODE]);
        let decoded: Vec<u8> = decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut encoded = encode(&"dog").into_vec();
        encoded.push(0x00);
        assert_eq!(
            decode::<Vec<u8>>(&encoded),
            Err(RlpError::TrailingBytes { count: 1 })
        );
    }

    #[test]
    fn test_decode_value_rejects_trailing_bytes() {
        assert_eq!(
            decode_value(&[0xc0, 0x80]),
            Err(RlpError::TrailingBytes { count: 1 })
        );
    }

    #[test]
    fn test_value_roundtrip() {
        let value = RlpValue::List(vec![
            RlpValue::from(&b"cat"[..]),
            RlpValue::List(vec![RlpValue::from(&b"dog"[..])]),
        ]);
        let encoded = encode_value(&value);
        assert_eq!(decode_value(&encoded).unwrap(), value);
    }
}
