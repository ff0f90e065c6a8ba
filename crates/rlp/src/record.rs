use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{Result, RlpError};
use crate::value::RlpValue;
use rlp_types::{Address, Bytes};

/// Encodes an unsigned integer as its minimal big-endian byte string. Zero
/// becomes the empty string.
pub fn encode_uint(value: u128) -> Bytes {
    let bytes = value.to_be_bytes();
    let skip = (value.leading_zeros() / 8) as usize;
    Bytes::from_slice(&bytes[skip..])
}

/// Decodes a minimal big-endian unsigned integer.
pub fn decode_uint(bytes: &[u8]) -> Result<u128> {
    if bytes.is_empty() {
        return Ok(0);
    }
    if bytes[0] == 0 {
        return Err(RlpError::NonCanonical("integer has a leading zero byte"));
    }
    if bytes.len() > 16 {
        return Err(RlpError::IntegerOverflow);
    }

    let mut value = 0u128;
    for &byte in bytes {
        value = (value << 8) | u128::from(byte);
    }
    Ok(value)
}

/// Owned copy of a fixed-width byte array.
pub fn encode_fixed_bytes<const N: usize>(bytes: &[u8; N]) -> Bytes {
    Bytes::from_slice(bytes)
}

/// Copies a byte string into a fixed-width array, checking the width.
pub fn decode_fixed_bytes<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    if bytes.len() != N {
        return Err(RlpError::WrongLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut array = [0u8; N];
    array.copy_from_slice(bytes);
    Ok(array)
}

/// Scalar codec used for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCodec {
    /// Minimal big-endian unsigned integer.
    Uint,
    /// Fixed-width 20-byte address.
    Address,
    /// Arbitrary-length byte string.
    Binary,
}

/// A named field and the codec for its wire form.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub codec: FieldCodec,
}

impl FieldDef {
    pub const fn new(name: &'static str, codec: FieldCodec) -> Self {
        FieldDef { name, codec }
    }
}

/// One decoded record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Uint(u128),
    Address(Address),
    Binary(Bytes),
}

impl FieldValue {
    pub fn as_uint(&self) -> Option<u128> {
        match self {
            FieldValue::Uint(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            FieldValue::Address(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Binary(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

impl From<u128> for FieldValue {
    fn from(value: u128) -> Self {
        FieldValue::Uint(value)
    }
}

impl From<Address> for FieldValue {
    fn from(addr: Address) -> Self {
        FieldValue::Address(addr)
    }
}

impl From<Bytes> for FieldValue {
    fn from(bytes: Bytes) -> Self {
        FieldValue::Binary(bytes)
    }
}

/// Positional field layout of a record encoded as one RLP list.
///
/// A record's wire form is a list with exactly one item per field, each
/// encoded by the field's scalar codec. Schemas are declared once as
/// statics and shared by encode and decode paths.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    name: &'static str,
    fields: &'static [FieldDef],
}

impl RecordSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldDef]) -> Self {
        RecordSchema { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes field values as one RLP list.
    pub fn encode(&self, values: &[FieldValue]) -> Result<Bytes> {
        let value = self.to_value(values)?;
        let mut encoder = Encoder::new();
        encoder.encode_value(&value);
        Ok(Bytes::from_vec(encoder.finish()))
    }

    /// Decodes a complete RLP buffer as this record, consuming all input.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<FieldValue>> {
        let mut decoder = Decoder::new(data);
        let value = decoder.decode_value()?;
        if !decoder.is_finished() {
            return Err(RlpError::TrailingBytes {
                count: decoder.remaining(),
            });
        }
        self.decode_value(&value)
    }

    /// Converts field values into the record's list form without encoding.
    pub fn to_value(&self, values: &[FieldValue]) -> Result<RlpValue> {
        if values.len() != self.fields.len() {
            return Err(RlpError::ArityMismatch {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }

        let mut items = Vec::with_capacity(values.len());
        for (field, value) in self.fields.iter().zip(values) {
            let item = match (field.codec, value) {
                (FieldCodec::Uint, FieldValue::Uint(v)) => RlpValue::Bytes(encode_uint(*v)),
                (FieldCodec::Address, FieldValue::Address(addr)) => {
                    RlpValue::Bytes(Bytes::from_slice(addr.as_bytes()))
                }
                (FieldCodec::Binary, FieldValue::Binary(data)) => RlpValue::Bytes(data.clone()),
                _ => return Err(RlpError::FieldTypeMismatch { field: field.name }),
            };
            items.push(item);
        }
        Ok(RlpValue::List(items))
    }

    /// Decodes an already-parsed value tree as this record.
    pub fn decode_value(&self, value: &RlpValue) -> Result<Vec<FieldValue>> {
        let items = value.as_list().ok_or(RlpError::ExpectedList)?;
        if items.len() != self.fields.len() {
            return Err(RlpError::ArityMismatch {
                expected: self.fields.len(),
                actual: items.len(),
            });
        }

        let mut values = Vec::with_capacity(items.len());
        for (field, item) in self.fields.iter().zip(items) {
            values.push(decode_field(field, item)?);
        }
        Ok(values)
    }
}

fn decode_field(field: &FieldDef, item: &RlpValue) -> Result<FieldValue> {
    let bytes = item.as_bytes().ok_or(RlpError::ExpectedBytes)?;
    match field.codec {
        FieldCodec::Uint => Ok(FieldValue::Uint(decode_uint(bytes)?)),
        FieldCodec::Address => {
            let array = decode_fixed_bytes::<20>(bytes)?;
            Ok(FieldValue::Address(Address::from_bytes(array)))
        }
        FieldCodec::Binary => Ok(FieldValue::Binary(Bytes::from_slice(bytes))),
    }
}
