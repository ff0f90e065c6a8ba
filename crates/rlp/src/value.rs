use rlp_types::Bytes;

/// A decoded RLP item: an opaque byte string or an ordered list of nested
/// items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpValue {
    Bytes(Bytes),
    List(Vec<RlpValue>),
}

impl RlpValue {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RlpValue::Bytes(bytes) => Some(bytes.as_slice()),
            RlpValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpValue]> {
        match self {
            RlpValue::Bytes(_) => None,
            RlpValue::List(items) => Some(items),
        }
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, RlpValue::Bytes(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RlpValue::List(_))
    }
}

impl From<Bytes> for RlpValue {
    fn from(bytes: Bytes) -> Self {
        RlpValue::Bytes(bytes)
    }
}

impl From<Vec<u8>> for RlpValue {
    fn from(data: Vec<u8>) -> Self {
        RlpValue::Bytes(Bytes::from_vec(data))
    }
}

impl From<&[u8]> for RlpValue {
    fn from(data: &[u8]) -> Self {
        RlpValue::Bytes(Bytes::from_slice(data))
    }
}

impl From<Vec<RlpValue>> for RlpValue {
    fn from(items: Vec<RlpValue>) -> Self {
        RlpValue::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let bytes = RlpValue::from(vec![1u8, 2, 3]);
        assert!(bytes.is_bytes());
        assert!(!bytes.is_list());
        assert_eq!(bytes.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(bytes.as_list(), None);

        let list = RlpValue::List(vec![bytes.clone()]);
        assert!(list.is_list());
        assert_eq!(list.as_list().map(|items| items.len()), Some(1));
        assert_eq!(list.as_bytes(), None);
    }

    #[test]
    fn test_conversions() {
        let from_slice = RlpValue::from(&b"abc"[..]);
        let from_vec = RlpValue::from(b"abc".to_vec());
        assert_eq!(from_slice, from_vec);

        let list = RlpValue::from(vec![from_slice]);
        assert!(list.is_list());
    }
}
