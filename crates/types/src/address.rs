use crate::{Result, TypesError};
use std::fmt;
use std::str::FromStr;

/// A fixed-width 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Width of an address in bytes.
    pub const LEN: usize = 20;

    pub const ZERO: Address = Address([0u8; 20]);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != Self::LEN {
            return Err(TypesError::InvalidLength {
                expected: Self::LEN,
                actual: slice.len(),
            });
        }
        let mut array = [0u8; 20];
        array.copy_from_slice(slice);
        Ok(Address(array))
    }

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; 20] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);

        if s.len() != Self::LEN * 2 {
            return Err(TypesError::InvalidLength {
                expected: Self::LEN * 2,
                actual: s.len(),
            });
        }

        let bytes = hex::decode(s).map_err(|_| TypesError::InvalidHex(s.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_from_str() {
        let addr = Address::from_str("0x00112233445566778899aabbccddeeff00112233").unwrap();
        assert_eq!(addr.as_bytes()[0], 0x00);
        assert_eq!(addr.as_bytes()[19], 0x33);

        let bare = Address::from_str("00112233445566778899aabbccddeeff00112233").unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn test_address_display_roundtrip() {
        let addr = Address::from_bytes([0xab; 20]);
        let shown = addr.to_string();
        assert_eq!(shown, format!("0x{}", "ab".repeat(20)));
        assert_eq!(Address::from_str(&shown).unwrap(), addr);
    }

    #[test]
    fn test_address_rejects_bad_input() {
        assert!(Address::from_str("0x1234").is_err());
        assert!(Address::from_str("zz112233445566778899aabbccddeeff00112233").is_err());
        assert_eq!(
            Address::from_slice(&[0u8; 19]),
            Err(TypesError::InvalidLength {
                expected: 20,
                actual: 19
            })
        );
        assert!(Address::from_slice(&[0u8; 21]).is_err());
    }

    #[test]
    fn test_zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_bytes([1; 20]).is_zero());
        assert_eq!(
            Address::ZERO.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
    }
}
