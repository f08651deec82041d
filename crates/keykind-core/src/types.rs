//! The raw 32-byte key value.
//!
//! A `Uint256` carries no meaning on its own; the key kind wrapping it decides
//! what it is.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Length of every key value in bytes.
pub const KEY_VALUE_LEN: usize = 32;

/// An opaque 32-byte key value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Zeroize)]
pub struct Uint256(pub [u8; KEY_VALUE_LEN]);

impl Uint256 {
    /// The all-zero value.
    pub const ZERO: Self = Self([0u8; KEY_VALUE_LEN]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_VALUE_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; KEY_VALUE_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != KEY_VALUE_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; KEY_VALUE_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Uint256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; KEY_VALUE_LEN]> for Uint256 {
    fn from(bytes: [u8; KEY_VALUE_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Uint256 {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; KEY_VALUE_LEN] = slice.try_into()?;
        Ok(Self(arr))
    }
}
