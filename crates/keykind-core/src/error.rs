//! Error types for keykind.

use thiserror::Error;

use crate::strkey::StrKeyVersionByte;

/// Errors raised while decoding StrKey text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrKeyError {
    #[error("invalid base32 encoding")]
    InvalidEncoding,

    #[error("strkey is not in canonical form")]
    NonCanonical,

    #[error("strkey too short: {0} decoded bytes")]
    TooShort(usize),

    #[error("strkey too long: {0} characters")]
    TooLong(usize),

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("unknown strkey version byte: {0:#04x}")]
    UnknownVersion(u8),
}

/// Errors raised by the key-kind trait table, conversion and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The version marker is outside the supported domain of a key kind.
    #[error("unsupported key version {version:?} for {key_type}")]
    UnsupportedVersion {
        key_type: &'static str,
        version: StrKeyVersionByte,
    },

    #[error("invalid {key_type} payload length: expected {expected}, got {actual}")]
    InvalidLength {
        key_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed signed payload: {0}")]
    MalformedSignedPayload(String),

    #[error("strkey error: {0}")]
    StrKey(#[from] StrKeyError),
}

/// Result type for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
