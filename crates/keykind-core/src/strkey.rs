//! StrKey text encoding.
//!
//! A StrKey is `base32(version || payload || crc16(version || payload))`:
//! - RFC 4648 alphabet, upper case, no padding
//! - CRC16-XModem checksum stored little-endian
//! - the version byte's high five bits pick the first character
//!
//! Decoding only accepts the canonical form produced by [`to_str_key`].

use base32::Alphabet;
use zeroize::Zeroizing;

use crate::error::StrKeyError;
use crate::keys::MAX_SIGNED_PAYLOAD_LEN;
use crate::types::KEY_VALUE_LEN;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };

/// Size of the trailing checksum in bytes.
const CHECKSUM_LEN: usize = 2;

/// Largest payload any key kind carries: a signed payload at its limit.
const MAX_PAYLOAD_LEN: usize = KEY_VALUE_LEN + 4 + MAX_SIGNED_PAYLOAD_LEN;

/// Version markers embedded in StrKey text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StrKeyVersionByte {
    /// Ed25519 public key, renders as `G...`.
    PublicKeyEd25519 = 6 << 3,
    /// Ed25519 secret seed, renders as `S...`.
    SeedEd25519 = 18 << 3,
    /// Pre-authorized transaction hash, renders as `T...`.
    PreAuthTx = 19 << 3,
    /// SHA-256 hash of a preimage, renders as `X...`.
    HashX = 23 << 3,
    /// Ed25519 public key with an attached payload, renders as `P...`.
    SignedPayloadEd25519 = 15 << 3,
}

impl StrKeyVersionByte {
    /// All known markers.
    pub const ALL: [Self; 5] = [
        Self::PublicKeyEd25519,
        Self::SeedEd25519,
        Self::PreAuthTx,
        Self::HashX,
        Self::SignedPayloadEd25519,
    ];

    /// Convert to the raw byte.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from the raw byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            x if x == Self::PublicKeyEd25519 as u8 => Some(Self::PublicKeyEd25519),
            x if x == Self::SeedEd25519 as u8 => Some(Self::SeedEd25519),
            x if x == Self::PreAuthTx as u8 => Some(Self::PreAuthTx),
            x if x == Self::HashX as u8 => Some(Self::HashX),
            x if x == Self::SignedPayloadEd25519 as u8 => Some(Self::SignedPayloadEd25519),
            _ => None,
        }
    }
}

impl TryFrom<u8> for StrKeyVersionByte {
    type Error = StrKeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(StrKeyError::UnknownVersion(value))
    }
}

/// Encode a payload under the given version marker.
pub fn to_str_key(version: StrKeyVersionByte, payload: &[u8]) -> String {
    let mut buf = Zeroizing::new(Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN));
    buf.push(version.to_u8());
    buf.extend_from_slice(payload);
    let checksum = crc16_xmodem(&buf);
    buf.extend_from_slice(&checksum.to_le_bytes());
    base32::encode(ALPHABET, &buf)
}

/// Decode StrKey text into its version marker and payload.
pub fn from_str_key(s: &str) -> Result<(StrKeyVersionByte, Vec<u8>), StrKeyError> {
    if s.len() > encoded_size(MAX_PAYLOAD_LEN) {
        return Err(StrKeyError::TooLong(s.len()));
    }

    let decoded =
        Zeroizing::new(base32::decode(ALPHABET, s).ok_or(StrKeyError::InvalidEncoding)?);

    // Rejects lower case, padding and non-zero trailing bits in one go.
    if base32::encode(ALPHABET, &decoded) != s {
        return Err(StrKeyError::NonCanonical);
    }

    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(StrKeyError::TooShort(decoded.len()));
    }

    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = crc16_xmodem(body);
    let actual = u16::from_le_bytes([checksum[0], checksum[1]]);
    if expected != actual {
        return Err(StrKeyError::ChecksumMismatch { expected, actual });
    }

    let version = StrKeyVersionByte::try_from(body[0])?;
    Ok((version, body[1..].to_vec()))
}

/// Length of the StrKey text for a payload of `payload_len` bytes.
pub fn encoded_size(payload_len: usize) -> usize {
    let bits = (1 + payload_len + CHECKSUM_LEN) * 8;
    (bits + 4) / 5
}

// CRC16-XModem: poly 0x1021, init 0, no reflection
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
