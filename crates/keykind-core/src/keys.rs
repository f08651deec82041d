//! Concrete key kinds.
//!
//! Every kind wraps the same 32-byte [`Uint256`]. Union kinds ([`PublicKey`],
//! [`SignerKey`]) carry a type discriminant; the rest are plain newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyError;
use crate::types::{Uint256, KEY_VALUE_LEN};

/// Maximum length of the payload attached to a signed-payload signer.
pub const MAX_SIGNED_PAYLOAD_LEN: usize = 64;

/// Fixed prefix of an encoded signed payload: key plus big-endian length.
const SIGNED_PAYLOAD_HEADER_LEN: usize = KEY_VALUE_LEN + 4;

/// Discriminant of a [`PublicKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PublicKeyType {
    Ed25519 = 0,
}

impl PublicKeyType {
    /// Convert to the wire discriminant.
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// Try to parse from the wire discriminant.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ed25519),
            _ => None,
        }
    }
}

/// A public key, tagged by algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicKey {
    Ed25519(Uint256),
}

impl PublicKey {
    /// An Ed25519 public key.
    pub const fn ed25519(value: Uint256) -> Self {
        Self::Ed25519(value)
    }

    /// A zero-valued key of the given type.
    pub const fn zeroed(key_type: PublicKeyType) -> Self {
        match key_type {
            PublicKeyType::Ed25519 => Self::Ed25519(Uint256::ZERO),
        }
    }

    pub fn key_type(&self) -> PublicKeyType {
        match self {
            Self::Ed25519(_) => PublicKeyType::Ed25519,
        }
    }

    pub fn value(&self) -> &Uint256 {
        match self {
            Self::Ed25519(value) => value,
        }
    }

    pub fn value_mut(&mut self) -> &mut Uint256 {
        match self {
            Self::Ed25519(value) => value,
        }
    }
}

/// The public key identifying an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub PublicKey);

impl AccountId {
    /// An account identified by an Ed25519 public key.
    pub const fn ed25519(value: Uint256) -> Self {
        Self(PublicKey::Ed25519(value))
    }
}

impl From<PublicKey> for AccountId {
    fn from(key: PublicKey) -> Self {
        Self(key)
    }
}

/// The public key identifying a network node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub PublicKey);

impl NodeId {
    /// A node identified by an Ed25519 public key.
    pub const fn ed25519(value: Uint256) -> Self {
        Self(PublicKey::Ed25519(value))
    }
}

impl From<PublicKey> for NodeId {
    fn from(key: PublicKey) -> Self {
        Self(key)
    }
}

/// Discriminant of a [`SignerKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum SignerKeyType {
    Ed25519 = 0,
    PreAuthTx = 1,
    HashX = 2,
    Ed25519SignedPayload = 3,
}

impl SignerKeyType {
    pub const ALL: [Self; 4] = [
        Self::Ed25519,
        Self::PreAuthTx,
        Self::HashX,
        Self::Ed25519SignedPayload,
    ];

    /// Convert to the wire discriminant.
    pub fn to_i32(self) -> i32 {
        self as i32
    }

    /// Try to parse from the wire discriminant.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ed25519),
            1 => Some(Self::PreAuthTx),
            2 => Some(Self::HashX),
            3 => Some(Self::Ed25519SignedPayload),
            _ => None,
        }
    }
}

/// An Ed25519 key with an attached payload of up to 64 bytes.
///
/// Only `ed25519` is the key value; the payload rides along in the text
/// encoding but is not copied by key conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignedPayloadRepr")]
pub struct SignedPayload {
    ed25519: Uint256,
    payload: Vec<u8>,
}

/// Unchecked wire shape of [`SignedPayload`]; deserialization goes through
/// [`SignedPayload::new`].
#[derive(Deserialize)]
struct SignedPayloadRepr {
    ed25519: Uint256,
    payload: Vec<u8>,
}

impl TryFrom<SignedPayloadRepr> for SignedPayload {
    type Error = KeyError;

    fn try_from(repr: SignedPayloadRepr) -> Result<Self, Self::Error> {
        Self::new(repr.ed25519, repr.payload)
    }
}

impl SignedPayload {
    /// Create a signed payload, rejecting payloads over 64 bytes.
    pub fn new(ed25519: Uint256, payload: Vec<u8>) -> Result<Self, KeyError> {
        if payload.len() > MAX_SIGNED_PAYLOAD_LEN {
            return Err(KeyError::MalformedSignedPayload(format!(
                "payload length {} exceeds {}",
                payload.len(),
                MAX_SIGNED_PAYLOAD_LEN
            )));
        }
        Ok(Self { ed25519, payload })
    }

    pub fn ed25519(&self) -> &Uint256 {
        &self.ed25519
    }

    pub fn ed25519_mut(&mut self) -> &mut Uint256 {
        &mut self.ed25519
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Encode as `ed25519 || u32_be(len) || payload || zero padding`.
    pub(crate) fn to_strkey_bytes(&self) -> Vec<u8> {
        let padding = padding_len(self.payload.len());
        let mut buf =
            Vec::with_capacity(SIGNED_PAYLOAD_HEADER_LEN + self.payload.len() + padding);
        buf.extend_from_slice(self.ed25519.as_bytes());
        buf.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.payload);
        buf.resize(buf.len() + padding, 0);
        buf
    }

    /// Decode the layout written by [`to_strkey_bytes`](Self::to_strkey_bytes).
    pub(crate) fn from_strkey_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() < SIGNED_PAYLOAD_HEADER_LEN {
            return Err(KeyError::MalformedSignedPayload(format!(
                "truncated: {} bytes",
                bytes.len()
            )));
        }

        let mut key = [0u8; KEY_VALUE_LEN];
        key.copy_from_slice(&bytes[..KEY_VALUE_LEN]);
        let declared = u32::from_be_bytes([bytes[32], bytes[33], bytes[34], bytes[35]]) as usize;

        if declared > MAX_SIGNED_PAYLOAD_LEN {
            return Err(KeyError::MalformedSignedPayload(format!(
                "payload length {} exceeds {}",
                declared, MAX_SIGNED_PAYLOAD_LEN
            )));
        }

        let expected = SIGNED_PAYLOAD_HEADER_LEN + declared + padding_len(declared);
        if bytes.len() != expected {
            return Err(KeyError::MalformedSignedPayload(format!(
                "expected {} bytes, got {}",
                expected,
                bytes.len()
            )));
        }

        let (payload, padding) = bytes[SIGNED_PAYLOAD_HEADER_LEN..].split_at(declared);
        if padding.iter().any(|b| *b != 0) {
            return Err(KeyError::MalformedSignedPayload(
                "non-zero padding".into(),
            ));
        }

        Ok(Self {
            ed25519: Uint256(key),
            payload: payload.to_vec(),
        })
    }
}

fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Any key that can be added as a signer, tagged by [`SignerKeyType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignerKey {
    Ed25519(Uint256),
    PreAuthTx(Uint256),
    HashX(Uint256),
    Ed25519SignedPayload(SignedPayload),
}

impl SignerKey {
    /// A zero-valued signer of the given type.
    pub fn zeroed(key_type: SignerKeyType) -> Self {
        match key_type {
            SignerKeyType::Ed25519 => Self::Ed25519(Uint256::ZERO),
            SignerKeyType::PreAuthTx => Self::PreAuthTx(Uint256::ZERO),
            SignerKeyType::HashX => Self::HashX(Uint256::ZERO),
            SignerKeyType::Ed25519SignedPayload => {
                Self::Ed25519SignedPayload(SignedPayload::default())
            }
        }
    }

    pub fn key_type(&self) -> SignerKeyType {
        match self {
            Self::Ed25519(_) => SignerKeyType::Ed25519,
            Self::PreAuthTx(_) => SignerKeyType::PreAuthTx,
            Self::HashX(_) => SignerKeyType::HashX,
            Self::Ed25519SignedPayload(_) => SignerKeyType::Ed25519SignedPayload,
        }
    }

    /// The 32-byte value; for signed payloads, the Ed25519 key.
    pub fn value(&self) -> &Uint256 {
        match self {
            Self::Ed25519(value) | Self::PreAuthTx(value) | Self::HashX(value) => value,
            Self::Ed25519SignedPayload(signed) => signed.ed25519(),
        }
    }

    pub fn value_mut(&mut self) -> &mut Uint256 {
        match self {
            Self::Ed25519(value) | Self::PreAuthTx(value) | Self::HashX(value) => value,
            Self::Ed25519SignedPayload(signed) => signed.ed25519_mut(),
        }
    }
}

/// Hash of a transaction authorized in advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreAuthTxHash(pub Uint256);

/// SHA-256 hash of a preimage whose disclosure acts as a signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashXSigner(pub Uint256);

/// An Ed25519 key that signs together with an attached payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedPayloadSigner(pub SignedPayload);

/// An Ed25519 secret seed.
///
/// # Security
///
/// - Zeroized on drop
/// - `Debug` is redacted and there is no `Display` or `Serialize`
/// - Its StrKey form is only handed out as a [`SecretValue`](crate::SecretValue)
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Uint256);

impl SecretKey {
    /// Create from a 32-byte seed.
    pub fn from_seed(seed: [u8; KEY_VALUE_LEN]) -> Self {
        Self(Uint256(seed))
    }

    /// Get the raw seed.
    pub fn seed(&self) -> &Uint256 {
        &self.0
    }

    pub(crate) fn seed_mut(&mut self) -> &mut Uint256 {
        &mut self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}
