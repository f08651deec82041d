//! StrKey formatting and parsing of typed keys.

use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

use crate::error::KeyError;
use crate::key_functions::{EncodedKey, KeyFunctions};
use crate::keys::{
    AccountId, HashXSigner, NodeId, PreAuthTxHash, PublicKey, SignedPayloadSigner, SignerKey,
    MAX_SIGNED_PAYLOAD_LEN,
};
use crate::strkey::{self, StrKeyVersionByte};
use crate::types::KEY_VALUE_LEN;

/// Number of characters kept by [`to_short_string`].
pub const SHORT_STRING_LEN: usize = 5;

/// Render a key as StrKey text.
///
/// Secret kinds come back wrapped in a [`SecretValue`](crate::SecretValue).
pub fn to_str_key<T: KeyFunctions>(key: &T) -> T::Encoded {
    let version = T::to_key_version(key.key_type());
    let payload = key.strkey_payload();
    T::Encoded::from_encoded(strkey::to_str_key(version, &payload))
}

/// The first five characters of [`to_str_key`], for log lines.
pub fn to_short_string<T: KeyFunctions>(key: &T) -> T::Encoded {
    let full = to_str_key(key);
    let text = full.encoded();
    // StrKey text is ASCII, so byte and char offsets agree.
    let end = SHORT_STRING_LEN.min(text.len());
    T::Encoded::from_encoded(text[..end].to_string())
}

/// Payload length carried by a version marker.
///
/// Signed payloads are variable; their maximum size is returned.
pub fn key_version_size(version: StrKeyVersionByte) -> usize {
    match version {
        StrKeyVersionByte::PublicKeyEd25519
        | StrKeyVersionByte::SeedEd25519
        | StrKeyVersionByte::PreAuthTx
        | StrKeyVersionByte::HashX => KEY_VALUE_LEN,
        StrKeyVersionByte::SignedPayloadEd25519 => KEY_VALUE_LEN + 4 + MAX_SIGNED_PAYLOAD_LEN,
    }
}

/// Parse StrKey text as a `T`.
///
/// The marker must be one `T` supports and the payload must fit the marker.
pub fn from_str_key<T: KeyFunctions>(s: &str) -> Result<T, KeyError> {
    let (version, payload) = strkey::from_str_key(s).map_err(|e| {
        tracing::debug!(key_type = T::key_type_name(), error = %e, "rejected strkey");
        e
    })?;
    let payload = Zeroizing::new(payload);

    if !T::is_key_version_supported(version) {
        tracing::debug!(key_type = T::key_type_name(), ?version, "unsupported strkey version");
        return Err(KeyError::UnsupportedVersion {
            key_type: T::key_type_name(),
            version,
        });
    }

    let max = key_version_size(version);
    if payload.len() > max {
        return Err(KeyError::InvalidLength {
            key_type: T::key_type_name(),
            expected: max,
            actual: payload.len(),
        });
    }

    T::from_strkey_payload(T::to_key_type(version)?, &payload)
}

macro_rules! impl_strkey_text {
    ($($kind:ty),* $(,)?) => {
        $(
            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&to_str_key(self))
                }
            }

            impl FromStr for $kind {
                type Err = KeyError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    from_str_key(s)
                }
            }
        )*
    };
}

impl_strkey_text!(
    PublicKey,
    AccountId,
    NodeId,
    SignerKey,
    PreAuthTxHash,
    HashXSigner,
    SignedPayloadSigner,
);
