//! The key-kind trait table.
//!
//! [`KeyFunctions`] is implemented once per key kind. It is the only place that
//! knows which version markers a kind accepts and how markers map onto the
//! kind's discriminant; conversion and formatting are written against the
//! trait alone.
//!
//! | kind | accepted markers | discriminant |
//! |---|---|---|
//! | `PublicKey`, `AccountId`, `NodeId` | `G` | `PublicKeyType` |
//! | `SignerKey` | `G`, `T`, `X`, `P` | `SignerKeyType` |
//! | `PreAuthTxHash` | `T` | `()` |
//! | `HashXSigner` | `X` | `()` |
//! | `SignedPayloadSigner` | `P` | `()` |
//! | `SecretKey` | `S` | `()` |

use std::fmt;
use zeroize::Zeroizing;

use crate::error::KeyError;
use crate::keys::{
    AccountId, HashXSigner, NodeId, PreAuthTxHash, PublicKey, PublicKeyType, SecretKey,
    SignedPayload, SignedPayloadSigner, SignerKey, SignerKeyType,
};
use crate::secret::SecretValue;
use crate::strkey::StrKeyVersionByte;
use crate::types::{Uint256, KEY_VALUE_LEN};

/// Text produced by formatting a key: a plain `String` or a [`SecretValue`].
pub trait EncodedKey: Sized {
    fn from_encoded(encoded: String) -> Self;

    fn encoded(&self) -> &str;
}

impl EncodedKey for String {
    fn from_encoded(encoded: String) -> Self {
        encoded
    }

    fn encoded(&self) -> &str {
        self
    }
}

impl EncodedKey for SecretValue {
    fn from_encoded(encoded: String) -> Self {
        SecretValue::from(encoded)
    }

    fn encoded(&self) -> &str {
        self.expose_secret()
    }
}

/// Per-kind descriptor for a 32-byte key kind.
pub trait KeyFunctions: Sized {
    /// The kind's internal discriminant; `()` for non-union kinds.
    type KeyType: Copy + Eq + fmt::Debug;

    /// What [`to_str_key`](crate::to_str_key) returns for this kind.
    type Encoded: EncodedKey;

    /// Human-readable kind name, for diagnostics.
    fn key_type_name() -> &'static str;

    /// Whether data tagged with `version` may become an instance of this kind.
    fn is_key_version_supported(version: StrKeyVersionByte) -> bool;

    /// Map a supported marker to a discriminant.
    ///
    /// Fails with [`KeyError::UnsupportedVersion`] outside the supported domain.
    fn to_key_type(version: StrKeyVersionByte) -> Result<Self::KeyType, KeyError>;

    /// Map a discriminant to its marker. Total.
    fn to_key_version(key_type: Self::KeyType) -> StrKeyVersionByte;

    /// The instance's current discriminant.
    fn key_type(&self) -> Self::KeyType;

    /// A zero-valued instance with the given discriminant.
    fn with_key_type(key_type: Self::KeyType) -> Self;

    fn key_value(&self) -> &Uint256;

    fn key_value_mut(&mut self) -> &mut Uint256;

    /// Bytes placed after the version byte in the StrKey text.
    fn strkey_payload(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.key_value().as_bytes().to_vec())
    }

    /// Build an instance from decoded StrKey bytes.
    fn from_strkey_payload(key_type: Self::KeyType, payload: &[u8]) -> Result<Self, KeyError> {
        fixed_from_payload(key_type, payload)
    }
}

fn fixed_from_payload<T: KeyFunctions>(key_type: T::KeyType, payload: &[u8]) -> Result<T, KeyError> {
    let value = Uint256::try_from(payload).map_err(|_| KeyError::InvalidLength {
        key_type: T::key_type_name(),
        expected: KEY_VALUE_LEN,
        actual: payload.len(),
    })?;
    let mut key = T::with_key_type(key_type);
    *key.key_value_mut() = value;
    Ok(key)
}

fn unsupported(key_type: &'static str, version: StrKeyVersionByte) -> KeyError {
    KeyError::UnsupportedVersion { key_type, version }
}

// Shared by PublicKey, AccountId and NodeId.
fn public_key_type(
    key_type_name: &'static str,
    version: StrKeyVersionByte,
) -> Result<PublicKeyType, KeyError> {
    match version {
        StrKeyVersionByte::PublicKeyEd25519 => Ok(PublicKeyType::Ed25519),
        other => Err(unsupported(key_type_name, other)),
    }
}

fn public_key_version(key_type: PublicKeyType) -> StrKeyVersionByte {
    match key_type {
        PublicKeyType::Ed25519 => StrKeyVersionByte::PublicKeyEd25519,
    }
}

impl KeyFunctions for PublicKey {
    type KeyType = PublicKeyType;
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "PublicKey"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::PublicKeyEd25519
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<PublicKeyType, KeyError> {
        public_key_type(Self::key_type_name(), version)
    }

    fn to_key_version(key_type: PublicKeyType) -> StrKeyVersionByte {
        public_key_version(key_type)
    }

    fn key_type(&self) -> PublicKeyType {
        PublicKey::key_type(self)
    }

    fn with_key_type(key_type: PublicKeyType) -> Self {
        PublicKey::zeroed(key_type)
    }

    fn key_value(&self) -> &Uint256 {
        self.value()
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        self.value_mut()
    }
}

impl KeyFunctions for AccountId {
    type KeyType = PublicKeyType;
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "AccountId"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::PublicKeyEd25519
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<PublicKeyType, KeyError> {
        public_key_type(Self::key_type_name(), version)
    }

    fn to_key_version(key_type: PublicKeyType) -> StrKeyVersionByte {
        public_key_version(key_type)
    }

    fn key_type(&self) -> PublicKeyType {
        self.0.key_type()
    }

    fn with_key_type(key_type: PublicKeyType) -> Self {
        Self(PublicKey::zeroed(key_type))
    }

    fn key_value(&self) -> &Uint256 {
        self.0.value()
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        self.0.value_mut()
    }
}

impl KeyFunctions for NodeId {
    type KeyType = PublicKeyType;
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "NodeId"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::PublicKeyEd25519
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<PublicKeyType, KeyError> {
        public_key_type(Self::key_type_name(), version)
    }

    fn to_key_version(key_type: PublicKeyType) -> StrKeyVersionByte {
        public_key_version(key_type)
    }

    fn key_type(&self) -> PublicKeyType {
        self.0.key_type()
    }

    fn with_key_type(key_type: PublicKeyType) -> Self {
        Self(PublicKey::zeroed(key_type))
    }

    fn key_value(&self) -> &Uint256 {
        self.0.value()
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        self.0.value_mut()
    }
}

impl KeyFunctions for SignerKey {
    type KeyType = SignerKeyType;
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "SignerKey"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        matches!(
            version,
            StrKeyVersionByte::PublicKeyEd25519
                | StrKeyVersionByte::PreAuthTx
                | StrKeyVersionByte::HashX
                | StrKeyVersionByte::SignedPayloadEd25519
        )
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<SignerKeyType, KeyError> {
        match version {
            StrKeyVersionByte::PublicKeyEd25519 => Ok(SignerKeyType::Ed25519),
            StrKeyVersionByte::PreAuthTx => Ok(SignerKeyType::PreAuthTx),
            StrKeyVersionByte::HashX => Ok(SignerKeyType::HashX),
            StrKeyVersionByte::SignedPayloadEd25519 => Ok(SignerKeyType::Ed25519SignedPayload),
            other => Err(unsupported(Self::key_type_name(), other)),
        }
    }

    fn to_key_version(key_type: SignerKeyType) -> StrKeyVersionByte {
        match key_type {
            SignerKeyType::Ed25519 => StrKeyVersionByte::PublicKeyEd25519,
            SignerKeyType::PreAuthTx => StrKeyVersionByte::PreAuthTx,
            SignerKeyType::HashX => StrKeyVersionByte::HashX,
            SignerKeyType::Ed25519SignedPayload => StrKeyVersionByte::SignedPayloadEd25519,
        }
    }

    fn key_type(&self) -> SignerKeyType {
        SignerKey::key_type(self)
    }

    fn with_key_type(key_type: SignerKeyType) -> Self {
        SignerKey::zeroed(key_type)
    }

    fn key_value(&self) -> &Uint256 {
        self.value()
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        self.value_mut()
    }

    fn strkey_payload(&self) -> Zeroizing<Vec<u8>> {
        match self {
            SignerKey::Ed25519SignedPayload(signed) => Zeroizing::new(signed.to_strkey_bytes()),
            other => Zeroizing::new(other.value().as_bytes().to_vec()),
        }
    }

    fn from_strkey_payload(key_type: SignerKeyType, payload: &[u8]) -> Result<Self, KeyError> {
        match key_type {
            SignerKeyType::Ed25519SignedPayload => Ok(SignerKey::Ed25519SignedPayload(
                SignedPayload::from_strkey_bytes(payload)?,
            )),
            _ => fixed_from_payload(key_type, payload),
        }
    }
}

impl KeyFunctions for PreAuthTxHash {
    type KeyType = ();
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "PreAuthTxHash"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::PreAuthTx
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<(), KeyError> {
        if Self::is_key_version_supported(version) {
            Ok(())
        } else {
            Err(unsupported(Self::key_type_name(), version))
        }
    }

    fn to_key_version(_: ()) -> StrKeyVersionByte {
        StrKeyVersionByte::PreAuthTx
    }

    fn key_type(&self) {}

    fn with_key_type(_: ()) -> Self {
        Self::default()
    }

    fn key_value(&self) -> &Uint256 {
        &self.0
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        &mut self.0
    }
}

impl KeyFunctions for HashXSigner {
    type KeyType = ();
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "HashXSigner"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::HashX
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<(), KeyError> {
        if Self::is_key_version_supported(version) {
            Ok(())
        } else {
            Err(unsupported(Self::key_type_name(), version))
        }
    }

    fn to_key_version(_: ()) -> StrKeyVersionByte {
        StrKeyVersionByte::HashX
    }

    fn key_type(&self) {}

    fn with_key_type(_: ()) -> Self {
        Self::default()
    }

    fn key_value(&self) -> &Uint256 {
        &self.0
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        &mut self.0
    }
}

impl KeyFunctions for SignedPayloadSigner {
    type KeyType = ();
    type Encoded = String;

    fn key_type_name() -> &'static str {
        "SignedPayloadSigner"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::SignedPayloadEd25519
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<(), KeyError> {
        if Self::is_key_version_supported(version) {
            Ok(())
        } else {
            Err(unsupported(Self::key_type_name(), version))
        }
    }

    fn to_key_version(_: ()) -> StrKeyVersionByte {
        StrKeyVersionByte::SignedPayloadEd25519
    }

    fn key_type(&self) {}

    fn with_key_type(_: ()) -> Self {
        Self::default()
    }

    fn key_value(&self) -> &Uint256 {
        self.0.ed25519()
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        self.0.ed25519_mut()
    }

    fn strkey_payload(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_strkey_bytes())
    }

    fn from_strkey_payload(_: (), payload: &[u8]) -> Result<Self, KeyError> {
        Ok(Self(SignedPayload::from_strkey_bytes(payload)?))
    }
}

impl KeyFunctions for SecretKey {
    type KeyType = ();
    type Encoded = SecretValue;

    fn key_type_name() -> &'static str {
        "SecretKey"
    }

    fn is_key_version_supported(version: StrKeyVersionByte) -> bool {
        version == StrKeyVersionByte::SeedEd25519
    }

    fn to_key_type(version: StrKeyVersionByte) -> Result<(), KeyError> {
        if Self::is_key_version_supported(version) {
            Ok(())
        } else {
            Err(unsupported(Self::key_type_name(), version))
        }
    }

    fn to_key_version(_: ()) -> StrKeyVersionByte {
        StrKeyVersionByte::SeedEd25519
    }

    fn key_type(&self) {}

    fn with_key_type(_: ()) -> Self {
        Self::default()
    }

    fn key_value(&self) -> &Uint256 {
        self.seed()
    }

    fn key_value_mut(&mut self) -> &mut Uint256 {
        self.seed_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported<T: KeyFunctions>() -> Vec<StrKeyVersionByte> {
        StrKeyVersionByte::ALL
            .into_iter()
            .filter(|v| T::is_key_version_supported(*v))
            .collect()
    }

    /// `to_key_type` must succeed exactly where `is_key_version_supported` holds.
    fn assert_domain_consistent<T: KeyFunctions>() {
        for version in StrKeyVersionByte::ALL {
            let result = T::to_key_type(version);
            if T::is_key_version_supported(version) {
                let key_type = result.unwrap();
                assert_eq!(T::to_key_version(key_type), version, "{}", T::key_type_name());
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    KeyError::UnsupportedVersion {
                        key_type: T::key_type_name(),
                        version,
                    }
                );
            }
        }
    }

    #[test]
    fn test_supported_versions() {
        use StrKeyVersionByte::*;

        assert_eq!(supported::<PublicKey>(), vec![PublicKeyEd25519]);
        assert_eq!(supported::<AccountId>(), vec![PublicKeyEd25519]);
        assert_eq!(supported::<NodeId>(), vec![PublicKeyEd25519]);
        assert_eq!(
            supported::<SignerKey>(),
            vec![PublicKeyEd25519, PreAuthTx, HashX, SignedPayloadEd25519]
        );
        assert_eq!(supported::<PreAuthTxHash>(), vec![PreAuthTx]);
        assert_eq!(supported::<HashXSigner>(), vec![HashX]);
        assert_eq!(supported::<SignedPayloadSigner>(), vec![SignedPayloadEd25519]);
        assert_eq!(supported::<SecretKey>(), vec![SeedEd25519]);
    }

    #[test]
    fn test_to_key_type_domain_matches_predicate() {
        assert_domain_consistent::<PublicKey>();
        assert_domain_consistent::<AccountId>();
        assert_domain_consistent::<NodeId>();
        assert_domain_consistent::<SignerKey>();
        assert_domain_consistent::<PreAuthTxHash>();
        assert_domain_consistent::<HashXSigner>();
        assert_domain_consistent::<SignedPayloadSigner>();
        assert_domain_consistent::<SecretKey>();
    }

    #[test]
    fn test_signer_key_type_version_inverse() {
        for key_type in SignerKeyType::ALL {
            let version = SignerKey::to_key_version(key_type);
            assert_eq!(SignerKey::to_key_type(version).unwrap(), key_type);
        }
    }

    #[test]
    fn test_with_key_type_is_zero_valued() {
        let signer = SignerKey::with_key_type(SignerKeyType::HashX);
        assert_eq!(signer.key_type(), SignerKeyType::HashX);
        assert_eq!(*signer.key_value(), Uint256::ZERO);

        let secret = SecretKey::with_key_type(());
        assert_eq!(*secret.key_value(), Uint256::ZERO);
    }

    #[test]
    fn test_fixed_payload_rejects_wrong_length() {
        let err = PreAuthTxHash::from_strkey_payload((), &[0u8; 31]).unwrap_err();
        assert_eq!(
            err,
            KeyError::InvalidLength {
                key_type: "PreAuthTxHash",
                expected: 32,
                actual: 31,
            }
        );
    }

    #[test]
    fn test_key_type_names_are_distinct() {
        let mut names = vec![
            PublicKey::key_type_name(),
            AccountId::key_type_name(),
            NodeId::key_type_name(),
            SignerKey::key_type_name(),
            PreAuthTxHash::key_type_name(),
            HashXSigner::key_type_name(),
            SignedPayloadSigner::key_type_name(),
            SecretKey::key_type_name(),
        ];
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
