//! Proptest generators for property-based testing.

use proptest::prelude::*;

use keykind_core::{
    AccountId, HashXSigner, NodeId, PreAuthTxHash, PublicKey, SecretKey, SignedPayload,
    SignedPayloadSigner, SignerKey, SignerKeyType, Uint256, MAX_SIGNED_PAYLOAD_LEN,
};

/// Generate a random key value.
pub fn uint256() -> impl Strategy<Value = Uint256> {
    any::<[u8; 32]>().prop_map(Uint256::from_bytes)
}

/// Generate an Ed25519 PublicKey.
pub fn public_key() -> impl Strategy<Value = PublicKey> {
    uint256().prop_map(PublicKey::ed25519)
}

/// Generate an AccountId.
pub fn account_id() -> impl Strategy<Value = AccountId> {
    uint256().prop_map(AccountId::ed25519)
}

/// Generate a NodeId.
pub fn node_id() -> impl Strategy<Value = NodeId> {
    uint256().prop_map(NodeId::ed25519)
}

/// Generate a PreAuthTxHash.
pub fn pre_auth_tx_hash() -> impl Strategy<Value = PreAuthTxHash> {
    uint256().prop_map(PreAuthTxHash)
}

/// Generate a HashXSigner.
pub fn hash_x_signer() -> impl Strategy<Value = HashXSigner> {
    uint256().prop_map(HashXSigner)
}

/// Generate a SecretKey.
pub fn secret_key() -> impl Strategy<Value = SecretKey> {
    any::<[u8; 32]>().prop_map(SecretKey::from_seed)
}

/// Generate a SignerKeyType.
pub fn signer_key_type() -> impl Strategy<Value = SignerKeyType> {
    prop_oneof![
        Just(SignerKeyType::Ed25519),
        Just(SignerKeyType::PreAuthTx),
        Just(SignerKeyType::HashX),
        Just(SignerKeyType::Ed25519SignedPayload),
    ]
}

/// Generate a signed payload with up to 64 payload bytes.
pub fn signed_payload() -> impl Strategy<Value = SignedPayload> {
    (
        uint256(),
        prop::collection::vec(any::<u8>(), 0..=MAX_SIGNED_PAYLOAD_LEN),
    )
        .prop_filter_map("payload within bounds", |(key, payload)| {
            SignedPayload::new(key, payload).ok()
        })
}

/// Generate a SignedPayloadSigner.
pub fn signed_payload_signer() -> impl Strategy<Value = SignedPayloadSigner> {
    signed_payload().prop_map(SignedPayloadSigner)
}

/// Generate any SignerKey, including signed payloads with attached data.
pub fn signer_key() -> impl Strategy<Value = SignerKey> {
    prop_oneof![
        uint256().prop_map(SignerKey::Ed25519),
        uint256().prop_map(SignerKey::PreAuthTx),
        uint256().prop_map(SignerKey::HashX),
        signed_payload().prop_map(SignerKey::Ed25519SignedPayload),
    ]
}

/// Build a signer of the given type carrying only a key value.
pub fn signer_key_from_value(key_type: SignerKeyType, value: Uint256) -> SignerKey {
    let mut key = SignerKey::zeroed(key_type);
    *key.value_mut() = value;
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use keykind_core::{
        can_convert, convert_key, to_short_string, to_str_key, EncodedKey, KeyError,
        KeyFunctions, PublicKeyType, StrKeyVersionByte, SHORT_STRING_LEN,
    };
    use std::fmt::Debug;

    /// A failed `can_convert` must make `convert_key` fail; a passing one must
    /// keep the value.
    fn check_guarded<T, F>(source: &F) -> Result<(), TestCaseError>
    where
        T: KeyFunctions + Debug,
        F: KeyFunctions,
    {
        let result = convert_key::<T, F>(source);
        if can_convert::<T, F>(source) {
            let converted = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(converted.key_value(), source.key_value());
        } else {
            match result {
                Err(KeyError::UnsupportedVersion { key_type, .. }) => {
                    prop_assert_eq!(key_type, T::key_type_name());
                }
                other => {
                    return Err(TestCaseError::fail(format!("expected rejection, got {:?}", other)));
                }
            }
        }
        Ok(())
    }

    fn check_short_string<T: KeyFunctions>(key: &T) -> Result<(), TestCaseError> {
        let full = to_str_key(key);
        let short = to_short_string(key);
        prop_assert!(short.encoded().len() <= SHORT_STRING_LEN);
        prop_assert_eq!(short.encoded(), &full.encoded()[..SHORT_STRING_LEN]);
        Ok(())
    }

    proptest! {
        #[test]
        fn test_identity_conversion(value in uint256(), key_type in signer_key_type()) {
            let account = AccountId::ed25519(value);
            prop_assert_eq!(convert_key::<AccountId, _>(&account).unwrap(), account);

            let node = NodeId::ed25519(value);
            prop_assert_eq!(convert_key::<NodeId, _>(&node).unwrap(), node);

            let public = PublicKey::ed25519(value);
            prop_assert_eq!(convert_key::<PublicKey, _>(&public).unwrap(), public);

            let pre_auth = PreAuthTxHash(value);
            prop_assert_eq!(convert_key::<PreAuthTxHash, _>(&pre_auth).unwrap(), pre_auth);

            let hash_x = HashXSigner(value);
            prop_assert_eq!(convert_key::<HashXSigner, _>(&hash_x).unwrap(), hash_x);

            let signed = SignedPayloadSigner(SignedPayload::new(value, Vec::new()).unwrap());
            prop_assert_eq!(convert_key::<SignedPayloadSigner, _>(&signed).unwrap(), signed);

            let secret = SecretKey::from_seed(*value.as_bytes());
            prop_assert_eq!(convert_key::<SecretKey, _>(&secret).unwrap(), secret);

            let signer = signer_key_from_value(key_type, value);
            prop_assert_eq!(convert_key::<SignerKey, _>(&signer).unwrap(), signer);
        }

        #[test]
        fn test_conversion_is_guarded_from_signer_key(source in signer_key()) {
            check_guarded::<AccountId, _>(&source)?;
            check_guarded::<NodeId, _>(&source)?;
            check_guarded::<PublicKey, _>(&source)?;
            check_guarded::<SignerKey, _>(&source)?;
            check_guarded::<PreAuthTxHash, _>(&source)?;
            check_guarded::<HashXSigner, _>(&source)?;
            check_guarded::<SignedPayloadSigner, _>(&source)?;
            check_guarded::<SecretKey, _>(&source)?;
        }

        #[test]
        fn test_conversion_is_guarded_between_narrow_kinds(
            account in account_id(),
            pre_auth in pre_auth_tx_hash(),
            hash_x in hash_x_signer(),
            signed in signed_payload_signer(),
            secret in secret_key(),
        ) {
            check_guarded::<NodeId, _>(&account)?;
            check_guarded::<PreAuthTxHash, _>(&account)?;
            check_guarded::<SecretKey, _>(&account)?;
            check_guarded::<SignerKey, _>(&pre_auth)?;
            check_guarded::<HashXSigner, _>(&pre_auth)?;
            check_guarded::<SignerKey, _>(&hash_x)?;
            check_guarded::<AccountId, _>(&hash_x)?;
            check_guarded::<SignerKey, _>(&signed)?;
            check_guarded::<NodeId, _>(&signed)?;
            check_guarded::<AccountId, _>(&secret)?;
            check_guarded::<SignerKey, _>(&secret)?;
        }

        #[test]
        fn test_short_string_is_prefix(
            account in account_id(),
            signer in signer_key(),
            secret in secret_key(),
            signed in signed_payload_signer(),
        ) {
            check_short_string(&account)?;
            check_short_string(&signer)?;
            check_short_string(&secret)?;
            check_short_string(&signed)?;
        }

        #[test]
        fn test_marker_consistency(key_type in signer_key_type()) {
            let version = SignerKey::to_key_version(key_type);
            prop_assert_eq!(SignerKey::to_key_type(version).unwrap(), key_type);
        }

        #[test]
        fn test_text_roundtrip_keeps_signer(signer in signer_key()) {
            let text = to_str_key(&signer);
            let parsed: SignerKey = text.parse().unwrap();
            prop_assert_eq!(parsed, signer);
        }
    }

    #[test]
    fn test_marker_consistency_for_fixed_kinds() {
        assert_eq!(
            AccountId::to_key_type(AccountId::to_key_version(PublicKeyType::Ed25519)).unwrap(),
            PublicKeyType::Ed25519
        );
        assert_eq!(
            NodeId::to_key_type(NodeId::to_key_version(PublicKeyType::Ed25519)).unwrap(),
            PublicKeyType::Ed25519
        );
        assert_eq!(
            PublicKey::to_key_type(PublicKey::to_key_version(PublicKeyType::Ed25519)).unwrap(),
            PublicKeyType::Ed25519
        );
        assert_eq!(PublicKey::to_key_version(PublicKeyType::Ed25519), StrKeyVersionByte::PublicKeyEd25519);

        assert!(PreAuthTxHash::to_key_type(PreAuthTxHash::to_key_version(())).is_ok());
        assert_eq!(PreAuthTxHash::to_key_version(()), StrKeyVersionByte::PreAuthTx);
        assert!(HashXSigner::to_key_type(HashXSigner::to_key_version(())).is_ok());
        assert_eq!(HashXSigner::to_key_version(()), StrKeyVersionByte::HashX);
        assert!(SignedPayloadSigner::to_key_type(SignedPayloadSigner::to_key_version(())).is_ok());
        assert_eq!(
            SignedPayloadSigner::to_key_version(()),
            StrKeyVersionByte::SignedPayloadEd25519
        );
        assert!(SecretKey::to_key_type(SecretKey::to_key_version(())).is_ok());
        assert_eq!(SecretKey::to_key_version(()), StrKeyVersionByte::SeedEd25519);
    }
}
