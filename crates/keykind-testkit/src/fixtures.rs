//! Test fixtures and helpers.
//!
//! One 32-byte value dressed up as every key kind.

use rand::RngCore;

use keykind_core::{
    AccountId, HashXSigner, KeyError, NodeId, PreAuthTxHash, SecretKey, SignedPayload,
    SignedPayloadSigner, SignerKey, SignerKeyType, Uint256,
};

use crate::generators::signer_key_from_value;

/// A test fixture holding a single key value.
#[derive(Debug, Clone, Copy)]
pub struct KeyFixture {
    pub value: Uint256,
}

impl KeyFixture {
    /// Create a new fixture with a random value.
    pub fn new() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self {
            value: Uint256(bytes),
        }
    }

    /// Create with a fixed value.
    pub fn with_value(bytes: [u8; 32]) -> Self {
        Self {
            value: Uint256(bytes),
        }
    }

    pub fn account_id(&self) -> AccountId {
        AccountId::ed25519(self.value)
    }

    pub fn node_id(&self) -> NodeId {
        NodeId::ed25519(self.value)
    }

    pub fn signer_key(&self, key_type: SignerKeyType) -> SignerKey {
        signer_key_from_value(key_type, self.value)
    }

    pub fn pre_auth_tx_hash(&self) -> PreAuthTxHash {
        PreAuthTxHash(self.value)
    }

    pub fn hash_x_signer(&self) -> HashXSigner {
        HashXSigner(self.value)
    }

    /// Attach `payload` to the fixture's value.
    pub fn signed_payload_signer(&self, payload: &[u8]) -> Result<SignedPayloadSigner, KeyError> {
        Ok(SignedPayloadSigner(SignedPayload::new(
            self.value,
            payload.to_vec(),
        )?))
    }

    pub fn secret_key(&self) -> SecretKey {
        SecretKey::from_seed(*self.value.as_bytes())
    }
}

impl Default for KeyFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures with distinct random values.
pub fn distinct_fixtures(count: usize) -> Vec<KeyFixture> {
    let mut fixtures: Vec<KeyFixture> = Vec::with_capacity(count);
    while fixtures.len() < count {
        let candidate = KeyFixture::new();
        if fixtures.iter().all(|f| f.value != candidate.value) {
            fixtures.push(candidate);
        }
    }
    fixtures
}
