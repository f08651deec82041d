//! # keykind core
//!
//! Typed kinds of 32-byte key material, conversion between compatible kinds,
//! and their StrKey text form.
//!
//! This crate contains no I/O and no shared state. Every function is pure.
//!
//! ## Key Types
//!
//! - [`AccountId`], [`NodeId`], [`PublicKey`] - Ed25519 public keys (`G...`)
//! - [`SignerKey`] - union over every signer variant
//! - [`PreAuthTxHash`] (`T...`), [`HashXSigner`] (`X...`),
//!   [`SignedPayloadSigner`] (`P...`) - single-variant signer kinds
//! - [`SecretKey`] - Ed25519 seed (`S...`), only rendered as a [`SecretValue`]
//!
//! ## Trait Table
//!
//! Each kind implements [`KeyFunctions`], which decides which version markers
//! the kind accepts. [`can_convert`] and [`convert_key`] are built on it:
//!
//! ```rust
//! use keykind_core::{can_convert, convert_key, to_short_string, to_str_key};
//! use keykind_core::{AccountId, NodeId, PreAuthTxHash, Uint256};
//!
//! let mut bytes = [0u8; 32];
//! bytes[31] = 1;
//! let account = AccountId::ed25519(Uint256(bytes));
//!
//! assert_eq!(
//!     to_str_key(&account),
//!     "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAC6PV"
//! );
//! assert_eq!(to_short_string(&account), "GAAAA");
//!
//! let node: NodeId = convert_key(&account).unwrap();
//! assert_eq!(node, NodeId::ed25519(Uint256(bytes)));
//! assert!(!can_convert::<PreAuthTxHash, _>(&account));
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod key_functions;
pub mod keys;
pub mod secret;
pub mod strkey;
pub mod types;

pub use convert::{can_convert, convert_key};
pub use error::{KeyError, Result, StrKeyError};
pub use format::{from_str_key, key_version_size, to_short_string, to_str_key, SHORT_STRING_LEN};
pub use key_functions::{EncodedKey, KeyFunctions};
pub use keys::{
    AccountId, HashXSigner, NodeId, PreAuthTxHash, PublicKey, PublicKeyType, SecretKey,
    SignedPayload, SignedPayloadSigner, SignerKey, SignerKeyType, MAX_SIGNED_PAYLOAD_LEN,
};
pub use secret::SecretValue;
pub use strkey::StrKeyVersionByte;
pub use types::{Uint256, KEY_VALUE_LEN};
