//! # keykind testkit
//!
//! Testing utilities for keykind.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: StrKey text pinned for known values, for cross-platform verification
//! - **Generators**: Proptest strategies for every key kind
//! - **Fixtures**: One random value dressed up as every key kind
//!
//! ## Golden Vectors
//!
//! ```rust
//! use keykind_testkit::vectors::{all_vectors, generate_strkey_from_vector};
//!
//! for vector in all_vectors() {
//!     let text = generate_strkey_from_vector(&vector).unwrap();
//!     assert_eq!(text, vector.expected);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use keykind_core::{convert_key, SignerKey};
//! use keykind_testkit::generators::account_id;
//!
//! proptest! {
//!     #[test]
//!     fn account_widens_to_signer(account in account_id()) {
//!         let signer: SignerKey = convert_key(&account).unwrap();
//!         prop_assert_eq!(signer.value(), account.0.value());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use keykind_testkit::fixtures::KeyFixture;
//!
//! let fixture = KeyFixture::new();
//! let account = fixture.account_id();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{distinct_fixtures, KeyFixture};
pub use generators::signer_key_from_value;
pub use vectors::{all_vectors, generate_strkey_from_vector, verify_all_vectors, GoldenVector};
