//! A string that must not end up in logs.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A zeroize-on-drop wrapper marking a string as sensitive.
///
/// `SecretValue` has no `Display` implementation and its `Debug` output is
/// redacted, so formatting one by accident does not leak the contents. It is
/// a type-level marker, not a security boundary: [`expose_secret`] hands the
/// string out.
///
/// [`expose_secret`]: SecretValue::expose_secret
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue(String);

impl SecretValue {
    /// Wrap a sensitive string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the wrapped string.
    ///
    /// # Security
    ///
    /// The returned reference should not be stored or logged.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Unwrap into a plain `String`.
    ///
    /// The returned string is NOT zeroized on drop.
    #[must_use]
    pub fn into_inner(mut self) -> String {
        std::mem::take(&mut self.0)
    }

    /// Length of the wrapped string in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the wrapped string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(<redacted>)")
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}
