//! Credential storage with zeroization.

use zeroize::Zeroize;

/// An API credential that is zeroed in memory on drop and redacted in debug
/// output.
#[derive(Clone, Default)]
pub struct SecretString(String);

impl SecretString {
    /// Wraps a credential.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the wrapped credential.
    ///
    /// Call sites are expected to use the value immediately (header
    /// construction) rather than store it elsewhere.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the credential is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString(***)")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
