//! Secure credential handling using the secrecy crate
//!
//! The API client secret is held in a `Secret<SecretValue>` so it is zeroed
//! on drop, redacted in `Debug` output, and only readable through
//! `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use asset_export::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let secret = secret_string("my-client-secret".to_string());
//! let exposed = secret.expose_secret().as_str();
//! assert_eq!(exposed, "my-client-secret");
//!
//! // Debug output is redacted
//! assert!(!format!("{secret:?}").contains("my-client-secret"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Zeroize)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl SecretValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the secret value is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Wrap a String in a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("s3cr3t".to_string());
        assert!(secret.expose_secret() == "s3cr3t");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-data".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-data"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_secret_is_blank() {
        assert!(secret_string(String::new()).expose_secret().is_blank());
        assert!(secret_string("  ".to_string()).expose_secret().is_blank());
        assert!(!secret_string("x".to_string()).expose_secret().is_blank());
    }
}
