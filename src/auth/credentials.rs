//! Credential management for Trading212 API authentication.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

/// API credentials holding the Trading212 API key.
///
/// The key is both the account identifier and the secret, so the whole value
/// is stored behind [`SecretString`] and redacted in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Get the API key for building the `Authorization` header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Check whether the stored key is empty.
    pub fn is_empty(&self) -> bool {
        self.api_key.expose_secret().is_empty()
    }

    /// A masked rendering of the key showing only the last 4 characters.
    pub fn masked(&self) -> String {
        let key = self.api_key.expose_secret();
        let suffix = if key.len() > 4 {
            &key[key.len() - 4..]
        } else {
            key
        };
        format!("****{suffix}")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.masked())
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how the API key is retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds the API key directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from an environment variable.
///
/// By default, reads from `TRADING212_API_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variable.
    ///
    /// Reads `TRADING212_API_KEY`.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env() -> Self {
        Self::from_env_var("TRADING212_API_KEY")
    }

    /// Create credentials from a custom environment variable name.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env_var(key_var: &str) -> Self {
        let api_key = std::env::var(key_var)
            .unwrap_or_else(|_| panic!("Environment variable {key_var} not set"));

        Self {
            credentials: Credentials::new(api_key),
        }
    }

    /// Try to create credentials from the default environment variable.
    ///
    /// Returns `None` if the environment variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var("TRADING212_API_KEY")
    }

    /// Try to create credentials from a custom environment variable name.
    ///
    /// Returns `None` if the environment variable is not set.
    pub fn try_from_env_var(key_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
