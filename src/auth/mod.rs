//! Authentication module for the Trading212 API.
//!
//! Trading212 authenticates with a single API key sent verbatim in the
//! `Authorization` header. This module provides secure storage for that key
//! and pluggable ways to supply it.

mod credentials;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
