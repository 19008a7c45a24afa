//! Shared types for the Trading212 API.

pub mod common;

pub use common::*;
