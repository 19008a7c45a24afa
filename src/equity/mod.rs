//! Trading212 Equity API.

pub mod rest;
