//! Authentication primitives.
//!
//! - [`jwt`] -- verification of bearer tokens issued by the identity provider.

pub mod jwt;
