//! # Builders
//!
//! Builder patterns for configuring cryptographic operations.
//!
//! ## Modules
//!
//! - [`pbkdf2_builder`] - Builder for PBKDF2-HMAC-SHA256 key derivation
//!
//! The transcode-level configuration lives in
//! [`TranscodeOptions`](crate::transcoder::TranscodeOptions).

pub mod pbkdf2_builder;

pub use pbkdf2_builder::Pbkdf2Builder;
