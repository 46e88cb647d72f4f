// Copyright 2023-2025 Irreducible Inc.

//! Streaming SHA-256 and SHA-512 (FIPS 180-4).
//!
//! [`Sha256`] and [`Sha512`] are two instantiations of the generic [`Sha2Core`] hasher. Input is
//! fed incrementally with [`Sha2Core::update`] and the digest is produced once by one of the
//! finalize methods, after which the context is wiped. The [`handle`] module exposes the same
//! operations over optional handles for callers that cannot guarantee their buffers exist.

pub mod counter;
mod digest_traits;
pub mod encoding;
pub mod error;
pub mod handle;
pub mod hasher;
pub mod padding;
pub mod sha256;
pub mod sha512;
pub mod variant;


pub use digest;
pub use encoding::{constant_time_eq, to_hex, verify_hex};
pub use error::DigestError;
pub use hasher::{Phase, Sha2Core};
pub use sha256::{sha256, Sha256, Sha256Variant};
pub use sha512::{sha512, Sha512, Sha512Variant};
pub use variant::Variant;
