// Copyright 2025 Irreducible Inc.

//! Streams files through the SHA-256 and SHA-512 hashers in fixed windows.

pub mod algorithm;
pub mod report;
pub mod stream;

pub use algorithm::{Algorithm, Selection};
pub use stream::{
	hash_file, hash_files, hash_reader, hash_reader_with_progress, StreamDigests,
	DEFAULT_CHUNK_SIZE,
};
