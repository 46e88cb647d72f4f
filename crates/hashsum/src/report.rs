// Copyright 2025 Irreducible Inc.

use std::path::Path;

use anyhow::{Context, Result};
use payload_hash::{to_hex, verify_hex};

use crate::{algorithm::Algorithm, stream::StreamDigests};

/// `SHA256 (path) = <hex>`, the BSD tag format understood by `sha256sum -c`.
pub fn tag_line(algorithm: Algorithm, path: &Path, digest: &[u8]) -> String {
	format!("{} ({}) = {}", algorithm.tag(), path.display(), to_hex(digest))
}

/// Compares the digest selected by the length of `expected` against it, ignoring case.
pub fn verify(digests: &StreamDigests, expected: &str) -> Result<bool> {
	let algorithm = Algorithm::for_expected_hex(expected)?;
	let digest = digests
		.get(algorithm)
		.with_context(|| format!("no {} digest was computed", algorithm.tag()))?;

	Ok(verify_hex(digest, expected)?)
}

/// `path: OK` or `path: FAILED`.
pub fn verify_line(path: &Path, ok: bool) -> String {
	format!("{}: {}", path.display(), if ok { "OK" } else { "FAILED" })
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;
	use crate::stream::hash_reader;

	const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

	#[test]
	fn test_tag_line() {
		let digest = payload_hash::sha256(b"abc").unwrap();
		assert_eq!(
			tag_line(Algorithm::Sha256, Path::new("dir/abc.txt"), &digest),
			format!("SHA256 (dir/abc.txt) = {ABC_SHA256}")
		);
	}

	#[test]
	fn test_verify() {
		let digests = hash_reader(Cursor::new(b"abc"), &[Algorithm::Sha256], 1024).unwrap();
		assert!(verify(&digests, ABC_SHA256).unwrap());
		assert!(verify(&digests, &ABC_SHA256.to_uppercase()).unwrap());
		assert!(!verify(&digests, &ABC_SHA256.replace("ba78", "ba79")).unwrap());
	}

	#[test]
	fn test_verify_missing_algorithm() {
		let digests = hash_reader(Cursor::new(b"abc"), &[Algorithm::Sha256], 1024).unwrap();
		assert!(verify(&digests, &"0".repeat(128)).is_err());
	}

	#[test]
	fn test_verify_invalid_hex() {
		let digests = hash_reader(Cursor::new(b"abc"), &[Algorithm::Sha256], 1024).unwrap();
		assert!(verify(&digests, &"g".repeat(64)).is_err());
	}

	#[test]
	fn test_verify_line() {
		assert_eq!(verify_line(Path::new("a.img"), true), "a.img: OK");
		assert_eq!(verify_line(Path::new("a.img"), false), "a.img: FAILED");
	}
}
