// Copyright 2025 Irreducible Inc.

use anyhow::{bail, Result};
use clap::ValueEnum;
use payload_hash::{sha256, sha512};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	Sha256,
	Sha512,
}

impl Algorithm {
	/// Name used in BSD-style tag lines.
	pub const fn tag(self) -> &'static str {
		match self {
			Self::Sha256 => "SHA256",
			Self::Sha512 => "SHA512",
		}
	}

	pub const fn digest_size(self) -> usize {
		match self {
			Self::Sha256 => sha256::DIGEST_SIZE,
			Self::Sha512 => sha512::DIGEST_SIZE,
		}
	}

	/// Picks the algorithm whose hex rendering has the length of `expected`.
	pub fn for_expected_hex(expected: &str) -> Result<Self> {
		let len = expected.trim().len();
		for algorithm in [Self::Sha256, Self::Sha512] {
			if len == 2 * algorithm.digest_size() {
				return Ok(algorithm);
			}
		}
		bail!(
			"expected digest has {len} characters, want {} (SHA-256) or {} (SHA-512)",
			2 * sha256::DIGEST_SIZE,
			2 * sha512::DIGEST_SIZE
		)
	}
}

/// The `--algorithm` command-line choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Selection {
	Sha256,
	Sha512,
	#[default]
	All,
}

impl Selection {
	pub fn algorithms(self) -> &'static [Algorithm] {
		match self {
			Self::Sha256 => &[Algorithm::Sha256],
			Self::Sha512 => &[Algorithm::Sha512],
			Self::All => &[Algorithm::Sha256, Algorithm::Sha512],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_for_expected_hex() {
		assert_eq!(Algorithm::for_expected_hex(&"0".repeat(64)).unwrap(), Algorithm::Sha256);
		assert_eq!(Algorithm::for_expected_hex(&"F".repeat(128)).unwrap(), Algorithm::Sha512);
		assert_eq!(
			Algorithm::for_expected_hex(&format!("{}\n", "a".repeat(64))).unwrap(),
			Algorithm::Sha256
		);
		assert!(Algorithm::for_expected_hex(&"0".repeat(63)).is_err());
		assert!(Algorithm::for_expected_hex("").is_err());
	}

	#[test]
	fn test_selection() {
		assert_eq!(Selection::default().algorithms().len(), 2);
		assert_eq!(Selection::Sha512.algorithms(), &[Algorithm::Sha512]);
		assert_eq!(Selection::from_str("sha256", true), Ok(Selection::Sha256));
	}
}
