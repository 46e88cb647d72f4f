// Copyright 2025 Irreducible Inc.

//! Hex rendering and comparison of finished digests.

use subtle::ConstantTimeEq;

use crate::error::DigestError;

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Renders `digest` as lowercase hex, two characters per byte.
pub fn to_hex(digest: &[u8]) -> String {
	let mut out = vec![0u8; 2 * digest.len()];
	encode_hex_into(digest, &mut out).expect("buffer sized for the digest");
	String::from_utf8(out).expect("hex alphabet is ASCII")
}

/// Writes the lowercase hex rendering of `digest` into the start of `out` and returns the number
/// of characters written. Nothing else in `out` is touched; no terminator is appended.
pub fn encode_hex_into(digest: &[u8], out: &mut [u8]) -> Result<usize, DigestError> {
	let required = 2 * digest.len();
	if out.len() < required {
		return Err(DigestError::OutputTooSmall {
			required,
			actual: out.len(),
		});
	}

	for (pair, &byte) in out.chunks_exact_mut(2).zip(digest) {
		pair[0] = HEX_ALPHABET[(byte >> 4) as usize];
		pair[1] = HEX_ALPHABET[(byte & 0x0f) as usize];
	}
	Ok(required)
}

/// Compares two digests without branching on their contents.
///
/// Every byte pair is visited regardless of where the first difference is. Slices of different
/// lengths are unequal; lengths are public so that check is not constant-time.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
	diff.ct_eq(&0).into()
}

/// Checks `digest` against a caller-supplied hex string.
///
/// The hex string is accepted in either case. A string of the wrong length never matches;
/// a string of the right length containing non-hex characters is rejected with
/// [`DigestError::InvalidHex`].
pub fn verify_hex(digest: &[u8], expected: &str) -> Result<bool, DigestError> {
	let expected = expected.trim();
	if expected.len() != 2 * digest.len() {
		return Ok(false);
	}

	let mut decoded = vec![0u8; digest.len()];
	hex::decode_to_slice(expected, &mut decoded).map_err(|_| DigestError::InvalidHex)?;
	Ok(constant_time_eq(digest, &decoded))
}
