// Copyright 2025 Irreducible Inc.

//! [`digest`] trait implementations, so the hashers plug into code written against
//! [`digest::Digest`].

use core::fmt;

use digest::{
	core_api::{AlgorithmName, BlockSizeUser},
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::{hasher::Sha2Core, variant::Variant};

impl<V: Variant> HashMarker for Sha2Core<V> {}

impl<V: Variant> Update for Sha2Core<V> {
	/// # Panics
	///
	/// Panics if the total message length would overflow the bit counter (more than `2^61 - 1`
	/// bytes for SHA-256, `2^125 - 1` bytes for SHA-512), or if the context has been finalized.
	/// Use [`Sha2Core::update`] to get [`crate::DigestError::CounterOverflow`] instead.
	fn update(&mut self, data: &[u8]) {
		Sha2Core::update(self, data).expect("message length is within the counter range");
	}
}

impl<V: Variant> OutputSizeUser for Sha2Core<V> {
	type OutputSize = V::OutputSize;
}

impl<V: Variant> BlockSizeUser for Sha2Core<V> {
	type BlockSize = V::BlockSize;
}

impl<V: Variant> FixedOutput for Sha2Core<V> {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		self.finalize_unchecked(out);
	}
}

impl<V: Variant> Reset for Sha2Core<V> {
	fn reset(&mut self) {
		Sha2Core::reset(self);
	}
}

impl<V: Variant> FixedOutputReset for Sha2Core<V> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_unchecked(out);
		Sha2Core::reset(self);
	}
}

impl<V: Variant> AlgorithmName for Sha2Core<V> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(V::NAME)
	}
}

#[cfg(test)]
mod tests {
	use digest::Digest;
	use hex_literal::hex;

	use crate::{sha256::Sha256, sha512::Sha512};

	#[test]
	fn test_digest_api() {
		let digest = <Sha256 as Digest>::digest(b"abc");
		assert_eq!(
			digest[..],
			hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
		);
	}

	#[test]
	fn test_digest_finalize_reset() {
		let mut hasher = <Sha512 as Digest>::new();
		Digest::update(&mut hasher, b"ab");
		Digest::update(&mut hasher, b"c");
		let first = Digest::finalize_reset(&mut hasher);
		assert_eq!(
			first[..],
			hex!(
				"ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
				"2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
			)
		);

		Digest::update(&mut hasher, b"abc");
		assert_eq!(Digest::finalize(hasher), first);
	}

	#[test]
	fn test_sizes() {
		assert_eq!(<Sha256 as Digest>::output_size(), 32);
		assert_eq!(<Sha512 as Digest>::output_size(), 64);
	}
}
