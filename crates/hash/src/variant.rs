// Copyright 2025 Irreducible Inc.

use digest::generic_array::ArrayLength;
use zeroize::Zeroize;

use crate::counter::BitCounter;

/// Static description of one SHA-2 family member.
///
/// The incremental hasher, the padding and the `digest` integration are written once against this
/// trait. Only the compression function and the state serialisation depend on the word width, so
/// they live with each implementor.
pub trait Variant: Clone + 'static {
	/// The eight chaining words.
	type State: Copy + Zeroize;
	/// One input block as raw bytes.
	type Block: Copy + AsRef<[u8]> + AsMut<[u8]> + Zeroize;
	/// The finished digest as raw bytes.
	type Digest: Copy + AsRef<[u8]> + AsMut<[u8]>;
	/// Running message length in bits.
	type BitCounter: BitCounter;

	/// Typenum mirrors of `DIGEST_SIZE` and `BLOCK_SIZE` for the `digest` traits.
	type OutputSize: ArrayLength<u8> + 'static;
	type BlockSize: ArrayLength<u8> + 'static;

	/// Human readable algorithm name, used in errors and traces.
	const NAME: &'static str;
	const BLOCK_SIZE: usize;
	const DIGEST_SIZE: usize;

	const INITIAL_STATE: Self::State;
	const ZERO_BLOCK: Self::Block;
	const ZERO_DIGEST: Self::Digest;

	/// Absorbs one block of exactly `BLOCK_SIZE` bytes into `state`.
	fn compress(state: &mut Self::State, block: &[u8]);

	/// Writes the chaining words big-endian into `out`, which is exactly `DIGEST_SIZE` bytes.
	fn write_digest(state: &Self::State, out: &mut [u8]);
}
