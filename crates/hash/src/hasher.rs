// Copyright 2023-2025 Irreducible Inc.

use std::{cmp, fmt, marker::PhantomData};

use zeroize::Zeroize;

use crate::{
	counter::BitCounter,
	error::DigestError,
	padding::{write_padding, MAX_PADDING_LEN},
	variant::Variant,
};

/// Lifecycle of a hash context.
///
/// `Finalized` is terminal: the context has been wiped and must be [`Sha2Core::reset`] before it
/// accepts input again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Ready,
	Accumulating,
	Finalized,
}

/// Streaming SHA-2 hash context, generic over the family member.
///
/// Each computation owns its context exclusively. Contexts share nothing, so independent contexts
/// can be driven from different threads without synchronisation.
pub struct Sha2Core<V: Variant> {
	state: V::State,
	bit_count: V::BitCounter,
	buffer: V::Block,
	/// Invariant: `buffer_len` is always strictly less than `V::BLOCK_SIZE` between calls.
	buffer_len: usize,
	phase: Phase,
	_variant: PhantomData<V>,
}

impl<V: Variant> Sha2Core<V> {
	pub fn new() -> Self {
		Self {
			state: V::INITIAL_STATE,
			bit_count: V::BitCounter::default(),
			buffer: V::ZERO_BLOCK,
			buffer_len: 0,
			phase: Phase::Ready,
			_variant: PhantomData,
		}
	}

	/// Re-initialises the context, whatever state it is in.
	pub fn reset(&mut self) {
		*self = Self::new();
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Number of input bits absorbed so far. Padding is never counted.
	pub fn bits_processed(&self) -> u128 {
		self.bit_count.bits()
	}

	/// Appends `data` to the message.
	///
	/// An empty slice is a no-op. On [`DigestError::CounterOverflow`] nothing is absorbed, but the
	/// computation should be treated as void and the context reset.
	///
	/// # Panics
	///
	/// Panics if the context has already been finalized.
	pub fn update(&mut self, data: &[u8]) -> Result<(), DigestError> {
		self.assert_live();
		if data.is_empty() {
			return Ok(());
		}

		let Some(bit_count) = self.bit_count.checked_add_bytes(data.len()) else {
			tracing::warn!(
				algorithm = V::NAME,
				bits_processed = %self.bit_count.bits(),
				len = data.len(),
				"message length would overflow the bit counter"
			);
			return Err(DigestError::CounterOverflow {
				algorithm: V::NAME,
			});
		};
		self.bit_count = bit_count;
		self.phase = Phase::Accumulating;
		self.absorb(data);

		Ok(())
	}

	/// Buffered block-wise absorption shared by message bytes and padding.
	fn absorb(&mut self, mut data: &[u8]) {
		if self.buffer_len != 0 {
			let to_copy = cmp::min(data.len(), V::BLOCK_SIZE - self.buffer_len);
			self.buffer.as_mut()[self.buffer_len..self.buffer_len + to_copy]
				.copy_from_slice(&data[..to_copy]);
			self.buffer_len += to_copy;
			data = &data[to_copy..];

			if self.buffer_len == V::BLOCK_SIZE {
				V::compress(&mut self.state, self.buffer.as_ref());
				self.buffer_len = 0;
			}
		}

		// Whole blocks are compressed straight from the input.
		let mut blocks = data.chunks_exact(V::BLOCK_SIZE);
		for block in &mut blocks {
			V::compress(&mut self.state, block);
		}

		let remaining = blocks.remainder();
		if !remaining.is_empty() {
			self.buffer.as_mut()[..remaining.len()].copy_from_slice(remaining);
			self.buffer_len = remaining.len();
		}
	}

	/// Pads the message, writes the digest into the first `V::DIGEST_SIZE` bytes of `out` and
	/// wipes the context.
	///
	/// The context is wiped on failure too.
	///
	/// # Panics
	///
	/// Panics if the context has already been finalized.
	pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), DigestError> {
		self.assert_live();
		if out.len() < V::DIGEST_SIZE {
			self.zeroize();
			return Err(DigestError::OutputTooSmall {
				required: V::DIGEST_SIZE,
				actual: out.len(),
			});
		}

		self.finalize_unchecked(&mut out[..V::DIGEST_SIZE]);
		Ok(())
	}

	/// Consumes the context and returns the digest.
	pub fn finalize(mut self) -> V::Digest {
		let mut digest = V::ZERO_DIGEST;
		self.finalize_unchecked(digest.as_mut());
		digest
	}

	/// Writes the digest and resets the context for a new message.
	pub fn finalize_reset(&mut self) -> V::Digest {
		let mut digest = V::ZERO_DIGEST;
		self.finalize_unchecked(digest.as_mut());
		self.reset();
		digest
	}

	/// `out` is exactly `V::DIGEST_SIZE` bytes.
	pub(crate) fn finalize_unchecked(&mut self, out: &mut [u8]) {
		self.assert_live();
		let mut padding = [0u8; MAX_PADDING_LEN];
		let padding_len =
			write_padding(&mut padding, V::BLOCK_SIZE, self.buffer_len, &self.bit_count);
		self.absorb(&padding[..padding_len]);
		debug_assert_eq!(self.buffer_len, 0);

		V::write_digest(&self.state, out);
		tracing::trace!(algorithm = V::NAME, bits = %self.bit_count.bits(), "finalized digest");

		padding.zeroize();
		self.zeroize();
	}

	fn assert_live(&self) {
		assert!(
			self.phase != Phase::Finalized,
			"{} context used after finalization without being reset",
			V::NAME
		);
	}
}

impl<V: Variant> Default for Sha2Core<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: Variant> Clone for Sha2Core<V> {
	fn clone(&self) -> Self {
		Self {
			state: self.state,
			bit_count: self.bit_count,
			buffer: self.buffer,
			buffer_len: self.buffer_len,
			phase: self.phase,
			_variant: PhantomData,
		}
	}
}

/// Wipes all sensitive state and marks the context as finalized.
impl<V: Variant> Zeroize for Sha2Core<V> {
	fn zeroize(&mut self) {
		self.state.zeroize();
		self.bit_count.zeroize();
		self.buffer.zeroize();
		self.buffer_len.zeroize();
		self.phase = Phase::Finalized;
	}
}

impl<V: Variant> Drop for Sha2Core<V> {
	fn drop(&mut self) {
		self.zeroize();
	}
}

impl<V: Variant> fmt::Debug for Sha2Core<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Sha2Core")
			.field("algorithm", &V::NAME)
			.field("phase", &self.phase)
			.finish_non_exhaustive()
	}
}
