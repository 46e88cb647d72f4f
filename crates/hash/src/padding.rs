// Copyright 2025 Irreducible Inc.

//! Merkle–Damgård strengthening as used by SHA-2.
//!
//! The padded message is `M || 0x80 || 0x00* || len(M)`, where `len(M)` is the big-endian bit
//! length and the total is a multiple of the block size. The tail is produced into a scratch buffer
//! and fed through the same absorb path as regular input.

use crate::counter::BitCounter;

const PADDING_START: u8 = 0x80;

/// Largest block size of the family.
pub const MAX_BLOCK_SIZE: usize = 128;

/// Upper bound on the padding tail: it never spans more than two blocks.
pub const MAX_PADDING_LEN: usize = 2 * MAX_BLOCK_SIZE;

/// Number of terminator and zero bytes that precede the length field, given `buffered` bytes
/// already waiting in the current block.
pub fn fill_len(block_size: usize, length_field_size: usize, buffered: usize) -> usize {
	debug_assert!(buffered < block_size);

	let threshold = block_size - length_field_size;
	if buffered < threshold {
		threshold - buffered
	} else {
		// The length field does not fit behind the terminator; spill into one more block.
		block_size + threshold - buffered
	}
}

/// Writes the padding tail for a message that left `buffered` bytes in its last block and returns
/// the number of bytes written.
///
/// `out` must hold at least [`MAX_PADDING_LEN`] bytes.
pub fn write_padding<C: BitCounter>(
	out: &mut [u8],
	block_size: usize,
	buffered: usize,
	bit_count: &C,
) -> usize {
	let fill = fill_len(block_size, C::LENGTH_FIELD_SIZE, buffered);
	let total = fill + C::LENGTH_FIELD_SIZE;

	out[0] = PADDING_START;
	out[1..fill].fill(0);
	bit_count.write_length_field(&mut out[fill..total]);

	total
}
