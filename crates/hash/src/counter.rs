// Copyright 2025 Irreducible Inc.

//! Message-length bookkeeping for the two SHA-2 families.
//!
//! The counters track the number of *input* bits. Padding never goes through them.

use std::fmt::Debug;

use zeroize::Zeroize;

/// Largest message accepted by the 64-byte-block family, in bytes.
///
/// This is `(2^64 - 1) / 8` rounded down, so the bit length always fits the 8-byte length field.
pub const MAX_MESSAGE_BYTES_64: u64 = (1 << 61) - 1;

/// Running bit count of a hash computation together with its on-the-wire length field.
pub trait BitCounter: Debug + Default + Clone + Copy + Zeroize {
	/// Size in bytes of the big-endian length field appended by the padding.
	const LENGTH_FIELD_SIZE: usize;

	/// Returns the counter advanced by `len` bytes, or `None` if the result is not representable.
	fn checked_add_bytes(self, len: usize) -> Option<Self>;

	/// Writes the bit count as a big-endian integer of exactly `LENGTH_FIELD_SIZE` bytes.
	fn write_length_field(&self, out: &mut [u8]);

	/// The bit count as a plain integer.
	fn bits(&self) -> u128;
}

/// Single 64-bit counter of the 64-byte-block family.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct BitCount64(u64);

impl BitCount64 {
	pub(crate) const fn from_bits(bits: u64) -> Self {
		Self(bits)
	}
}

impl BitCounter for BitCount64 {
	const LENGTH_FIELD_SIZE: usize = 8;

	fn checked_add_bytes(self, len: usize) -> Option<Self> {
		let bytes = (self.0 >> 3).checked_add(u64::try_from(len).ok()?)?;
		(bytes <= MAX_MESSAGE_BYTES_64).then_some(Self(bytes << 3))
	}

	fn write_length_field(&self, out: &mut [u8]) {
		out.copy_from_slice(&self.0.to_be_bytes());
	}

	fn bits(&self) -> u128 {
		self.0.into()
	}
}

/// 128-bit counter of the 128-byte-block family.
///
/// Stored as a native `u128`; `low`/`high` expose the two 64-bit halves of the length field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct BitCount128(u128);

impl BitCount128 {
	pub(crate) const fn from_bits(bits: u128) -> Self {
		Self(bits)
	}

	pub fn low(&self) -> u64 {
		self.0 as u64
	}

	pub fn high(&self) -> u64 {
		(self.0 >> 64) as u64
	}
}

impl BitCounter for BitCount128 {
	const LENGTH_FIELD_SIZE: usize = 16;

	fn checked_add_bytes(self, len: usize) -> Option<Self> {
		// `len` is at most 2^64 - 1, so shifting it by three bits cannot leave the u128 range.
		let bits = u128::try_from(len).ok()? << 3;
		self.0.checked_add(bits).map(Self)
	}

	fn write_length_field(&self, out: &mut [u8]) {
		out.copy_from_slice(&self.0.to_be_bytes());
	}

	fn bits(&self) -> u128 {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bit_count_64_accumulates_bits() {
		let counter = BitCount64::default()
			.checked_add_bytes(3)
			.and_then(|c| c.checked_add_bytes(61))
			.unwrap();
		assert_eq!(counter.bits(), 64 * 8);
	}

	#[test]
	fn test_bit_count_64_limit_is_inclusive() {
		let counter = BitCount64::from_bits((MAX_MESSAGE_BYTES_64 - 1) << 3);
		let at_limit = counter.checked_add_bytes(1).unwrap();
		assert_eq!(at_limit.bits(), u128::from(MAX_MESSAGE_BYTES_64) << 3);
		assert_eq!(at_limit.checked_add_bytes(1), None);
		assert_eq!(at_limit.checked_add_bytes(0), Some(at_limit));
	}

	#[test]
	fn test_bit_count_64_rejects_wrapping_byte_total() {
		let counter = BitCount64::from_bits(8);
		assert_eq!(counter.checked_add_bytes(usize::MAX), None);
	}

	#[test]
	fn test_bit_count_64_length_field() {
		let counter = BitCount64::default().checked_add_bytes(3).unwrap();
		let mut field = [0xffu8; 8];
		counter.write_length_field(&mut field);
		assert_eq!(field, [0, 0, 0, 0, 0, 0, 0, 24]);
	}

	#[test]
	fn test_bit_count_128_carries_into_high_word() {
		let counter = BitCount128::from_bits(u128::from(u64::MAX) - 7);
		let counter = counter.checked_add_bytes(2).unwrap();
		assert_eq!(counter.high(), 1);
		assert_eq!(counter.low(), 8);
	}

	#[test]
	fn test_bit_count_128_overflow() {
		let counter = BitCount128::from_bits(u128::MAX - 16);
		assert_eq!(counter.checked_add_bytes(2).map(|c| c.bits()), Some(u128::MAX));
		assert_eq!(counter.checked_add_bytes(3), None);

		// Landing exactly one past the top wraps and must be rejected.
		let counter = BitCount128::from_bits(u128::MAX - 15);
		assert!(counter.checked_add_bytes(1).is_some());
		assert_eq!(counter.checked_add_bytes(2), None);
	}

	#[test]
	fn test_bit_count_128_length_field_high_word_first() {
		let counter = BitCount128::from_bits((5u128 << 64) | 0x0102);
		let mut field = [0u8; 16];
		counter.write_length_field(&mut field);
		assert_eq!(&field[..8], &5u64.to_be_bytes());
		assert_eq!(&field[8..], &0x0102u64.to_be_bytes());
	}
}
