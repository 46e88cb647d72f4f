// Copyright 2024 Irreducible Inc.

/// Exact integer division, usable in const context.
///
/// Panics (or fails const evaluation) when `a` is not a multiple of `b`, e.g. a block size that is
/// not a whole number of words.
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a, "dividend is not a multiple of the divisor");

	result
}
