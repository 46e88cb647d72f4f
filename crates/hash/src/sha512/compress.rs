// Copyright 2025 Irreducible Inc.

use payload_utils::checked_arithmetics::checked_int_div;
use zeroize::Zeroize;

use super::{BLOCK_SIZE, ROUNDS, ROUND_CONSTANTS};

const WORD_BYTES: usize = std::mem::size_of::<u64>();
const BLOCK_WORDS: usize = checked_int_div(BLOCK_SIZE, WORD_BYTES);

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
	(x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
	(x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
	x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
	x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
	x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
	x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

pub(super) fn compress(state: &mut [u64; 8], block: &[u8]) {
	debug_assert_eq!(block.len(), BLOCK_SIZE);

	let mut schedule = [0u64; ROUNDS];
	for (word, chunk) in schedule[..BLOCK_WORDS]
		.iter_mut()
		.zip(block.chunks_exact(WORD_BYTES))
	{
		*word = u64::from_be_bytes(chunk.try_into().expect("chunk is 8 bytes"));
	}
	for i in BLOCK_WORDS..ROUNDS {
		schedule[i] = small_sigma1(schedule[i - 2])
			.wrapping_add(schedule[i - 7])
			.wrapping_add(small_sigma0(schedule[i - 15]))
			.wrapping_add(schedule[i - 16]);
	}

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
	for (&k, &w) in ROUND_CONSTANTS.iter().zip(&schedule) {
		let t1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(k)
			.wrapping_add(w);
		let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*word = word.wrapping_add(working);
	}

	schedule.zeroize();
}
