// Copyright 2025 Irreducible Inc.

//! Entry points for callers that hold optional contexts and buffers.
//!
//! Every handle is an `Option`; a missing handle is reported as an error instead of being
//! dereferenced. A zero-length update with no data is accepted.

use payload_utils::{bail, ensure};
use zeroize::Zeroize;

use crate::{encoding, error::DigestError, hasher::Sha2Core, variant::Variant};

/// Puts `ctx` into the `Ready` state.
pub fn init<V: Variant>(ctx: Option<&mut Sha2Core<V>>) -> Result<(), DigestError> {
	let Some(ctx) = ctx else {
		bail!(DigestError::NullContext);
	};
	ctx.reset();
	Ok(())
}

/// Appends the first `len` bytes of `data` to the message held by `ctx`.
pub fn update<V: Variant>(
	ctx: Option<&mut Sha2Core<V>>,
	data: Option<&[u8]>,
	len: usize,
) -> Result<(), DigestError> {
	let Some(ctx) = ctx else {
		bail!(DigestError::NullContext);
	};
	if len == 0 {
		return Ok(());
	}
	let Some(data) = data else {
		bail!(DigestError::NullData);
	};
	ensure!(
		len <= data.len(),
		DigestError::LengthOutOfBounds {
			len,
			available: data.len()
		}
	);

	ctx.update(&data[..len])
}

/// Writes the digest into `out` and wipes `ctx`.
///
/// The context is wiped even when `out` is missing or too small.
pub fn finalize<V: Variant>(
	ctx: Option<&mut Sha2Core<V>>,
	out: Option<&mut [u8]>,
) -> Result<(), DigestError> {
	let Some(ctx) = ctx else {
		bail!(DigestError::NullContext);
	};
	let Some(out) = out else {
		ctx.zeroize();
		bail!(DigestError::NullOutput);
	};
	ctx.finalize_into(out)
}

/// Hashes the first `len` bytes of `data` into `out` with a fresh context.
pub fn one_shot<V: Variant>(
	data: Option<&[u8]>,
	len: usize,
	out: Option<&mut [u8]>,
) -> Result<(), DigestError> {
	let mut ctx = Sha2Core::<V>::new();
	if let Err(err) = update(Some(&mut ctx), data, len) {
		ctx.zeroize();
		return Err(err);
	}
	finalize(Some(&mut ctx), out)
}

/// Writes the lowercase hex rendering of `digest` into `out`, returning the number of characters.
pub fn to_hex(digest: Option<&[u8]>, out: Option<&mut [u8]>) -> Result<usize, DigestError> {
	let (Some(digest), Some(out)) = (digest, out) else {
		bail!(DigestError::NullInput);
	};
	encoding::encode_hex_into(digest, out)
}

/// Constant-time digest comparison; `Ok(true)` when both digests are equal.
pub fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> Result<bool, DigestError> {
	let (Some(a), Some(b)) = (a, b) else {
		bail!(DigestError::NullInput);
	};
	Ok(encoding::constant_time_eq(a, b))
}
