// Copyright 2025 Irreducible Inc.

//! Chunked hashing of readers and files.

use std::{
	fs::File,
	io::{self, Read},
	path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use bytesize::ByteSize;
use payload_hash::{sha256, sha512, Sha256, Sha512};
use rayon::prelude::*;
use tracing::instrument;

use crate::algorithm::Algorithm;

/// Default window fed to the hashers per read.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 20;

/// Digests of one input for the algorithms that were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamDigests {
	pub bytes: u64,
	sha256: Option<[u8; sha256::DIGEST_SIZE]>,
	sha512: Option<[u8; sha512::DIGEST_SIZE]>,
}

impl StreamDigests {
	pub fn get(&self, algorithm: Algorithm) -> Option<&[u8]> {
		match algorithm {
			Algorithm::Sha256 => self.sha256.as_ref().map(|digest| digest.as_slice()),
			Algorithm::Sha512 => self.sha512.as_ref().map(|digest| digest.as_slice()),
		}
	}
}

/// Reads `reader` to the end in windows of at most `chunk_size` bytes, feeding every window to one
/// context per requested algorithm.
pub fn hash_reader<R: Read>(
	reader: R,
	algorithms: &[Algorithm],
	chunk_size: usize,
) -> Result<StreamDigests> {
	hash_reader_with_progress(reader, algorithms, chunk_size, |_| {})
}

/// Like [`hash_reader`], calling `on_progress` with the running byte total after every window.
pub fn hash_reader_with_progress<R: Read>(
	mut reader: R,
	algorithms: &[Algorithm],
	chunk_size: usize,
	mut on_progress: impl FnMut(u64),
) -> Result<StreamDigests> {
	ensure!(chunk_size > 0, "chunk size must be non-zero");

	let mut sha256_ctx = algorithms.contains(&Algorithm::Sha256).then(Sha256::new);
	let mut sha512_ctx = algorithms.contains(&Algorithm::Sha512).then(Sha512::new);

	let mut buffer = vec![0u8; chunk_size];
	let mut bytes = 0u64;
	loop {
		let read = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(read) => read,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
			Err(err) => return Err(err).context("failed to read input"),
		};

		let window = &buffer[..read];
		if let Some(ctx) = sha256_ctx.as_mut() {
			ctx.update(window)?;
		}
		if let Some(ctx) = sha512_ctx.as_mut() {
			ctx.update(window)?;
		}

		bytes += read as u64;
		tracing::trace!(read, total = bytes, "hashed window");
		on_progress(bytes);
	}

	Ok(StreamDigests {
		bytes,
		sha256: sha256_ctx.map(Sha256::finalize),
		sha512: sha512_ctx.map(Sha512::finalize),
	})
}

/// Tracks how far a file of known size has been hashed, in tenths.
#[derive(Debug, Clone, Copy)]
struct ProgressSteps {
	total: u64,
	reported: u64,
}

impl ProgressSteps {
	const STEPS: u64 = 10;

	fn new(total: u64) -> Self {
		Self { total, reported: 0 }
	}

	/// Returns the completed percentage when `done` crosses into a new tenth.
	fn advance(&mut self, done: u64) -> Option<u64> {
		if self.total == 0 {
			return None;
		}
		let step = (u128::from(done.min(self.total)) * u128::from(Self::STEPS)
			/ u128::from(self.total)) as u64;
		(step > self.reported).then(|| {
			self.reported = step;
			step * (100 / Self::STEPS)
		})
	}
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn hash_file(
	path: &Path,
	algorithms: &[Algorithm],
	chunk_size: usize,
) -> Result<StreamDigests> {
	let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
	// Size is only used for progress, so unknown sizes just disable it.
	let size = file.metadata().map(|metadata| metadata.len()).unwrap_or(0);
	let mut steps = ProgressSteps::new(size);
	let digests = hash_reader_with_progress(file, algorithms, chunk_size, |done| {
		if let Some(percent) = steps.advance(done) {
			tracing::debug!(
				percent,
				done = %ByteSize::b(done),
				total = %ByteSize::b(size),
				"progress"
			);
		}
	})
	.with_context(|| format!("failed to hash {}", path.display()))?;

	tracing::debug!(size = %ByteSize::b(digests.bytes), "hashed file");
	Ok(digests)
}

/// Hashes every file on the rayon pool, one set of contexts per file. Results keep the order of
/// `paths`.
pub fn hash_files(
	paths: &[PathBuf],
	algorithms: &[Algorithm],
	chunk_size: usize,
) -> Vec<Result<StreamDigests>> {
	paths
		.par_iter()
		.map(|path| hash_file(path, algorithms, chunk_size))
		.collect()
}
