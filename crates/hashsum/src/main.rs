// Copyright 2025 Irreducible Inc.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{ensure, Context, Result};
use bytesize::ByteSize;
use clap::Parser;
use payload_hashsum::{
	hash_file, hash_files,
	report::{tag_line, verify, verify_line},
	Algorithm, Selection,
};
use payload_utils::{rayon::configure_thread_pool, tracing::init_tracing};

#[derive(Debug, Parser)]
#[command(version, about = "Compute or verify SHA-256 and SHA-512 digests of files")]
struct Args {
	/// Files to hash.
	#[arg(required = true, value_name = "FILE")]
	files: Vec<PathBuf>,
	/// Digest algorithm to compute.
	#[arg(short, long, value_enum, default_value_t = Selection::All)]
	algorithm: Selection,
	/// Bytes read and fed to the hashers at a time.
	#[arg(long, default_value = "1MiB", env = "PAYLOAD_HASH_CHUNK_SIZE")]
	chunk_size: ByteSize,
	/// Verify a single file against this hex digest. Its length selects the algorithm.
	#[arg(long, value_name = "HEX")]
	expect: Option<String>,
	/// Number of files hashed in parallel.
	#[arg(short, long, env = "PAYLOAD_HASH_JOBS")]
	jobs: Option<usize>,
}

fn main() -> Result<ExitCode> {
	init_tracing();
	let args = Args::parse();

	if let Err(err) = configure_thread_pool(args.jobs) {
		tracing::warn!(%err, "failed to configure the thread pool");
	}

	let chunk_size = usize::try_from(args.chunk_size.as_u64())
		.context("chunk size does not fit in memory")?;
	ensure!(chunk_size > 0, "chunk size must be non-zero");

	match &args.expect {
		Some(expected) => check(&args.files, expected, chunk_size),
		None => print_digests(&args.files, args.algorithm.algorithms(), chunk_size),
	}
}

fn check(files: &[PathBuf], expected: &str, chunk_size: usize) -> Result<ExitCode> {
	let [path] = files else {
		anyhow::bail!("--expect takes exactly one file, got {}", files.len());
	};
	let algorithm = Algorithm::for_expected_hex(expected)?;

	let digests = hash_file(path, &[algorithm], chunk_size)?;
	let ok = verify(&digests, expected)?;
	println!("{}", verify_line(path, ok));

	Ok(if ok {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

fn print_digests(
	files: &[PathBuf],
	algorithms: &[Algorithm],
	chunk_size: usize,
) -> Result<ExitCode> {
	let mut status = ExitCode::SUCCESS;
	for (path, result) in files.iter().zip(hash_files(files, algorithms, chunk_size)) {
		match result {
			Ok(digests) => {
				for &algorithm in algorithms {
					if let Some(digest) = digests.get(algorithm) {
						println!("{}", tag_line(algorithm, path, digest));
					}
				}
			}
			Err(err) => {
				tracing::error!("{err:#}");
				status = ExitCode::FAILURE;
			}
		}
	}
	Ok(status)
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;
	use payload_hashsum::DEFAULT_CHUNK_SIZE;

	use super::*;

	#[test]
	fn test_command_is_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_defaults() {
		let args = Args::try_parse_from(["payload-hashsum", "disk.img"]).unwrap();
		assert_eq!(args.algorithm, Selection::All);
		assert_eq!(args.chunk_size.as_u64(), DEFAULT_CHUNK_SIZE as u64);
		assert_eq!(args.expect, None);
	}

	#[test]
	fn test_options() {
		let args = Args::try_parse_from([
			"payload-hashsum",
			"-a",
			"sha512",
			"--chunk-size",
			"64KiB",
			"-j",
			"4",
			"a.img",
			"b.img",
		])
		.unwrap();
		assert_eq!(args.algorithm, Selection::Sha512);
		assert_eq!(args.chunk_size.as_u64(), 64 << 10);
		assert_eq!(args.jobs, Some(4));
		assert_eq!(args.files.len(), 2);
	}

	#[test]
	fn test_files_are_required() {
		assert!(Args::try_parse_from(["payload-hashsum"]).is_err());
	}
}
