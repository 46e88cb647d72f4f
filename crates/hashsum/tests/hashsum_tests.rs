// Copyright 2025 Irreducible Inc.

use std::{fs, io::Write, path::PathBuf, process::Command};

use hex_literal::hex;
use payload_hashsum::{hash_file, hash_files, Algorithm, DEFAULT_CHUNK_SIZE};
use tempfile::{tempdir, NamedTempFile};

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn temp_file(contents: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents).unwrap();
	file.flush().unwrap();
	file
}

fn hashsum() -> Command {
	let mut command = Command::new(env!("CARGO_BIN_EXE_payload-hashsum"));
	command.env_remove("PAYLOAD_HASH_CHUNK_SIZE");
	command.env_remove("PAYLOAD_HASH_JOBS");
	command
}

#[test]
fn test_empty_file() {
	let file = temp_file(b"");
	let digests =
		hash_file(file.path(), &[Algorithm::Sha256, Algorithm::Sha512], DEFAULT_CHUNK_SIZE)
			.unwrap();
	assert_eq!(digests.bytes, 0);
	assert_eq!(
		digests.get(Algorithm::Sha256).unwrap(),
		hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
	);
	assert_eq!(
		digests.get(Algorithm::Sha512).unwrap(),
		hex!(
			"cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
			"47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
		)
	);
}

#[test]
fn test_chunk_size_does_not_change_digest() {
	let contents = (0..300_000u32).map(|i| (i * 7 % 256) as u8).collect::<Vec<_>>();
	let file = temp_file(&contents);

	let reference = hash_file(file.path(), &[Algorithm::Sha512], DEFAULT_CHUNK_SIZE).unwrap();
	for chunk_size in [1, 63, 64, 127, 128, 4096, 100_000] {
		let digests = hash_file(file.path(), &[Algorithm::Sha512], chunk_size).unwrap();
		assert_eq!(digests, reference, "chunk size {chunk_size}");
	}
	assert_eq!(
		reference.get(Algorithm::Sha512).unwrap(),
		payload_hash::sha512(&contents).unwrap()
	);
}

#[test]
fn test_million_a_file() {
	let file = temp_file(&vec![b'a'; 1_000_000]);
	let digests = hash_file(file.path(), &[Algorithm::Sha256], 1 << 16).unwrap();
	assert_eq!(
		digests.get(Algorithm::Sha256).unwrap(),
		hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")
	);
}

#[test]
fn test_hash_files_keeps_order() {
	let dir = tempdir().unwrap();
	let paths = (0..8)
		.map(|i| {
			let path = dir.path().join(format!("part{i}.img"));
			fs::write(&path, vec![i as u8; 1000 * i]).unwrap();
			path
		})
		.collect::<Vec<_>>();

	let results = hash_files(&paths, &[Algorithm::Sha256], 256);
	assert_eq!(results.len(), paths.len());
	for (i, result) in results.into_iter().enumerate() {
		let digests = result.unwrap();
		assert_eq!(digests.bytes, 1000 * i as u64);
		assert_eq!(
			digests.get(Algorithm::Sha256).unwrap(),
			payload_hash::sha256(&vec![i as u8; 1000 * i]).unwrap()
		);
	}
}

#[test]
fn test_missing_file() {
	let dir = tempdir().unwrap();
	let missing: PathBuf = dir.path().join("missing.img");
	let err = hash_file(&missing, &[Algorithm::Sha256], DEFAULT_CHUNK_SIZE).unwrap_err();
	assert!(format!("{err:#}").contains("missing.img"));
}

#[test]
fn test_cli_prints_tag_lines() {
	let file = temp_file(b"abc");
	let output = hashsum().arg(file.path()).output().unwrap();
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout).unwrap();
	let lines = stdout.lines().collect::<Vec<_>>();
	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0], format!("SHA256 ({}) = {ABC_SHA256}", file.path().display()));
	assert!(lines[1].starts_with(&format!("SHA512 ({}) = ddaf35a1", file.path().display())));
}

#[test]
fn test_cli_verify() {
	let file = temp_file(b"abc");

	let output = hashsum()
		.arg("--expect")
		.arg(ABC_SHA256.to_uppercase())
		.arg(file.path())
		.output()
		.unwrap();
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout).unwrap().trim_end(),
		format!("{}: OK", file.path().display())
	);

	let output = hashsum()
		.arg("--expect")
		.arg("0".repeat(64))
		.arg(file.path())
		.output()
		.unwrap();
	assert_eq!(output.status.code(), Some(1));
	assert_eq!(
		String::from_utf8(output.stdout).unwrap().trim_end(),
		format!("{}: FAILED", file.path().display())
	);
}

#[test]
fn test_cli_missing_file_fails() {
	let dir = tempdir().unwrap();
	let output = hashsum()
		.arg(dir.path().join("missing.img"))
		.output()
		.unwrap();
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
}
