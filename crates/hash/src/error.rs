// Copyright 2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
	#[error("hash context handle is missing")]
	NullContext,
	#[error("input data is missing for a non-empty update")]
	NullData,
	#[error("digest output buffer is missing")]
	NullOutput,
	#[error("encoding input or output buffer is missing")]
	NullInput,
	#[error("{algorithm} message length exceeds the representable bit count")]
	CounterOverflow { algorithm: &'static str },
	#[error("output buffer too small (required {required} bytes, got {actual} bytes)")]
	OutputTooSmall { required: usize, actual: usize },
	#[error("requested length {len} exceeds the {available} bytes supplied")]
	LengthOutOfBounds { len: usize, available: usize },
	#[error("expected digest is not a valid hex string")]
	InvalidHex,
}
