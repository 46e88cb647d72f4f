// Copyright 2024-2025 Irreducible Inc.

//! Early-return helpers shared by the workspace crates.
//!
//! With the `bail_panic` feature enabled every `bail!` panics instead of returning, which gives a
//! backtrace at the exact failure site when chasing a bad digest in a debugger.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	enum LengthError {
		TooLong { len: usize, max: usize },
	}

	impl std::fmt::Display for LengthError {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			match self {
				Self::TooLong { len, max } => write!(f, "length {len} exceeds {max}"),
			}
		}
	}

	fn check_len(len: usize, max: usize) -> Result<usize, LengthError> {
		ensure!(len <= max, LengthError::TooLong { len, max });
		Ok(len)
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(check_len(64, 128), Ok(64));
	}

	#[test]
	fn test_ensure_returns_error() {
		assert_eq!(check_len(129, 128), Err(LengthError::TooLong { len: 129, max: 128 }));
	}
}
