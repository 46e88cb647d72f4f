// Copyright 2024 Irreducible Inc.

/// Read boolean flag from the environment variable.
///
/// Accepts the usual spellings of "enabled". Anything else, including an unset variable, is
/// `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => is_truthy(&val),
		Err(_) => false,
	}
}

fn is_truthy(val: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.trim())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truthy_values() {
		for val in ["1", "on", "TRUE", " yes "] {
			assert!(is_truthy(val), "{val:?} should enable the flag");
		}
	}

	#[test]
	fn test_falsy_values() {
		for val in ["", "0", "off", "nope", "True!"] {
			assert!(!is_truthy(val), "{val:?} should not enable the flag");
		}
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("PAYLOAD_UTILS_SURELY_UNSET_FLAG"));
	}
}
