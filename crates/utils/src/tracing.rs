// Copyright 2023 Ulvetanna Inc.

use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber used by the workspace binaries.
///
/// Events go to stderr so that digests printed on stdout stay machine-readable. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.compact()
				.with_target(false)
				.with_writer(std::io::stderr),
		)
		.try_init();
}
