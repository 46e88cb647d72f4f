// Copyright 2024 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Configure the global rayon pool used to hash several inputs side by side.
///
/// `jobs` takes precedence; without it a `RAYON_NUM_THREADS=1` environment keeps all work on the
/// calling thread (`use_current_thread`), which makes traces readable and behaves like a plain
/// sequential loop. Any other setting leaves rayon's defaults alone.
///
/// NOTE: rayon doesn't allow initializing the global thread pool several times, so only the
/// first call has an effect and later calls return the first result. The function returns a
/// reference to the result because `ThreadPoolBuildError` doesn't implement `Clone`.
pub fn configure_thread_pool(
	jobs: Option<usize>,
) -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// We cannot use `rayon::current_num_threads` because it would force the global thread pool
		// to initialize, so we won't be able to override it.
		let threads = jobs.or_else(|| match env::var("RAYON_NUM_THREADS") {
			Ok(v) if v == "1" => Some(1),
			_ => None,
		});

		match threads {
			Some(1) => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n).build_global(),
			None => Ok(()),
		}
	})
}
