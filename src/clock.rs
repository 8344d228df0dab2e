#![allow(clippy::exhaustive_structs, reason = "SystemClock and MockClock are intentionally exhaustive")]

//! Monotonic time source for the monitor.
//!
//! All of the analytic components (aggregators, baseline learner, evaluator,
//! alert history) work in terms of seconds since an arbitrary epoch rather
//! than wall-clock time, so that they can be driven deterministically in
//! tests. [`SystemClock`] is the production implementation; [`MockClock`] is
//! used throughout the test suite.



//		Packages

use chrono::Utc;
use parking_lot::Mutex;



//		Traits

//§		Clock
/// A monotonic time source, returning seconds since an arbitrary epoch.
pub trait Clock: Send + Sync {
	//		now
	/// Returns the current monotonic time, in seconds since the clock's epoch.
	fn now(&self) -> u64;
}



//		Structs

//		SystemClock
/// A [`Clock`] backed by wall-clock time (seconds since the Unix epoch).
///
/// Unix time is used, rather than a [`std::time::Instant`], because the
/// dashboard renders `last_seen`/`triggered_at` values as local
/// `HH:MM:SS YYYY/MM/DD` timestamps — an arbitrary monotonic epoch with no
/// relation to wall-clock time could not be rendered that way. Unix time only
/// moves backwards on a clock step, which this crate does not attempt to
/// guard against, matching the original program's own use of `time.time()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

//󰭅		Clock
impl Clock for SystemClock {
	//		now
	#[expect(clippy::cast_sign_loss, reason = "Unix timestamps are positive until year 2106 and will not go negative here")]
	fn now(&self) -> u64 {
		Utc::now().timestamp() as u64
	}
}

//		MockClock
/// A [`Clock`] whose value is set explicitly by tests.
#[derive(Debug, Default)]
pub struct MockClock {
	//		Private properties
	/// The current time reported by the clock.
	current: Mutex<u64>,
}

//󰭅		MockClock
impl MockClock {
	//		new
	/// Creates a new mock clock starting at the given time.
	///
	/// # Parameters
	///
	/// * `start` - The initial time to report.
	///
	#[must_use]
	pub fn new(start: u64) -> Self {
		Self { current: Mutex::new(start) }
	}

	//		set
	/// Sets the clock to a specific time.
	///
	/// # Parameters
	///
	/// * `time` - The time to set the clock to.
	///
	pub fn set(&self, time: u64) {
		*self.current.lock() = time;
	}

	//		advance
	/// Advances the clock by the given number of seconds.
	///
	/// # Parameters
	///
	/// * `seconds` - The number of seconds to advance by.
	///
	pub fn advance(&self, seconds: u64) {
		*self.current.lock() += seconds;
	}
}

//󰭅		Clock
impl Clock for MockClock {
	//		now
	fn now(&self) -> u64 {
		*self.current.lock()
	}
}



//		Tests

#[cfg(test)]
#[path = "tests/clock.rs"]
mod tests;
