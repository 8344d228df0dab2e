#![allow(clippy::exhaustive_structs, reason = "MonitorStatus is an intentionally exhaustive snapshot")]

//! A consistent, owned snapshot of the monitor's run-time state.



//		Packages

use crate::fsm::RunState;



//		Structs

//		MonitorStatus
/// The orchestrator's own view of the monitor's run-time state, mutated only
/// under the monitor-wide mutex (see [`crate::monitor`]).
///
/// This replaces the shared mutable "status bag" pattern the original design
/// used (a dictionary of loosely-typed fields updated from multiple places)
/// with one explicit, owned value.
#[derive(Clone, Copy, Debug)]
pub struct MonitorStatus {
	//		Public properties
	/// The number of HTTP requests observed since the last bucket reset.
	pub request_count:              u64,

	/// The current run state.
	pub state:                      RunState,

	/// The learned average baseline, requests per `average_bucket_size`.
	pub average_baseline:           u64,

	/// Seconds remaining until the next evaluation.
	pub average_bucket_countdown:   u64,

	/// Seconds remaining until the next dashboard refresh.
	pub dashboard_bucket_countdown: u64,

	/// Seconds remaining in the baseline-learning phase.
	pub average_learning_countdown: u64,
}

//󰭅		MonitorStatus
impl MonitorStatus {
	//		new
	/// Creates the initial status for a freshly constructed monitor.
	///
	/// # Parameters
	///
	/// * `average_bucket_size`       - The evaluation window width, in
	///                                 seconds.
	/// * `dashboard_bucket_size`     - The dashboard refresh period, in
	///                                 seconds.
	/// * `average_learning_duration` - The full learning window, in seconds.
	///
	#[must_use]
	pub const fn new(
		average_bucket_size:       u64,
		dashboard_bucket_size:     u64,
		average_learning_duration: u64,
	) -> Self {
		Self {
			request_count:              0,
			state:                      RunState::Learn,
			average_baseline:           0,
			average_bucket_countdown:   average_bucket_size,
			dashboard_bucket_countdown: dashboard_bucket_size,
			average_learning_countdown: average_learning_duration,
		}
	}
}
