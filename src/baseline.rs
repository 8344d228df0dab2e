#![allow(clippy::exhaustive_structs, reason = "BaselineLearner is intentionally exhaustive")]

//! The adaptive baseline learner.



//		Packages

use crate::fsm::{Fsm, RunState};
use tracing::error;



//		Structs

//		BaselineLearner
/// Accumulates request counts during an initial window to derive
/// `average_baseline`.
///
/// While the [`Fsm`] is in [`RunState::Learn`], aggregators do not observe
/// events. The shared `request_count` this type reads and resets is the same
/// counter the [`crate::evaluator`] uses once learning has finished — there
/// is exactly one request tally, owned by the orchestrator, not one per
/// phase.
#[derive(Clone, Copy, Debug)]
pub struct BaselineLearner {
	//		Public properties
	/// Seconds remaining in the current learning window.
	pub average_learning_countdown: u64,

	/// The most recently computed baseline estimate.
	pub average_baseline:           u64,
}

//󰭅		BaselineLearner
impl BaselineLearner {
	//		new
	/// Creates a new learner, with its countdown starting at
	/// `average_learning_duration`.
	///
	/// # Parameters
	///
	/// * `average_learning_duration` - The full learning window, in seconds.
	///
	#[must_use]
	pub const fn new(average_learning_duration: u64) -> Self {
		Self {
			average_learning_countdown: average_learning_duration,
			average_baseline:           0,
		}
	}

	//		tick
	/// Runs one learning-phase tick.
	///
	/// # Parameters
	///
	/// * `request_count`              - The shared request tally; reset to
	///                                  zero when the learning window closes.
	/// * `timeout`                    - The periodic tick period, in seconds.
	/// * `average_bucket_size`        - The evaluation window width, in
	///                                  seconds.
	/// * `average_learning_duration`  - The full learning window, in seconds.
	/// * `fsm`                        - The state machine to drive on
	///                                  completion of learning.
	///
	pub fn tick(
		&mut self,
		request_count:             &mut u64,
		timeout:                   u64,
		average_bucket_size:       u64,
		average_learning_duration: u64,
		fsm:                       &mut Fsm,
	) {
		self.average_learning_countdown = self.average_learning_countdown.saturating_sub(timeout);

		let elapsed = average_learning_duration.saturating_sub(self.average_learning_countdown);
		#[expect(clippy::cast_precision_loss, reason = "Display estimate only, not used for alerting math")]
		{
			self.average_baseline = if elapsed == 0 {
				0
			} else {
				(*request_count as f64 * average_bucket_size as f64 / elapsed as f64).round() as u64
			};
		}

		if self.average_learning_countdown == 0 {
			if self.average_baseline > 0 {
				*request_count                  = 0;
				self.average_learning_countdown = average_learning_duration;
				drop(fsm.transition(RunState::Normal).inspect_err(|err| error!("Unexpected illegal FSM transition: {err}")));
			} else {
				self.average_learning_countdown = average_learning_duration;
				*request_count                  = 0;
			}
		}
	}
}



//		Tests

#[cfg(test)]
#[path = "tests/baseline.rs"]
mod tests;
