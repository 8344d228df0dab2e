//! The alert evaluator.



//		Packages

use crate::{
	alert::{AlertHistory, AlertRecord},
	fsm::{Fsm, RunState},
};
use tracing::error;



//		Functions

//		evaluate
/// Compares the current bucket's request count to the learned baseline,
/// drives the [`Fsm`] accordingly, and appends to alert history when an alert
/// fires.
///
/// Invoked exactly once every `average_bucket_size` seconds while the [`Fsm`]
/// is not in [`RunState::Learn`] — by that point `average_baseline` is
/// guaranteed greater than zero, since `Learn` only exits once a positive
/// baseline has been established (see [`crate::baseline`]).
///
/// # Parameters
///
/// * `request_count`      - The number of requests observed in the bucket
///                          that just closed.
/// * `average_baseline`   - The learned baseline, must be greater than zero.
/// * `average_threshold`  - The percentage over baseline that triggers an
///                          alert.
/// * `fsm`                - The state machine to drive.
/// * `history`            - The alert history to append to.
/// * `now`                - The current monotonic time.
///
/// # Returns
///
/// The percentage delta between the observed rate and the baseline. This may
/// be negative. Equal-to-threshold is not treated as an alert.
///
#[must_use]
pub fn evaluate(
	request_count:     u64,
	average_baseline:  u64,
	average_threshold: f64,
	fsm:               &mut Fsm,
	history:           &mut AlertHistory,
	now:               u64,
) -> f64 {
	#[expect(clippy::cast_precision_loss, reason = "Percentage delta is a display/alerting value, not an exact count")]
	let delta = (request_count as f64 - average_baseline as f64) * 100.0 / average_baseline as f64;

	let target = if delta > average_threshold {
		RunState::Alert
	} else if fsm.state() == RunState::Alert {
		RunState::Dismiss
	} else {
		RunState::Normal
	};

	match fsm.transition(target) {
		Ok(RunState::Alert) => history.push(AlertRecord { count: request_count, triggered_at: now }),
		Ok(_)                => {},
		Err(err)             => error!("Unexpected illegal FSM transition: {err}"),
	}

	delta
}



//		Tests

#[cfg(test)]
#[path = "tests/evaluator.rs"]
mod tests;
