#![allow(clippy::exhaustive_structs, reason = "Fsm and StateTransitionError are intentionally exhaustive")]

//! The alert state machine.
//!
//! The original program mutated its state by swapping the class identity of a
//! state object (`self.__class__ = state`). That pattern has no equivalent in
//! Rust and would be an odd fit even if it did; instead the state is a plain
//! tagged `enum`, and the transition table is a pure function over it.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		RunState
/// The monitor's run state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "Exhaustive")]
pub enum RunState {
	/// Accumulating samples to derive the average baseline.
	Learn,

	/// Baseline established; request rate within threshold.
	Normal,

	/// Request rate has exceeded the baseline by more than the threshold.
	Alert,

	/// A previously active alert has cleared but has not yet been reconfirmed
	/// as `Normal`.
	Dismiss,
}

//		StateTransitionError
/// Raised when an illegal state transition is attempted.
///
/// In production this must never fire: the [`crate::evaluator`] and
/// [`crate::baseline`] modules only ever issue moves that are present in the
/// transition table. If it does fire, it indicates a programming error
/// upstream, not a data problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("illegal state transition: {from:?} -> {to:?}")]
pub struct StateTransitionError {
	/// The state the transition was attempted from.
	pub from: RunState,
	/// The state the transition was attempted to.
	pub to:   RunState,
}



//		Structs

//		Fsm
/// Holds the monitor's current [`RunState`] and enforces the transition
/// table.
#[derive(Clone, Copy, Debug)]
pub struct Fsm {
	//		Private properties
	/// The current state.
	state: RunState,
}

//󰭅		Default
impl Default for Fsm {
	//		default
	fn default() -> Self {
		Self { state: RunState::Learn }
	}
}

//󰭅		Fsm
impl Fsm {
	//		state
	/// Returns the current state.
	#[must_use]
	pub const fn state(&self) -> RunState {
		self.state
	}

	//		transition
	/// Attempts to move to `target`, per the transition table in
	/// [`allowed_targets()`](allowed_targets).
	///
	/// # Parameters
	///
	/// * `target` - The state to move to.
	///
	/// # Errors
	///
	/// If the move from the current state to `target` is not in the
	/// transition table, a [`StateTransitionError`] is returned and the state
	/// is left unchanged.
	///
	pub fn transition(&mut self, target: RunState) -> Result<RunState, StateTransitionError> {
		if allowed_targets(self.state).contains(&target) {
			self.state = target;
			Ok(self.state)
		} else {
			Err(StateTransitionError { from: self.state, to: target })
		}
	}
}



//		Functions

//		allowed_targets
/// The sole authority for which transitions are legal.
///
/// # Parameters
///
/// * `from` - The state to check allowed targets for.
///
#[must_use]
pub const fn allowed_targets(from: RunState) -> &'static [RunState] {
	match from {
		RunState::Learn   => &[RunState::Learn,  RunState::Normal, RunState::Alert],
		RunState::Normal  => &[RunState::Normal, RunState::Alert],
		RunState::Alert   => &[RunState::Alert,  RunState::Dismiss],
		RunState::Dismiss => &[RunState::Alert,  RunState::Normal],
	}
}



//		Tests

#[cfg(test)]
#[path = "tests/fsm.rs"]
mod tests;
