//		Tests

use super::*;

//		Fsm_default_starts_in_learn
#[test]
fn Fsm_default_starts_in_learn() {
	let fsm = Fsm::default();
	assert_eq!(fsm.state(), RunState::Learn);
}

//		allowed_targets_from_learn
#[test]
fn allowed_targets_from_learn() {
	assert_eq!(allowed_targets(RunState::Learn), &[RunState::Learn, RunState::Normal, RunState::Alert]);
}

//		allowed_targets_from_normal
#[test]
fn allowed_targets_from_normal() {
	assert_eq!(allowed_targets(RunState::Normal), &[RunState::Normal, RunState::Alert]);
}

//		allowed_targets_from_alert
#[test]
fn allowed_targets_from_alert() {
	assert_eq!(allowed_targets(RunState::Alert), &[RunState::Alert, RunState::Dismiss]);
}

//		allowed_targets_from_dismiss
#[test]
fn allowed_targets_from_dismiss() {
	assert_eq!(allowed_targets(RunState::Dismiss), &[RunState::Alert, RunState::Normal]);
}

//		transition_to_allowed_target_succeeds
#[test]
fn transition_to_allowed_target_succeeds() {
	let mut fsm = Fsm::default();
	assert_eq!(fsm.transition(RunState::Normal), Ok(RunState::Normal));
	assert_eq!(fsm.state(), RunState::Normal);
}

//		transition_to_disallowed_target_fails_and_leaves_state_unchanged
#[test]
fn transition_to_disallowed_target_fails_and_leaves_state_unchanged() {
	let mut fsm = Fsm::default();
	let result  = fsm.transition(RunState::Dismiss);
	assert_eq!(result, Err(StateTransitionError { from: RunState::Learn, to: RunState::Dismiss }));
	assert_eq!(fsm.state(), RunState::Learn);
}

//		dismiss_can_return_to_alert_or_normal
#[test]
fn dismiss_can_return_to_alert_or_normal() {
	let mut fsm = Fsm::default();
	assert_eq!(fsm.transition(RunState::Normal), Ok(RunState::Normal));
	assert_eq!(fsm.transition(RunState::Alert),  Ok(RunState::Alert));
	assert_eq!(fsm.transition(RunState::Dismiss), Ok(RunState::Dismiss));
	assert_eq!(fsm.transition(RunState::Normal), Ok(RunState::Normal));
}
