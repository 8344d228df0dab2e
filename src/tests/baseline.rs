//		Tests

use super::*;

//		tick_accumulates_estimate_without_resetting_mid_window
#[test]
fn tick_accumulates_estimate_without_resetting_mid_window() {
	let mut learner       = BaselineLearner::new(10);
	let mut request_count = 25;
	let mut fsm           = Fsm::default();

	learner.tick(&mut request_count, 5, 10, 10, &mut fsm);

	assert_eq!(learner.average_learning_countdown, 5);
	assert_eq!(learner.average_baseline, 50);
	assert_eq!(request_count, 25, "mid-window tick must not reset the shared counter");
	assert_eq!(fsm.state(), RunState::Learn);
}

//		tick_transitions_to_normal_when_window_closes_with_positive_baseline
#[test]
fn tick_transitions_to_normal_when_window_closes_with_positive_baseline() {
	let mut learner       = BaselineLearner::new(10);
	let mut request_count = 25;
	let mut fsm           = Fsm::default();

	learner.tick(&mut request_count, 5, 10, 10, &mut fsm);
	learner.tick(&mut request_count, 5, 10, 10, &mut fsm);

	assert_eq!(learner.average_baseline, 25);
	assert_eq!(learner.average_learning_countdown, 10, "countdown restarts for the next cycle");
	assert_eq!(request_count, 0, "request tally resets once learning has finished");
	assert_eq!(fsm.state(), RunState::Normal);
}

//		tick_stays_in_learn_when_window_closes_with_zero_baseline
#[test]
fn tick_stays_in_learn_when_window_closes_with_zero_baseline() {
	let mut learner       = BaselineLearner::new(10);
	let mut request_count = 0;
	let mut fsm           = Fsm::default();

	learner.tick(&mut request_count, 5, 10, 10, &mut fsm);
	learner.tick(&mut request_count, 5, 10, 10, &mut fsm);

	assert_eq!(learner.average_baseline, 0);
	assert_eq!(learner.average_learning_countdown, 10);
	assert_eq!(request_count, 0);
	assert_eq!(fsm.state(), RunState::Learn);
}
