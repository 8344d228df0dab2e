//		Tests

use super::*;
use crate::event::EventKind;

//		host_request_event
fn host_request_event(host: &str, timestamp: u64, frame_length: u64) -> HttpEvent {
	HttpEvent {
		timestamp,
		frame_length,
		kind: EventKind::Request,
		host: Some(host.to_owned()),
		..Default::default()
	}
}

//		observe_creates_and_increments_entries
#[test]
fn observe_creates_and_increments_entries() {
	let mut aggregator = Aggregator::new(
		"Top Hits By Host",
		|event| event.host.clone(),
		|_event| 1,
	);
	aggregator.observe(&host_request_event("a.example", 10, 0));
	aggregator.observe(&host_request_event("a.example", 20, 0));
	aggregator.observe(&host_request_event("b.example", 15, 0));

	assert_eq!(aggregator.len(), 2);
	let top = aggregator.top(10);
	assert_eq!(top[0], ("a.example", HitEntry { count: 2, last_seen: 20 }));
	assert_eq!(top[1], ("b.example", HitEntry { count: 1, last_seen: 15 }));
}

//		observe_skips_events_the_extractor_declines
#[test]
fn observe_skips_events_the_extractor_declines() {
	let mut aggregator = Aggregator::new("Top Hits By Host", |_event| None, |_event| 1);
	aggregator.observe(&host_request_event("a.example", 10, 0));
	assert!(aggregator.is_empty());
}

//		observe_sums_with_the_weight_closure
#[test]
fn observe_sums_with_the_weight_closure() {
	let mut aggregator = Aggregator::new(
		"Top Hits Upload Volume By Host",
		|event| event.host.clone(),
		|event| event.frame_length,
	);
	aggregator.observe(&host_request_event("a.example", 1, 100));
	aggregator.observe(&host_request_event("a.example", 2, 250));

	assert_eq!(aggregator.top(10)[0].1.count, 350);
}

//		top_orders_by_count_then_last_seen_then_key
#[test]
fn top_orders_by_count_then_last_seen_then_key() {
	let mut aggregator = Aggregator::new("Top Hits By Host", |event| event.host.clone(), |_event| 1);
	aggregator.observe(&host_request_event("tied-later", 50, 0));
	aggregator.observe(&host_request_event("tied-earlier", 10, 0));
	aggregator.observe(&host_request_event("winner", 5, 0));
	aggregator.observe(&host_request_event("winner", 5, 0));

	let top: Vec<_> = aggregator.top(10).into_iter().map(|(key, _)| key).collect();
	assert_eq!(top, vec!["winner", "tied-later", "tied-earlier"]);
}

//		top_breaks_ties_on_key_when_count_and_last_seen_match
#[test]
fn top_breaks_ties_on_key_when_count_and_last_seen_match() {
	let mut aggregator = Aggregator::new("Top Hits By Host", |event| event.host.clone(), |_event| 1);
	aggregator.observe(&host_request_event("zeta", 10, 0));
	aggregator.observe(&host_request_event("alpha", 10, 0));

	let top: Vec<_> = aggregator.top(10).into_iter().map(|(key, _)| key).collect();
	assert_eq!(top, vec!["alpha", "zeta"]);
}

//		top_truncates_to_n
#[test]
fn top_truncates_to_n() {
	let mut aggregator = Aggregator::new("Top Hits By Host", |event| event.host.clone(), |_event| 1);
	for index in 0_u64..5 {
		aggregator.observe(&host_request_event(&format!("host-{index}"), index, 0));
	}
	assert_eq!(aggregator.top(2).len(), 2);
}

//		prune_removes_entries_older_than_retention
#[test]
fn prune_removes_entries_older_than_retention() {
	let mut aggregator = Aggregator::new("Top Hits By Host", |event| event.host.clone(), |_event| 1);
	aggregator.observe(&host_request_event("old", 0, 0));
	aggregator.observe(&host_request_event("fresh", 90, 0));

	aggregator.prune(100, 50);

	assert_eq!(aggregator.len(), 1);
	assert_eq!(aggregator.top(10)[0].0, "fresh");
}
