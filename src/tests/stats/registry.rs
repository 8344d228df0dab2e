//		Tests

use super::*;
use crate::event::EventKind;

//		request
fn request(host: &str, path: &str, method: &str, user_agent: &str) -> HttpEvent {
	HttpEvent {
		timestamp:  10,
		kind:       EventKind::Request,
		host:       Some(host.to_owned()),
		path:       Some(path.to_owned()),
		method:     Some(method.to_owned()),
		user_agent: Some(user_agent.to_owned()),
		frame_length: 512,
		..Default::default()
	}
}

//		response
fn response(status_line: &str) -> HttpEvent {
	HttpEvent {
		timestamp:   20,
		kind:        EventKind::Response,
		status_line: Some(status_line.to_owned()),
		..Default::default()
	}
}

//		build_all_returns_the_six_aggregators_in_order
#[test]
fn build_all_returns_the_six_aggregators_in_order() {
	let aggregators = build_all(1024);
	let titles: Vec<_> = aggregators.iter().map(Aggregator::title).collect();
	assert_eq!(titles, vec![
		"Top Hits By Section",
		"Top Hits By Host",
		"Top Hits Upload Volume By Host",
		"Top Hits By User-Agent",
		"Top Hits By Method",
		"Top Hits By Status Code",
	]);
}

//		by_section_keys_on_host_and_first_path_segment
#[test]
fn by_section_keys_on_host_and_first_path_segment() {
	let mut aggregator = by_section(1024);
	aggregator.observe(&request("example.com", "/widgets/1", "GET", "agent"));
	assert_eq!(aggregator.top(1)[0].0, "http://example.com/widgets");
}

//		by_section_ignores_responses
#[test]
fn by_section_ignores_responses() {
	let mut aggregator = by_section(1024);
	aggregator.observe(&response("200 OK"));
	assert!(aggregator.is_empty());
}

//		by_host_counts_one_per_request
#[test]
fn by_host_counts_one_per_request() {
	let mut aggregator = by_host(1024);
	aggregator.observe(&request("example.com", "/", "GET", "agent"));
	aggregator.observe(&request("example.com", "/other", "GET", "agent"));
	assert_eq!(aggregator.top(1)[0].1.count, 2);
}

//		upload_by_host_sums_frame_length
#[test]
fn upload_by_host_sums_frame_length() {
	let mut aggregator = upload_by_host(1024);
	aggregator.observe(&request("example.com", "/", "GET", "agent"));
	aggregator.observe(&request("example.com", "/", "GET", "agent"));
	assert_eq!(aggregator.top(1)[0].1.count, 1024);
}

//		by_user_agent_counts_requests
#[test]
fn by_user_agent_counts_requests() {
	let mut aggregator = by_user_agent(1024);
	aggregator.observe(&request("example.com", "/", "GET", "curl/8.0"));
	assert_eq!(aggregator.top(1)[0].0, "curl/8.0");
}

//		by_method_counts_requests
#[test]
fn by_method_counts_requests() {
	let mut aggregator = by_method(1024);
	aggregator.observe(&request("example.com", "/", "POST", "agent"));
	assert_eq!(aggregator.top(1)[0].0, "POST");
}

//		by_status_only_counts_responses
#[test]
fn by_status_only_counts_responses() {
	let mut aggregator = by_status(1024);
	aggregator.observe(&request("example.com", "/", "GET", "agent"));
	aggregator.observe(&response("404 Not Found"));
	assert_eq!(aggregator.len(), 1);
	assert_eq!(aggregator.top(1)[0].0, "404 Not Found");
}
