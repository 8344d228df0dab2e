//! The six concrete aggregators and their assembly into one uniform set.



//		Packages

use super::{
	aggregator::Aggregator,
	section::{section_key, truncate},
};
use crate::event::{EventKind, HttpEvent, non_empty};



//		Functions

//		by_section
/// `BySection`: counts requests by `"http://" + host + "/" + section"`.
#[must_use]
pub fn by_section(max_str_length: usize) -> Aggregator {
	Aggregator::new(
		"Top Hits By Section",
		move |event: &HttpEvent| -> Option<String> {
			if !event.is_request() {
				return None;
			}
			let host = non_empty(event.host.as_deref())?;
			Some(section_key(host, non_empty(event.path.as_deref()), max_str_length))
		},
		|_event| 1,
	)
}

//		by_host
/// `ByHost`: counts requests by `host`.
#[must_use]
pub fn by_host(max_str_length: usize) -> Aggregator {
	Aggregator::new(
		"Top Hits By Host",
		move |event: &HttpEvent| -> Option<String> {
			if !event.is_request() {
				return None;
			}
			non_empty(event.host.as_deref()).map(|host| truncate(host, max_str_length).to_owned())
		},
		|_event| 1,
	)
}

//		upload_by_host
/// `UploadByHost`: sums request frame length by `host`.
#[must_use]
pub fn upload_by_host(max_str_length: usize) -> Aggregator {
	Aggregator::new(
		"Top Hits Upload Volume By Host",
		move |event: &HttpEvent| -> Option<String> {
			if !event.is_request() {
				return None;
			}
			non_empty(event.host.as_deref()).map(|host| truncate(host, max_str_length).to_owned())
		},
		|event| event.frame_length,
	)
}

//		by_user_agent
/// `ByUserAgent`: counts requests by `user_agent`.
#[must_use]
pub fn by_user_agent(max_str_length: usize) -> Aggregator {
	Aggregator::new(
		"Top Hits By User-Agent",
		move |event: &HttpEvent| -> Option<String> {
			if !event.is_request() {
				return None;
			}
			non_empty(event.user_agent.as_deref()).map(|user_agent| truncate(user_agent, max_str_length).to_owned())
		},
		|_event| 1,
	)
}

//		by_method
/// `ByMethod`: counts requests by `method`.
#[must_use]
pub fn by_method(max_str_length: usize) -> Aggregator {
	Aggregator::new(
		"Top Hits By Method",
		move |event: &HttpEvent| -> Option<String> {
			if !event.is_request() {
				return None;
			}
			non_empty(event.method.as_deref()).map(|method| truncate(method, max_str_length).to_owned())
		},
		|_event| 1,
	)
}

//		by_status
/// `ByStatus`: counts responses by `status_line`.
#[must_use]
pub fn by_status(max_str_length: usize) -> Aggregator {
	Aggregator::new(
		"Top Hits By Status Code",
		move |event: &HttpEvent| -> Option<String> {
			if event.kind != EventKind::Response {
				return None;
			}
			non_empty(event.status_line.as_deref()).map(|status_line| truncate(status_line, max_str_length).to_owned())
		},
		|_event| 1,
	)
}

//		build_all
/// Builds the full, ordered set of aggregators the monitor evaluates every
/// event against.
///
/// # Parameters
///
/// * `max_str_length` - The length every interpolated substring is truncated
///                       to.
///
#[must_use]
pub fn build_all(max_str_length: usize) -> Vec<Aggregator> {
	vec![
		by_section(max_str_length),
		by_host(max_str_length),
		upload_by_host(max_str_length),
		by_user_agent(max_str_length),
		by_method(max_str_length),
		by_status(max_str_length),
	]
}



//		Tests

#[cfg(test)]
#[path = "../tests/stats/registry.rs"]
mod tests;
