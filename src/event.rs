#![allow(clippy::exhaustive_structs, reason = "HttpEvent is an intentionally exhaustive data record")]

//! The captured-frame event model.



//		Packages

use smart_default::SmartDefault;



//		Enums

//		EventKind
/// Whether a captured frame carried an HTTP request or an HTTP response.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
#[expect(clippy::exhaustive_enums, reason = "Exhaustive")]
pub enum EventKind {
	/// An HTTP request.
	#[default]
	Request,

	/// An HTTP response.
	Response,
}



//		Structs

//		HttpEvent
/// A parsed summary of one captured frame, handed from the capture source to
/// the analyzer.
///
/// Every string field is expected to already be truncated to the configured
/// `max_str_length` at the producer boundary (see [`crate::capture`]); the
/// analyzer does not re-truncate them, except where it interpolates them into
/// a derived key (the section key, see [`crate::stats::section`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpEvent {
	//		Public properties
	/// Monotonic seconds at observation.
	pub timestamp:    u64,

	/// The number of bytes in the captured frame.
	pub frame_length: u64,

	/// Whether this event is a request or a response.
	pub kind:         EventKind,

	/// The `Host` header value, request-only.
	pub host:         Option<String>,

	/// The raw request URI, before URL-decoding, request-only.
	pub path:         Option<String>,

	/// The HTTP method, request-only.
	pub method:       Option<String>,

	/// The `User-Agent` header value, request-only.
	pub user_agent:   Option<String>,

	/// The status line, e.g. `"200 OK"`, response-only.
	pub status_line:  Option<String>,
}

//󰭅		HttpEvent
impl HttpEvent {
	//		is_request
	/// Returns `true` if this event is an HTTP request.
	#[must_use]
	pub fn is_request(&self) -> bool {
		self.kind == EventKind::Request
	}
}



//		Functions

//		non_empty
/// Treats an empty string as missing, per the edge-case rule that an empty
/// string field is equivalent to a field that was never captured.
///
/// # Parameters
///
/// * `value` - The optional string field to normalise.
///
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|value| !value.is_empty())
}



//		Tests

#[cfg(test)]
#[path = "tests/event.rs"]
mod tests;
