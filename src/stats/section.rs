//! Section key derivation for the `BySection` aggregator.
//!
//! A section is the first non-empty, parameter-stripped path segment of a
//! request URI, prefixed by scheme and host.



//		Packages

use std::borrow::Cow;



//		Functions

//		truncate
/// Truncates a string to at most `max_len` bytes, at a char boundary.
///
/// # Parameters
///
/// * `value`   - The string to truncate.
/// * `max_len` - The maximum number of bytes to keep.
///
#[must_use]
pub fn truncate(value: &str, max_len: usize) -> &str {
	if value.len() <= max_len {
		return value;
	}
	let mut end = max_len;
	while !value.is_char_boundary(end) {
		end -= 1;
	}
	&value[..end]
}

//		section_key
/// Derives the `BySection` key for a request, per the rule: URL-decode the
/// raw path, split on `/`, skip empty segments (collapsing repeated
/// slashes), and take the first non-empty segment with its query string
/// stripped. If there is no such segment, the key is just `http://<host>`.
///
/// # Parameters
///
/// * `host`         - The request's `Host` header value.
/// * `path`         - The request's raw URI, if present.
/// * `max_str_length` - The length every interpolated substring is truncated
///                       to.
///
#[must_use]
pub fn section_key(host: &str, path: Option<&str>, max_str_length: usize) -> String {
	let host   = truncate(host, max_str_length);
	let prefix = format!("http://{host}");

	let Some(raw_path) = path else {
		return prefix;
	};
	let decoded: Cow<'_, str> = urlencoding::decode(raw_path).unwrap_or(Cow::Borrowed(raw_path));

	for segment in decoded.split('/') {
		if segment.is_empty() {
			continue;
		}
		let stripped = segment.split('?').next().unwrap_or("");
		if stripped.is_empty() {
			return prefix;
		}
		return format!("{prefix}/{}", truncate(stripped, max_str_length));
	}
	prefix
}



//		Tests

#[cfg(test)]
#[path = "../tests/stats/section.rs"]
mod tests;
