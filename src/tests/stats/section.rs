//		Tests

use super::*;

//		truncate_passes_through_short_strings
#[test]
fn truncate_passes_through_short_strings() {
	assert_eq!(truncate("hello", 10), "hello");
}

//		truncate_cuts_at_a_char_boundary
#[test]
fn truncate_cuts_at_a_char_boundary() {
	// "café" is 5 bytes ('é' is 2 bytes); cutting at byte 4 would land mid-char.
	assert_eq!(truncate("café", 4), "caf");
}

//		section_key_with_no_path_is_just_the_host
#[test]
fn section_key_with_no_path_is_just_the_host() {
	assert_eq!(section_key("example.com", None, 1024), "http://example.com");
}

//		section_key_takes_the_first_path_segment
#[test]
fn section_key_takes_the_first_path_segment() {
	assert_eq!(section_key("example.com", Some("/widgets/1?x=1"), 1024), "http://example.com/widgets");
}

//		section_key_collapses_repeated_leading_slashes
#[test]
fn section_key_collapses_repeated_leading_slashes() {
	assert_eq!(section_key("example.com", Some("//widgets/1"), 1024), "http://example.com/widgets");
}

//		section_key_falls_back_to_host_when_path_is_root
#[test]
fn section_key_falls_back_to_host_when_path_is_root() {
	assert_eq!(section_key("example.com", Some("/"), 1024), "http://example.com");
}

//		section_key_url_decodes_the_path
#[test]
fn section_key_url_decodes_the_path() {
	assert_eq!(section_key("example.com", Some("/top%20hits"), 1024), "http://example.com/top hits");
}

//		section_key_truncates_host_and_segment
#[test]
fn section_key_truncates_host_and_segment() {
	assert_eq!(section_key("example.com", Some("/widgets"), 4), "http://exam/widg");
}
