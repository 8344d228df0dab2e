//! The dashboard renderer.
//!
//! Terminal colour and layout are out of scope (§1) — this renderer emits
//! plain text framed by a raw ANSI clear-screen escape, with no colour crate
//! introduced (the reference corpus has no grounded colour-crate usage for
//! this shape of CLI banner).



//		Packages

use crate::{
	alert::AlertHistory,
	fsm::RunState,
	stats::aggregator::{Aggregator, HitEntry},
};
use chrono::{Local, TimeZone as _};
use std::io::Write as _;



//		Constants

/// Clears the terminal and moves the cursor to the top-left corner.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";



//		Functions

//		format_timestamp
/// Formats monotonic (Unix) seconds as a local `HH:MM:SS YYYY/MM/DD`
/// timestamp.
///
/// # Parameters
///
/// * `seconds` - Seconds since the Unix epoch.
///
#[must_use]
#[expect(clippy::cast_possible_wrap, reason = "Timestamps in this crate's lifetime do not approach i64::MAX")]
fn format_timestamp(seconds: u64) -> String {
	Local.timestamp_opt(seconds as i64, 0)
		.single()
		.map_or_else(|| "unknown".to_owned(), |time| time.format("%H:%M:%S %Y/%m/%d").to_string())
}

//		render_learning
/// Renders the minimal screen shown while the monitor is in
/// [`RunState::Learn`].
///
/// # Parameters
///
/// * `out`                        - Where to write the frame.
/// * `request_count`               - Requests observed so far this learning
///                                   window.
/// * `average_bucket_size`         - The evaluation window width, in seconds.
/// * `average_baseline`            - The current running baseline estimate.
/// * `average_learning_countdown`  - Seconds remaining in the learning phase.
///
pub fn render_learning(
	out:                       &mut impl Write,
	request_count:             u64,
	average_bucket_size:       u64,
	average_baseline:          u64,
	average_learning_countdown: u64,
) -> std::io::Result<()> {
	writeln!(out, "{CLEAR_SCREEN}")?;
	writeln!(out, "<<<Learning mode>>>")?;
	writeln!(out, "Collected {request_count} HTTP request(s)")?;
	writeln!(out, "Est. average rate: {average_baseline}/{average_bucket_size}s")?;
	writeln!(out, "{average_learning_countdown}s counting down...")?;
	Ok(())
}

//		render
/// Renders a full dashboard frame.
///
/// The caller is responsible for pruning `history` and each aggregator in
/// `aggregators` before calling this function, per §4.5.
///
/// # Parameters
///
/// * `out`                        - Where to write the frame.
/// * `average_baseline`            - The learned baseline.
/// * `average_bucket_size`         - The evaluation window width, in seconds.
/// * `average_threshold`           - The alert threshold, percent over
///                                   baseline.
/// * `request_count`               - Requests observed in the current bucket.
/// * `average_bucket_countdown`    - Seconds until the next evaluation.
/// * `state`                       - The current run state.
/// * `history`                     - The (already-pruned) alert history.
/// * `aggregators`                 - The aggregators to render, each already
///                                   pruned.
/// * `max_top_hits`                - The number of top-ranked entries shown
///                                   per aggregator.
///
#[expect(clippy::too_many_arguments, reason = "A dashboard frame genuinely depends on this many independent inputs")]
pub fn render(
	out:                       &mut impl Write,
	average_baseline:          u64,
	average_bucket_size:       u64,
	average_threshold:         f64,
	request_count:             u64,
	average_bucket_countdown:  u64,
	state:                     RunState,
	history:                   &AlertHistory,
	aggregators:               &[Aggregator],
	max_top_hits:              usize,
) -> std::io::Result<()> {
	writeln!(out, "{CLEAR_SCREEN}")?;
	writeln!(
		out,
		"[INFO] Average baseline: {average_baseline}/{average_bucket_size}s, Alert threshold: {average_threshold}%, Current average: {request_count}/{average_bucket_size}s, Next Alert check in {average_bucket_countdown}s...",
	)?;

	if !history.is_empty() && state != RunState::Normal {
		match state {
			RunState::Alert   => writeln!(out, "\n<<<Active Alert>>>")?,
			RunState::Dismiss => writeln!(out, "\n<<<Alert Dismissed>>>")?,
			RunState::Learn | RunState::Normal => {},
		}
		if let Some(most_recent) = history.most_recent() {
			writeln!(
				out,
				"High traffic generated an alert - hits={} triggered at {}",
				most_recent.count,
				format_timestamp(most_recent.triggered_at),
			)?;
		}
	}

	writeln!(out, "\n<<<Alert History>>>")?;
	for record in history.iter() {
		writeln!(out, "hits {} at {}", record.count, format_timestamp(record.triggered_at))?;
	}

	for aggregator in aggregators {
		writeln!(out, "\n<<<{}>>>", aggregator.title())?;
		for (key, entry) in aggregator.top(max_top_hits) {
			let HitEntry { count, last_seen } = entry;
			writeln!(out, "{key}: {count} last_seen: {}", format_timestamp(last_seen))?;
		}
	}
	Ok(())
}



//		Tests

#[cfg(test)]
#[path = "tests/dashboard.rs"]
mod tests;
