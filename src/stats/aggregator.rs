#![allow(clippy::exhaustive_structs, reason = "HitEntry and Aggregator are intentionally exhaustive")]

//! The generic top-N aggregator.



//		Packages

use crate::event::HttpEvent;
use std::collections::HashMap;



//		Structs

//		HitEntry
/// A single aggregator table value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitEntry {
	//		Public properties
	/// The tally accumulated for this key — a request count for most
	/// aggregators, a byte volume for [`UploadByHost`](super::registry::upload_by_host).
	pub count:     u64,

	/// Monotonic seconds of the most recent update to this key.
	pub last_seen: u64,
}

//		Aggregator
/// A uniform top-N counter, keyed on a field derived from an [`HttpEvent`].
///
/// The six concrete aggregators in [`crate::stats::registry`] are all
/// instances of this one type, built with different `extract`/`weight`
/// closures, rather than members of an inheritance hierarchy — the
/// "plug-in" set is homogeneous, so composition is sufficient.
pub struct Aggregator {
	//		Private properties
	/// The human-readable label shown above this aggregator's section in the
	/// dashboard.
	title:   &'static str,

	/// Derives the key to update for a given event, or `None` to skip it.
	extract: Box<dyn Fn(&HttpEvent) -> Option<String> + Send + Sync>,

	/// Derives the amount to add to the key's count for a given event.
	weight:  Box<dyn Fn(&HttpEvent) -> u64 + Send + Sync>,

	/// The key → [`HitEntry`] table.
	table:   HashMap<String, HitEntry>,
}

//󰭅		Aggregator
impl Aggregator {
	//		new
	/// Creates a new aggregator.
	///
	/// # Parameters
	///
	/// * `title`   - The human-readable label for this aggregator.
	/// * `extract` - The key-derivation closure.
	/// * `weight`  - The weight-derivation closure.
	///
	pub fn new(
		title:   &'static str,
		extract: impl Fn(&HttpEvent) -> Option<String> + Send + Sync + 'static,
		weight:  impl Fn(&HttpEvent) -> u64 + Send + Sync + 'static,
	) -> Self {
		Self {
			title,
			extract: Box::new(extract),
			weight:  Box::new(weight),
			table:   HashMap::new(),
		}
	}

	//		title
	/// Returns this aggregator's human-readable label.
	#[must_use]
	pub const fn title(&self) -> &'static str {
		self.title
	}

	//		observe
	/// Updates the table with a single event, if `extract` yields a key for
	/// it.
	///
	/// # Parameters
	///
	/// * `event` - The event to observe.
	///
	pub fn observe(&mut self, event: &HttpEvent) {
		let Some(key) = (self.extract)(event) else {
			return;
		};
		let entry = self.table.entry(key).or_default();
		entry.count      = entry.count.saturating_add((self.weight)(event));
		entry.last_seen  = event.timestamp;
	}

	//		prune
	/// Removes every entry whose `last_seen` is older than
	/// `max_retention_length` seconds, as measured from `now`.
	///
	/// # Parameters
	///
	/// * `now`                  - The current monotonic time.
	/// * `max_retention_length` - The retention cutoff, in seconds.
	///
	pub fn prune(&mut self, now: u64, max_retention_length: u64) {
		self.table.retain(|_, entry| now.saturating_sub(entry.last_seen) <= max_retention_length);
	}

	//		top
	/// Returns up to `n` entries, sorted by `(count desc, last_seen desc)`,
	/// with ties broken by ascending key — a tiebreak that is deterministic
	/// regardless of insertion order or hashmap iteration order.
	///
	/// # Parameters
	///
	/// * `n` - The maximum number of entries to return.
	///
	#[must_use]
	pub fn top(&self, n: usize) -> Vec<(&str, HitEntry)> {
		let mut entries: Vec<(&str, HitEntry)> = self.table
			.iter()
			.map(|(key, entry)| (key.as_str(), *entry))
			.collect()
		;
		entries.sort_unstable_by(|(left_key, left), (right_key, right)| {
			right.count
				.cmp(&left.count)
				.then_with(|| right.last_seen.cmp(&left.last_seen))
				.then_with(|| left_key.cmp(right_key))
		});
		entries.truncate(n);
		entries
	}

	//		len
	/// Returns the number of keys currently held.
	#[must_use]
	pub fn len(&self) -> usize {
		self.table.len()
	}

	//		is_empty
	/// Returns `true` if the table holds no keys.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}



//		Tests

#[cfg(test)]
#[path = "../tests/stats/aggregator.rs"]
mod tests;
