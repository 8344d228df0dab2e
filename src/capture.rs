#![allow(clippy::exhaustive_structs, reason = "StopSignal and SyntheticCaptureSource are intentionally exhaustive")]

//! The capture source contract.
//!
//! The packet capture driver itself (libpcap/equivalent), its BPF filter, and
//! HTTP field extraction from raw frames are all external collaborators,
//! explicitly out of scope for this crate (see spec §1/§6) — this module
//! defines only the consumed contract, plus one concrete, fully in-process
//! implementation that satisfies it: a synthetic traffic generator, used both
//! as the crate's runnable default and as the test double the integration
//! tests drive.



//		Packages

use crate::event::{EventKind, HttpEvent};
use flume::Sender;
use std::sync::{
	Arc,
	atomic::{AtomicBool, Ordering},
};
use thiserror::Error as ThisError;



//		Enums

//		CaptureError
/// Errors a [`CaptureSource`] can report.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum CaptureError {
	/// The capture interface could not be opened, either because it does not
	/// exist or because permission was denied. This is fatal at startup.
	#[error("interface {interface} unavailable: {reason}")]
	Unavailable {
		/// The interface that could not be opened.
		interface: String,
		/// The underlying reason reported by the capture driver.
		reason:    String,
	},
}



//		Structs

//		StopSignal
/// The single boolean exit flag shared between the capture worker and the
/// periodic loop. Checked by the capture source's stop predicate per frame,
/// or at most every second, per §5's cancellation contract.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
	//		Private properties
	/// The underlying flag.
	flag: Arc<AtomicBool>,
}

//󰭅		StopSignal
impl StopSignal {
	//		new
	/// Creates a new, unset stop signal.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	//		set
	/// Sets the flag, requesting that all workers stop.
	pub fn set(&self) {
		self.flag.store(true, Ordering::SeqCst);
	}

	//		is_set
	/// Returns `true` if a stop has been requested.
	#[must_use]
	pub fn is_set(&self) -> bool {
		self.flag.load(Ordering::SeqCst)
	}
}



//		Traits

//§		CaptureSource
/// A source of [`HttpEvent`]s, consumed by the monitor orchestrator.
///
/// A real implementation opens the given interface non-promiscuously with a
/// BPF filter of `tcp and port <port>`, delivers only frames carrying an HTTP
/// request or response, and honours `stop` by checking it per frame or at
/// most every second. It must close the capture resource on every exit path.
pub trait CaptureSource: Send {
	//		run
	/// Runs the capture loop until `stop` is set, sending each parsed event to
	/// `sender`.
	///
	/// # Parameters
	///
	/// * `sender` - Where to deliver parsed events.
	/// * `stop`   - Checked to decide when to stop capturing.
	///
	/// # Errors
	///
	/// Returns [`CaptureError::Unavailable`] if the interface cannot be
	/// opened. Per-frame parse failures are not propagated as errors — per
	/// §7 they are swallowed after logging and do not stop capture.
	///
	fn run(&mut self, sender: &Sender<HttpEvent>, stop: &StopSignal) -> Result<(), CaptureError>;
}



//		SyntheticCaptureSource
/// A self-contained [`CaptureSource`] that synthesises HTTP request/response
/// pairs at a configurable rate, rather than reading from a live interface.
///
/// This is the crate's runnable default in the absence of a real libpcap
/// binding (explicitly out of scope, and not fabricated as a dependency,
/// since none appears anywhere in this crate's reference corpus). It is also
/// the vehicle the integration test suite drives the orchestrator with.
#[derive(Debug)]
pub struct SyntheticCaptureSource {
	//		Private properties
	/// The hosts to synthesise traffic for, cycled round-robin.
	hosts:            Vec<String>,

	/// Requests to emit per second, approximately.
	requests_per_sec: u64,
}

//󰭅		SyntheticCaptureSource
impl SyntheticCaptureSource {
	//		new
	/// Creates a new synthetic capture source.
	///
	/// # Parameters
	///
	/// * `hosts`            - The hosts to synthesise traffic for.
	/// * `requests_per_sec` - Approximately how many requests to emit per
	///                       second.
	///
	#[must_use]
	pub fn new(hosts: Vec<String>, requests_per_sec: u64) -> Self {
		Self { hosts, requests_per_sec }
	}
}

//󰭅		CaptureSource
impl CaptureSource for SyntheticCaptureSource {
	//		run
	fn run(&mut self, sender: &Sender<HttpEvent>, stop: &StopSignal) -> Result<(), CaptureError> {
		if self.hosts.is_empty() {
			return Err(CaptureError::Unavailable {
				interface: "synthetic".to_owned(),
				reason:    "no hosts configured to synthesise traffic for".to_owned(),
			});
		}

		let mut timestamp = 0_u64;
		let mut index      = 0_usize;

		while !stop.is_set() {
			for _ in 0..self.requests_per_sec.max(1) {
				let host = &self.hosts[index % self.hosts.len()];
				index    = index.wrapping_add(1);

				let request = HttpEvent {
					timestamp,
					frame_length: 512,
					kind:         EventKind::Request,
					host:         Some(host.clone()),
					path:         Some("/index.html".to_owned()),
					method:       Some("GET".to_owned()),
					user_agent:   Some("synthetic-agent/1.0".to_owned()),
					status_line:  None,
				};
				let response = HttpEvent {
					timestamp,
					frame_length: 256,
					kind:         EventKind::Response,
					host:         None,
					path:         None,
					method:       None,
					user_agent:   None,
					status_line:  Some("200 OK".to_owned()),
				};

				if sender.send(request).is_err() || sender.send(response).is_err() {
					return Ok(());
				}
			}
			timestamp = timestamp.saturating_add(1);
			std::thread::sleep(std::time::Duration::from_secs(1));
		}
		Ok(())
	}
}



//		Tests

#[cfg(test)]
#[path = "tests/capture.rs"]
mod tests;
