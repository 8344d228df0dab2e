#![allow(clippy::exhaustive_structs, reason = "Monitor is intentionally exhaustive")]

//! The orchestrator: wires the capture source, the analytic components, and
//! the dashboard renderer into the two workers described in the concurrency
//! model (§5) — a capture worker and a periodic-loop worker, communicating
//! over a single bounded channel of [`HttpEvent`]s.



//		Packages

use crate::{
	alert::AlertHistory,
	baseline::BaselineLearner,
	capture::{CaptureError, CaptureSource, StopSignal},
	clock::Clock,
	config::Config,
	event::HttpEvent,
	fsm::{Fsm, RunState},
	stats::{aggregator::Aggregator, registry::build_all},
	status::MonitorStatus,
	{dashboard, evaluator},
};
use parking_lot::Mutex;
use std::{io::stdout, sync::Arc, time::Duration};
use tokio::{select, task::spawn_blocking, time::interval};
use tracing::{error, info};



//		Structs

//		SharedState
/// Everything the periodic loop mutates on each tick, held behind one mutex.
///
/// Only the periodic-loop task ever locks this — the capture worker only
/// sends down the channel — but it is still guarded by a [`Mutex`] rather
/// than owned outright, both for fidelity to §5's stated policy and because
/// it makes the orchestrator trivially testable without threading a `&mut`
/// through the whole call chain.
struct SharedState {
	//		Private properties
	/// The running status snapshot (counters and countdowns).
	status:     MonitorStatus,

	/// The alert state machine.
	fsm:        Fsm,

	/// The adaptive baseline learner.
	baseline:   BaselineLearner,

	/// The alert history.
	history:    AlertHistory,

	/// The full set of top-N aggregators.
	aggregators: Vec<Aggregator>,
}

//		Monitor
/// The HTTP traffic monitor: owns the configuration and shared analytic
/// state, and drives the capture and periodic-loop workers.
pub struct Monitor {
	//		Private properties
	/// The effective configuration.
	config: Config,

	/// The time source, swappable in tests.
	clock:  Arc<dyn Clock>,

	/// The analytic state, shared between construction and the periodic
	/// loop.
	shared: Arc<Mutex<SharedState>>,

	/// The cooperative shutdown flag, shared with the capture worker.
	stop:   StopSignal,
}

//󰭅		Monitor
impl Monitor {
	//		new
	/// Creates a new monitor from its effective configuration.
	///
	/// # Parameters
	///
	/// * `config` - The effective configuration.
	/// * `clock`  - The time source to drive the analytic components with.
	///
	#[must_use]
	pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
		let shared = SharedState {
			status:      MonitorStatus::new(config.average_bucket_size, config.dashboard_bucket_size, config.average_learning_duration),
			fsm:         Fsm::default(),
			baseline:    BaselineLearner::new(config.average_learning_duration),
			history:     AlertHistory::default(),
			aggregators: build_all(config.max_str_length),
		};
		Self {
			config,
			clock,
			shared: Arc::new(Mutex::new(shared)),
			stop:   StopSignal::new(),
		}
	}

	//		run
	/// Runs the monitor to completion: spawns the capture worker on a
	/// blocking thread, then drives the periodic loop on the current task
	/// until either the capture worker exits, the channel disconnects, or a
	/// `Ctrl+C` is received.
	///
	/// # Parameters
	///
	/// * `capture` - The capture source to drive.
	///
	/// # Errors
	///
	/// Returns the [`CaptureError`] the capture worker exited with, if any.
	///
	pub async fn run(&self, mut capture: impl CaptureSource + 'static) -> Result<(), CaptureError> {
		let (sender, receiver) = flume::unbounded::<HttpEvent>();
		let stop                = self.stop.clone();

		let capture_worker = spawn_blocking(move || capture.run(&sender, &stop));

		select! {
			() = self.periodic_loop(receiver) => {},
			() = Self::wait_for_shutdown() => {
				info!("shutdown signal received, stopping");
				self.stop.set();
			}
		}

		match capture_worker.await {
			Ok(result)  => result,
			Err(error) => {
				error!("capture worker panicked: {error}");
				Ok(())
			},
		}
	}

	//		wait_for_shutdown
	/// Waits for a `Ctrl+C`, logging if the signal handler itself cannot be
	/// installed.
	async fn wait_for_shutdown() {
		if let Err(error) = tokio::signal::ctrl_c().await {
			error!("failed to install Ctrl+C handler: {error}");
		}
	}

	//		periodic_loop
	/// Runs the periodic loop: on every tick, either advances baseline
	/// learning or runs an evaluation/render cycle; on every received event,
	/// folds it into the shared state. Returns when the capture channel
	/// disconnects or a stop has been requested.
	///
	/// # Parameters
	///
	/// * `receiver` - The receiving end of the capture channel.
	///
	async fn periodic_loop(&self, receiver: flume::Receiver<HttpEvent>) {
		let mut ticker = interval(Duration::from_secs(self.config.timeout.max(1)));

		loop {
			if self.stop.is_set() {
				return;
			}
			select! {
				_ = ticker.tick() => {
					self.on_tick();
				}
				message = receiver.recv_async() => {
					match message {
						Ok(event) => self.ingest(event),
						Err(_)    => {
							error!("capture channel disconnected, exiting periodic loop");
							return;
						},
					}
				}
			}
		}
	}

	//		ingest
	/// Folds one captured event into the shared state: the request tally is
	/// incremented regardless of run state, but aggregators only observe
	/// events once learning has finished (invariant 6).
	///
	/// # Parameters
	///
	/// * `event` - The event to fold in.
	///
	fn ingest(&self, event: HttpEvent) {
		let mut guard = self.shared.lock();
		if event.is_request() {
			guard.status.request_count = guard.status.request_count.saturating_add(1);
		}
		if guard.fsm.state() != RunState::Learn {
			for aggregator in &mut guard.aggregators {
				aggregator.observe(&event);
			}
		}
	}

	//		on_tick
	/// Runs one periodic-loop tick, per §4.6.
	fn on_tick(&self) {
		let now       = self.clock.now();
		let mut guard = self.shared.lock();

		if guard.fsm.state() == RunState::Learn {
			let SharedState { status, fsm, baseline, .. } = &mut *guard;
			baseline.tick(
				&mut status.request_count,
				self.config.timeout,
				self.config.average_bucket_size,
				self.config.average_learning_duration,
				fsm,
			);
			status.state                      = fsm.state();
			status.average_baseline           = baseline.average_baseline;
			status.average_learning_countdown = baseline.average_learning_countdown;

			let (request_count, average_baseline, average_learning_countdown) =
				(status.request_count, status.average_baseline, status.average_learning_countdown);
			drop(guard);

			let mut out = stdout();
			if let Err(error) = dashboard::render_learning(&mut out, request_count, self.config.average_bucket_size, average_baseline, average_learning_countdown) {
				error!("failed to render learning screen: {error}");
			}
			return;
		}

		guard.status.average_bucket_countdown   = guard.status.average_bucket_countdown.saturating_sub(self.config.timeout);
		guard.status.dashboard_bucket_countdown = guard.status.dashboard_bucket_countdown.saturating_sub(self.config.timeout);

		if guard.status.average_bucket_countdown == 0 {
			guard.status.average_bucket_countdown = self.config.average_bucket_size;
			let request_count                     = guard.status.request_count;
			let average_baseline                  = guard.status.average_baseline;
			let SharedState { fsm, history, .. }   = &mut *guard;
			let _delta                             = evaluator::evaluate(request_count, average_baseline, self.config.average_threshold, fsm, history, now);
			guard.status.request_count             = 0;
			guard.status.state                     = guard.fsm.state();
		}

		if guard.status.dashboard_bucket_countdown == 0 {
			guard.status.dashboard_bucket_countdown = self.config.dashboard_bucket_size;
			guard.history.prune(now, self.config.max_retention_length);
			for aggregator in &mut guard.aggregators {
				aggregator.prune(now, self.config.max_retention_length);
			}

			let mut out = stdout();
			let result = dashboard::render(
				&mut out,
				guard.status.average_baseline,
				self.config.average_bucket_size,
				self.config.average_threshold,
				guard.status.request_count,
				guard.status.average_bucket_countdown,
				guard.status.state,
				&guard.history,
				&guard.aggregators,
				self.config.max_top_hits,
			);
			drop(guard);
			if let Err(error) = result {
				error!("failed to render dashboard: {error}");
			}
		}
	}
}



//		Tests

#[cfg(test)]
#[path = "tests/monitor.rs"]
mod tests;
