//! The bridge: worker pool lifecycle, submission handles, and the
//! per-step hook.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use tether_core::request::{Request, Response};
use tether_core::time::SimTime;
use tether_sched::{ClockPublisher, EffectScheduler, JobRegistry};
use tether_world::World;

use crate::config::{BridgeConfig, ConfigError};
use crate::facade::CommandFacade;
use crate::worker::{worker_loop, RequestEnvelope};

/// Errors surfaced to command submitters.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The bridge has shut down; no worker will service the request.
    Shutdown,
    /// The bounded request channel is full. Back-pressure: retry later or
    /// slow down.
    ChannelFull,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "bridge has shut down"),
            Self::ChannelFull => write!(f, "request channel is full"),
        }
    }
}

impl Error for SubmitError {}

/// Cheap, cloneable handle for submitting commands to the bridge.
///
/// [`submit`](BridgeHandle::submit) blocks the calling thread until a
/// worker has executed the command and replied; it never blocks the
/// simulation's stepping thread. Handles stay valid across the bridge's
/// lifetime and start returning [`SubmitError::Shutdown`] once it stops.
#[derive(Clone)]
pub struct BridgeHandle {
    requests: Sender<RequestEnvelope>,
}

impl BridgeHandle {
    /// Submit one command and wait for its response.
    pub fn submit(&self, request: Request) -> Result<Response, SubmitError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.requests
            .try_send(RequestEnvelope {
                request,
                reply: reply_tx,
            })
            .map_err(|err| match err {
                TrySendError::Full(_) => SubmitError::ChannelFull,
                TrySendError::Disconnected(_) => SubmitError::Shutdown,
            })?;
        reply_rx.recv().map_err(|_| SubmitError::Shutdown)
    }
}

/// Owns the worker pool, the job registries, and the clock throttle.
///
/// Construction spawns the workers; the simulation integration then calls
/// [`on_step`](Bridge::on_step) once per step from the stepping thread and
/// hands [`BridgeHandle`]s to whatever transport layer receives external
/// commands.
///
/// Dropping the bridge shuts the pool down and joins every worker.
pub struct Bridge {
    world: Arc<dyn World>,
    scheduler: EffectScheduler,
    clock: ClockPublisher,
    efforts: Arc<JobRegistry>,
    wrenches: Arc<JobRegistry>,
    requests: Sender<RequestEnvelope>,
    clock_tx: Sender<SimTime>,
    clock_rx: Receiver<SimTime>,
    shutdown: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

impl Bridge {
    /// Validate the configuration, build the registries and facade, and
    /// spawn the worker pool.
    pub fn new(world: Arc<dyn World>, config: BridgeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let efforts = Arc::new(JobRegistry::new());
        let wrenches = Arc::new(JobRegistry::new());
        let facade = Arc::new(CommandFacade::new(
            Arc::clone(&world),
            Arc::clone(&efforts),
            Arc::clone(&wrenches),
        ));

        let (requests, request_rx) = bounded(config.request_queue_capacity);
        let (clock_tx, clock_rx) = bounded(config.clock_queue_capacity);
        let shutdown = Arc::new(AtomicBool::new(false));

        let worker_count = config.resolved_worker_count();
        let mut workers = Vec::with_capacity(worker_count);
        for i in 0..worker_count {
            let facade = Arc::clone(&facade);
            let rx = request_rx.clone();
            let flag = Arc::clone(&shutdown);
            let handle = thread::Builder::new()
                .name(format!("tether-worker-{i}"))
                .spawn(move || worker_loop(facade, rx, flag))
                .expect("failed to spawn tether worker thread");
            workers.push(handle);
        }
        log::info!("bridge started with {worker_count} worker(s)");

        let scheduler = EffectScheduler::new(
            Arc::clone(&world),
            Arc::clone(&efforts),
            Arc::clone(&wrenches),
        );
        let clock = ClockPublisher::new(config.clock_frequency_hz, world.sim_time());

        Ok(Self {
            world,
            scheduler,
            clock,
            efforts,
            wrenches,
            requests,
            clock_tx,
            clock_rx,
            shutdown,
            workers,
        })
    }

    /// A new submission handle. Clone freely; handles are independent.
    pub fn handle(&self) -> BridgeHandle {
        BridgeHandle {
            requests: self.requests.clone(),
        }
    }

    /// The clock telemetry stream. Each received value is a simulation
    /// time that passed the publication throttle. Clone freely; values
    /// are consumed by whichever receiver gets there first.
    pub fn clock_events(&self) -> Receiver<SimTime> {
        self.clock_rx.clone()
    }

    /// Per-step hook, called from the stepping thread after the physics
    /// update. Runs the scheduler pass over both job kinds, then offers
    /// the current time to the clock throttle. Never blocks: a full
    /// telemetry channel drops the publication.
    pub fn on_step(&mut self) {
        self.scheduler.run_pass();
        if let Some(now) = self.clock.on_step(self.world.sim_time()) {
            if let Err(TrySendError::Full(_)) = self.clock_tx.try_send(now) {
                log::debug!("clock consumer lagging, dropped publication at {now}");
            }
        }
    }

    /// Currently scheduled job counts, `(efforts, wrenches)`.
    pub fn scheduled_jobs(&self) -> (usize, usize) {
        (self.efforts.len(), self.wrenches.len())
    }

    /// Stop the worker pool and join every worker. Idempotent; also runs
    /// on drop. Outstanding handles start failing with
    /// [`SubmitError::Shutdown`] once the workers exit.
    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("worker thread panicked during shutdown");
            }
        }
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_error_messages() {
        assert_eq!(SubmitError::Shutdown.to_string(), "bridge has shut down");
        assert_eq!(
            SubmitError::ChannelFull.to_string(),
            "request channel is full"
        );
    }
}
