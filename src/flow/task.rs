use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Owns at most one in-flight fetch and hands out request generations.
///
/// Starting a new task aborts the previous one; an aborted task's future is
/// dropped, so it never reports back. Each start or cancel bumps the
/// generation, and receivers drop any result tagged with an older one. The
/// abort covers the common case, the generation covers a result that was
/// already queued when the abort landed.
pub struct LatestTask {
    runtime: Handle,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl LatestTask {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            generation: 0,
            in_flight: None,
        }
    }

    /// Aborts the running task (if any) and spawns the future built by `make`.
    ///
    /// `make` receives the new generation so the task can tag its result.
    pub fn spawn<F, Fut>(&mut self, make: F) -> u64
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let generation = self.cancel();
        self.in_flight = Some(self.runtime.spawn(make(generation)));
        generation
    }

    /// Aborts the running task and invalidates its generation.
    pub fn cancel(&mut self) -> u64 {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::trace!(generation = self.generation, "Aborting in-flight request");
            }
            handle.abort();
        }
        self.generation += 1;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for LatestTask {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
