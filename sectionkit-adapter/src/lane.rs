use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use parking_lot::Mutex;

use crate::{DataSourceOptions, Result, SourceError};

type Job<S> = Box<dyn FnOnce(&mut S) + Send>;

enum LaneTask<S> {
    Apply(Job<S>),
    Shutdown,
}

/// State shared between the lane handle and the lane thread.
struct LaneState {
    running: AtomicBool,
    pending: AtomicUsize,
}

/// A dedicated thread that exclusively owns `S` and applies jobs to it in submission order.
///
/// Writes are queued without waiting. Reads queue a job that sends its result back over a
/// one-shot channel and block until it arrives, so a read observes every job submitted before
/// it and never a job half-applied.
pub(crate) struct Lane<S: Send + 'static> {
    sender: Sender<LaneTask<S>>,
    handle: Mutex<Option<JoinHandle<()>>>,
    state: Arc<LaneState>,
}

impl<S: Send + 'static> Lane<S> {
    pub(crate) fn spawn(initial: S, options: &DataSourceOptions) -> Result<Self> {
        let (sender, receiver) = match options.queue_capacity {
            Some(capacity) => bounded(capacity),
            None => unbounded(),
        };
        let state = Arc::new(LaneState {
            running: AtomicBool::new(true),
            pending: AtomicUsize::new(0),
        });

        let mut builder = thread::Builder::new().name(options.lane_name.clone());
        if let Some(stack_size) = options.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let thread_state = Arc::clone(&state);
        let handle = builder.spawn(move || {
            lane_loop(initial, receiver, &thread_state);
            thread_state.running.store(false, Ordering::Release);
        })?;
        sdebug!(name = %options.lane_name, "Lane::spawn");

        Ok(Self {
            sender,
            handle: Mutex::new(Some(handle)),
            state,
        })
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state.running.load(Ordering::Acquire)
            && self
                .handle
                .lock()
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    pub(crate) fn pending(&self) -> usize {
        self.state.pending.load(Ordering::Acquire)
    }

    /// Queues `job` without waiting for it to run.
    ///
    /// Returns `false` when the lane no longer accepts work.
    pub(crate) fn submit(&self, job: impl FnOnce(&mut S) + Send + 'static) -> bool {
        if !self.state.running.load(Ordering::Acquire) {
            strace!("Lane::submit: lane stopped, job dropped");
            return false;
        }

        self.state.pending.fetch_add(1, Ordering::AcqRel);
        match self.sender.send(LaneTask::Apply(Box::new(job))) {
            Ok(()) => true,
            Err(_) => {
                self.state.pending.fetch_sub(1, Ordering::AcqRel);
                false
            }
        }
    }

    /// Runs `f` on the lane and blocks until its result comes back.
    pub(crate) fn read<R, F>(&self, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&S) -> R + Send + 'static,
    {
        let (reply, result) = bounded(1);
        let queued = self.submit(move |state: &mut S| {
            let _ = reply.send(f(&*state));
        });
        if !queued {
            return Err(SourceError::LaneClosed);
        }
        result.recv().map_err(|_| SourceError::LaneClosed)
    }

    /// Stops accepting work, lets already-queued jobs finish, and joins the thread.
    ///
    /// Returns `true` if this call joined the thread and it exited cleanly.
    pub(crate) fn shutdown(&self) -> bool {
        self.state.running.store(false, Ordering::Release);
        let _ = self.sender.send(LaneTask::Shutdown);

        let Some(handle) = self.handle.lock().take() else {
            return false;
        };
        if handle.thread().id() == thread::current().id() {
            return false;
        }
        handle.join().is_ok()
    }
}

impl<S: Send + 'static> Drop for Lane<S> {
    fn drop(&mut self) {
        self.state.running.store(false, Ordering::Release);
        // Don't block in drop: the lane drains what is queued, then exits once the sender is gone.
        let _ = self.sender.try_send(LaneTask::Shutdown);
    }
}

fn lane_loop<S>(mut state: S, receiver: Receiver<LaneTask<S>>, shared: &LaneState) {
    while let Ok(task) = receiver.recv() {
        match task {
            LaneTask::Apply(job) => {
                job(&mut state);
                shared.pending.fetch_sub(1, Ordering::AcqRel);
            }
            LaneTask::Shutdown => break,
        }
    }
    sdebug!(
        dropped = shared.pending.load(Ordering::Acquire),
        "Lane: stopped"
    );
}
