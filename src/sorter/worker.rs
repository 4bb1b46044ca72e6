//! Background sort thread
//!
//! The worker owns the buffer being sorted. The UI thread only sees copies of
//! it, delivered as [`SortEvent::Frame`]s over an mpsc channel, and gets the
//! buffer back in [`SortEvent::Finished`] or from [`SortWorker::cancel`].

use super::{AnimatedSort, CancelFlag, Direction, FrameSink, Highlight, SortOutcome};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Message from the sort thread to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// Values right after a swap
    Frame {
        values: Vec<u32>,
        highlight: Highlight,
    },
    /// Last message of a run
    Finished {
        values: Vec<u32>,
        outcome: SortOutcome,
    },
}

struct ChannelSink(Sender<SortEvent>);

impl FrameSink for ChannelSink {
    fn frame(&mut self, values: &[u32], highlight: Highlight) {
        // The receiver only disappears when the UI is shutting down
        let _ = self.0.send(SortEvent::Frame {
            values: values.to_vec(),
            highlight,
        });
    }
}

/// Handle to a running sort thread
#[derive(Debug)]
pub struct SortWorker {
    flag: CancelFlag,
    events: Receiver<SortEvent>,
    handle: Option<JoinHandle<(Vec<u32>, SortOutcome)>>,
}

impl SortWorker {
    /// Move `values` onto a new thread and start sorting them
    pub fn spawn(values: Vec<u32>, direction: Direction, step_delay: Duration) -> Self {
        let flag = CancelFlag::armed();
        let (tx, events) = mpsc::channel();

        let thread_flag = flag.clone();
        let handle = thread::spawn(move || {
            let mut values = values;
            let outcome = {
                let sink = ChannelSink(tx.clone());
                let mut run = AnimatedSort::new(&mut values, direction, thread_flag, sink)
                    .with_step_delay(step_delay);
                run.run()
            };
            let _ = tx.send(SortEvent::Finished {
                values: values.clone(),
                outcome,
            });
            (values, outcome)
        });

        SortWorker {
            flag,
            events,
            handle: Some(handle),
        }
    }

    /// Whether the sort is still running (neither cancelled nor finished)
    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Next pending event, without blocking
    pub fn try_next(&self) -> Option<SortEvent> {
        self.events.try_recv().ok()
    }

    /// Next event, waiting up to `timeout`
    pub fn next_timeout(&self, timeout: Duration) -> Option<SortEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Stop the sort and wait for the thread to exit.
    ///
    /// Frames still in the channel are dropped with the receiver, so nothing
    /// from this run can reach the display afterwards. Returns the buffer as
    /// the thread left it, with [`SortOutcome::Completed`] if the sort had
    /// already finished before the flag was cleared.
    pub fn cancel(mut self) -> Option<(Vec<u32>, SortOutcome)> {
        self.flag.cancel();
        self.join()
    }

    fn join(&mut self) -> Option<(Vec<u32>, SortOutcome)> {
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(finished) => Some(finished),
            Err(_) => {
                tracing::error!("sort thread panicked");
                None
            }
        }
    }
}

impl Drop for SortWorker {
    fn drop(&mut self) {
        self.flag.cancel();
        let _ = self.join();
    }
}
