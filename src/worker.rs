// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::thread;

use anyhow::{Context, Result};
use bonding::BondConfig;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::{pipeline, WorkerEvent};

/// A trajectory parse running on its own thread.
///
/// The worker owns the file content and the bond configuration; nothing is shared with the
/// caller.  Events arrive in order: zero or more `Progress`, then one `Complete` or `Error`.
/// Dropping the worker cancels it from the caller's point of view: the thread runs to the end of
/// the current parse and its remaining events are discarded.
pub struct ParserWorker {
    handle: Option<thread::JoinHandle<()>>,
    events: UnboundedReceiver<WorkerEvent>,
}

impl ParserWorker {
    pub fn spawn(content: String, config: BondConfig) -> Result<Self> {
        let (mut tx, events) = unbounded_channel();

        let handle = thread::Builder::new()
            .name("trajectory-parser".into())
            .spawn(move || {
                log::debug!("Started trajectory parser worker");
                pipeline::run(&content, &config, &mut tx);
                log::debug!("Trajectory parser worker shutting down");
            })
            .context("failed to spawn the trajectory parser thread")?;

        Ok(Self {
            handle: Some(handle),
            events,
        })
    }

    /// Waits for the next event.  Returns `None` once the terminal event has been received and
    /// the worker has exited.
    pub async fn recv(&mut self) -> Option<WorkerEvent> {
        self.events.recv().await
    }

    /// Blocking version of [`recv`](Self::recv).  Must not be called from within an async
    /// runtime.
    pub fn blocking_recv(&mut self) -> Option<WorkerEvent> {
        self.events.blocking_recv()
    }

    /// Returns an event if one is ready.
    pub fn try_recv(&mut self) -> Option<WorkerEvent> {
        self.events.try_recv().ok()
    }

    /// Blocks until the terminal event, passing each progress message to `on_progress`.
    pub fn wait(mut self, mut on_progress: impl FnMut(&str)) -> WorkerEvent {
        while let Some(event) = self.blocking_recv() {
            match event {
                WorkerEvent::Progress { message } => on_progress(&message),
                terminal => {
                    if let Some(handle) = self.handle.take() {
                        if handle.join().is_err() {
                            log::warn!("trajectory parser thread panicked after finishing");
                        }
                    }
                    return terminal;
                }
            }
        }

        WorkerEvent::error("The trajectory parser exited without a result")
    }
}

impl Drop for ParserWorker {
    fn drop(&mut self) {
        // Detach rather than join; the caller must not wait on an abandoned parse.
        self.events.close();
        self.handle.take();
    }
}

// End of File
