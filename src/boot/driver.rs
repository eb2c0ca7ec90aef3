use crate::boot::{BootEvent, BootSequencer};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tracing::debug;

/// Owns the task that runs a [`BootSequencer`].
///
/// Dropping the handle aborts the task, so no event is produced after the
/// consumer goes away.
pub struct BootHandle {
    events: UnboundedReceiver<BootEvent>,
    task: JoinHandle<()>,
}

impl BootHandle {
    pub fn start(sequencer: BootSequencer, runtime: &Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = runtime.spawn(run_sequence(sequencer, tx));
        Self { events: rx, task }
    }

    /// Next event if one is ready. Never blocks.
    pub fn try_next(&mut self) -> Option<BootEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next event. `None` once the sequence has finished or
    /// was cancelled.
    pub async fn next(&mut self) -> Option<BootEvent> {
        self.events.recv().await
    }

    pub fn cancel(&mut self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    #[cfg(test)]
    pub(crate) fn abort_handle(&self) -> tokio::task::AbortHandle {
        self.task.abort_handle()
    }
}

impl Drop for BootHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_sequence(mut sequencer: BootSequencer, tx: UnboundedSender<BootEvent>) {
    while let Some(delay) = sequencer.next_delay() {
        tokio::time::sleep(delay).await;
        if let Some(event) = sequencer.step() {
            if tx.send(event).is_err() {
                debug!("boot consumer went away");
                return;
            }
        }
    }
    debug!("boot sequence complete");
}
