//! Task ownership and state publication shared by the view-models.

use std::future::Future;
use std::pin::pin;

use futures_util::{Stream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::Response;

/// Owner of the tasks a view-model has spawned.
///
/// Handles are kept so teardown is explicit: `abort_all` stops everything
/// in flight, `join_all` waits for quiescence. Dropping the set aborts
/// whatever is still running.
pub(crate) struct TaskSet {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskSet {
    pub(crate) fn new() -> Self {
        Self {
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawn a task and track its handle. Finished handles are pruned here
    /// so repeated invocations do not accumulate them.
    pub(crate) fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut handles = self.handles.lock();
        handles.retain(|handle| !handle.is_finished());
        handles.push(tokio::spawn(future));
    }

    /// Abort every tracked task. In-flight emissions stop; the last value
    /// already published stays in place.
    pub(crate) fn abort_all(&self) {
        for handle in self.handles.lock().drain(..) {
            handle.abort();
        }
    }

    /// Wait for every task spawned so far to finish.
    pub(crate) async fn join_all(&self) {
        // The guard must not be held across await, so drain first.
        let handles: Vec<JoinHandle<()>> = self.handles.lock().drain(..).collect();
        for handle in handles {
            let _ = handle.await;
        }
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        for handle in self.handles.get_mut().drain(..) {
            handle.abort();
        }
    }
}

/// Republish every stream item as the latest value of a state slot.
///
/// `watch` buffers only the most recent value, so concurrent publishers
/// interleave last-write-wins. Publishing with no subscribers still stores
/// the value; a later subscriber reads the latest state on arrival.
pub(crate) async fn publish<T, S>(stream: S, slot: watch::Sender<Option<Response<T>>>)
where
    S: Stream<Item = Response<T>>,
{
    let mut stream = pin!(stream);
    while let Some(item) = stream.next().await {
        slot.send_replace(Some(item));
    }
}
