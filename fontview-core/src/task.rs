//! 后台请求队列

use std::future::Future;

use tokio::sync::mpsc;

use crate::event::Completion;

/// Spawns fetches and collects their completions.
///
/// Spawned tasks are detached: nothing is aborted when the user moves on, a
/// late completion is still delivered and the controller decides whether it
/// still applies. Must be used from within a tokio runtime.
pub struct TaskQueue {
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl TaskQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// 启动一个请求，完成后把结果送回队列
    pub fn spawn<F>(&mut self, fetch: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completion = fetch.await;
            // The receiver lives as long as the queue; a send error only
            // means the controller is gone.
            let _ = tx.send(completion);
        });
    }

    /// 尚未送达的请求数
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Waits for the next completion. Pends forever while nothing is in flight.
    pub async fn next(&mut self) -> Option<Completion> {
        let completion = self.rx.recv().await;
        if completion.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        completion
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
