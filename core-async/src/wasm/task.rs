//! WASM task spawning with an awaitable `JoinHandle`.
//!
//! The spawned future is driven by the browser's event loop via
//! `wasm_bindgen_futures::spawn_local`; its output comes back through a
//! oneshot channel that the handle awaits.

use futures::channel::oneshot;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Error returned when a spawned task never produced a result.
///
/// On the browser a task only fails to report when it was dropped before
/// completion (for example because it panicked and unwound the event loop
/// turn that was polling it).
#[derive(Debug, Clone)]
pub struct JoinError {
    _priv: (),
}

impl JoinError {
    fn cancelled() -> Self {
        Self { _priv: () }
    }

    /// Always true: dropped senders are the only failure mode on wasm.
    pub fn is_cancelled(&self) -> bool {
        true
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task was cancelled")
    }
}

impl std::error::Error for JoinError {}

/// A handle to a spawned task.
///
/// Dropping the handle detaches the task; it keeps running to completion.
pub struct JoinHandle<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for JoinHandle<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(output)) => Poll::Ready(Ok(output)),
            Poll::Ready(Err(_)) => Poll::Ready(Err(JoinError::cancelled())),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Spawns a future onto the page's event loop.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    let (sender, receiver) = oneshot::channel();

    wasm_bindgen_futures::spawn_local(async move {
        let output = future.await;
        // Receiver gone means the caller detached; nothing to report.
        let _ = sender.send(output);
    });

    JoinHandle { receiver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_spawn_returns_value() {
        let handle = spawn(async { 42 });
        assert_eq!(handle.await.unwrap(), 42);
    }

    #[wasm_bindgen_test]
    async fn test_spawn_multiple_tasks() {
        let first = spawn(async { "a.txt" });
        let second = spawn(async { "b.bin" });

        assert_eq!(second.await.unwrap(), "b.bin");
        assert_eq!(first.await.unwrap(), "a.txt");
    }
}
