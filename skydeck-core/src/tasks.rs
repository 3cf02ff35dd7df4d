//! Keyed async task manager
//!
//! Runs the futures behind effects and posts their result actions back to
//! the runtime's action channel. Tasks are registered under a key;
//! spawning under a key that is already running aborts the previous task
//! first, so at most one suggestion resolution, weather fetch, or news
//! fetch is in flight per key at any time. Aborting an in-flight HTTP
//! request is an optimization only - staleness is decided by the reducer.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::action::Action;

/// Identifies a task for replacement and cancellation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Manages async task lifecycle with replace-on-spawn semantics.
///
/// Futures resolve to `Option<Action>`: `Some` is sent to the action
/// channel, `None` means the task has nothing to report (advisory
/// failures end up here after logging).
pub struct TaskManager {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, aborting any existing task with the same key.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            if let Some(action) = future.await {
                // Receiver dropped means the app is shutting down.
                let _ = tx.send(action);
            }
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Abort a task by key. No-op when nothing runs under the key.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Abort everything, e.g. on shutdown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn edited(text: &str) -> Action {
        Action::QueryEdited(text.into())
    }

    #[tokio::test]
    async fn test_spawn_sends_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("probe", async { Some(edited("a")) });

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, edited("a"));
    }

    #[tokio::test]
    async fn test_none_result_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("probe", async { None });

        let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_spawn_replaces_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("probe", async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Some(edited("slow"))
        });
        tasks.spawn("probe", async { Some(edited("fast")) });

        let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        assert_eq!(action, edited("fast"));

        // The aborted task never reports.
        let result = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("probe", async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Some(edited("late"))
        });
        assert!(tasks.is_running(&TaskKey::new("probe")));

        tasks.cancel(&TaskKey::new("probe"));
        assert!(!tasks.is_running(&TaskKey::new("probe")));

        let result = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(result.is_err() || result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cancel_all() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("a", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            None
        });
        tasks.spawn("b", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            None
        });

        tasks.cancel_all();
        assert!(!tasks.is_running(&TaskKey::new("a")));
        assert!(!tasks.is_running(&TaskKey::new("b")));
    }
}
