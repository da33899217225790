use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs an action once a fixed delay has passed without another trigger.
///
/// Each `trigger` restarts the countdown; at most one action is pending at
/// any time. Dropping the debouncer cancels whatever is pending.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `action` after the delay, replacing any pending action.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while an action is scheduled but has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One independent [`Debouncer`] per key, e.g. per hovered card.
#[derive(Debug)]
pub struct DebounceRegistry<K> {
    delay: Duration,
    timers: HashMap<K, Debouncer>,
}

impl<K> DebounceRegistry<K>
where
    K: Eq + Hash,
{
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: HashMap::new(),
        }
    }

    pub fn trigger<F>(&mut self, key: K, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.prune();

        let delay = self.delay;
        self.timers
            .entry(key)
            .or_insert_with(|| Debouncer::new(delay))
            .trigger(action);
    }

    pub fn cancel(&mut self, key: &K) {
        // Dropping the debouncer aborts its task
        self.timers.remove(key);
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.timers.get(key).is_some_and(Debouncer::is_pending)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.values().filter(|t| t.is_pending()).count()
    }

    fn prune(&mut self) {
        self.timers.retain(|_, timer| timer.is_pending());
    }
}
