//! Trailing-edge debounce on top of the Tokio timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// 非同步等待指定毫秒數
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub fn debounce<A, F>(func: F, delay_ms: u64) -> Debouncer<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debouncer::new(func, Duration::from_millis(delay_ms))
}

#[derive(Default)]
struct TimerState {
    // Bumped on every schedule/cancel; a firing timer only acts if it still matches.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// Wraps `func` so that only the last call within `delay` is executed.
///
/// Clones share the same pending timer. Calls must be made from within a
/// Tokio runtime.
pub struct Debouncer<A> {
    func: Arc<dyn Fn(A) + Send + Sync>,
    delay: Duration,
    state: Arc<Mutex<TimerState>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            delay: self.delay,
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            delay,
            state: Arc::new(Mutex::new(TimerState::default())),
        }
    }

    /// Schedules `func(args)` after the delay, superseding any pending call.
    pub fn call(&self, args: A) {
        let mut state = lock(&self.state);
        if let Some(handle) = state.pending.take() {
            handle.abort();
            tracing::debug!("Debounced call superseded (generation {})", state.generation);
        }

        state.generation += 1;
        let generation = state.generation;
        let func = Arc::clone(&self.func);
        let shared = Arc::clone(&self.state);
        let delay = self.delay;

        tracing::debug!("Debounced call scheduled in {:?} (generation {})", delay, generation);
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut state = lock(&shared);
                if state.generation != generation {
                    return;
                }
                state.pending = None;
            }
            tracing::debug!("Debounced call firing (generation {})", generation);
            func(args);
        }));
    }

    /// Drops the pending call, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut state = lock(&self.state);
        state.generation += 1;
        match state.pending.take() {
            Some(handle) => {
                handle.abort();
                tracing::debug!("Debounced call cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.state).pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

fn lock(state: &Mutex<TimerState>) -> MutexGuard<'_, TimerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
