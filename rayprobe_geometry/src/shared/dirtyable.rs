//! Lazily recomputed, cached values.

use crate::core::targets::UTIL;
use std::fmt::{Debug, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

type ComputeFn<T> = Box<dyn Fn() -> T + Send + Sync>;
type Listener = Box<dyn Fn() + Send + Sync>;

/// A computed value that is cached until it is marked as dirty.
///
/// The value is computed lazily: [Dirtyable::make_dirty] only sets a flag, and the computation runs
/// on the next [Dirtyable::value] call. The cached value is used for all reads in between.
///
/// # Thread Safety
/// Reads and dirtying are serialised by a lock, so the computation never runs twice for the same
/// dirtying, even with concurrent readers. Dirtying waits for any in-progress computation to finish.
///
/// # Chaining
/// Listeners added with [Dirtyable::on_dirtied] run after every dirtying, and may dirty other values,
/// so dependent values can be kept in sync. The dependency graph must not contain cycles.
pub struct Dirtyable<T> {
    compute: ComputeFn<T>,
    state: Mutex<State<T>>,
    listeners: Mutex<Vec<Listener>>,
}

struct State<T> {
    dirty: bool,
    /// Only [None] before the first computation
    value: Option<T>,
}

/// Locks the mutex, ignoring poisoning. A panic inside the computation leaves the value dirty,
/// so the state is still consistent
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> { mutex.lock().unwrap_or_else(PoisonError::into_inner) }

impl<T> Dirtyable<T> {
    /// Creates a new dirty value, that will be computed by `compute` when first read
    pub fn new(compute: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            compute: Box::new(compute),
            state: Mutex::new(State { dirty: true, value: None }),
            listeners: Mutex::new(vec![]),
        }
    }

    /// Whether the value will be recomputed on the next read
    pub fn is_dirty(&self) -> bool { lock(&self.state).dirty }

    /// Marks the value as needing recomputation, then notifies the listeners
    pub fn make_dirty(&self) {
        lock(&self.state).dirty = true;
        trace!(target: UTIL, "dirtyable marked dirty");

        // State lock is released before running listeners, so they can read this value
        for listener in lock(&self.listeners).iter() {
            listener();
        }
    }

    /// Adds a listener that is called every time [Dirtyable::make_dirty] is called.
    ///
    /// Listeners must not add more listeners to the same value
    pub fn on_dirtied(&self, listener: impl Fn() + Send + Sync + 'static) { lock(&self.listeners).push(Box::new(listener)); }
}

impl<T: Clone> Dirtyable<T> {
    /// Gets the value, recomputing it first if it is dirty
    pub fn value(&self) -> T {
        let mut state = lock(&self.state);
        if !state.dirty {
            if let Some(value) = &state.value {
                return value.clone();
            }
        }

        trace!(target: UTIL, "recomputing dirtyable value");
        let value = (self.compute)();
        state.value = Some(value.clone());
        state.dirty = false;
        value
    }
}

impl<T: Debug> Debug for Dirtyable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("Dirtyable")
            .field("dirty", &state.dirty)
            .field("value", &state.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn starts_dirty() {
        let d = Dirtyable::new(|| 2);
        assert!(d.is_dirty());
        assert_eq!(d.value(), 2);
        assert!(!d.is_dirty());
    }

    #[test]
    fn dirtying_recomputes() {
        let k = Arc::new(AtomicI32::new(0));
        let d = {
            let k = Arc::clone(&k);
            Dirtyable::new(move || k.fetch_add(1, Ordering::SeqCst) + 1)
        };

        assert_eq!(d.value(), 1);
        assert!(!d.is_dirty());
        // Cached, not recomputed
        assert_eq!(d.value(), 1);

        d.make_dirty();
        assert!(d.is_dirty());
        assert_eq!(d.value(), 2);
        assert!(!d.is_dirty());
        assert_eq!(k.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn chained_values() {
        let k = Arc::new(AtomicI32::new(5));
        let first_dirtied = Arc::new(AtomicBool::new(false));
        let second_dirtied = Arc::new(AtomicBool::new(false));

        let first = {
            let k = Arc::clone(&k);
            Arc::new(Dirtyable::new(move || k.load(Ordering::SeqCst) * 2))
        };
        let second = {
            let first = Arc::clone(&first);
            Arc::new(Dirtyable::new(move || first.value() * 5))
        };

        {
            let flag = Arc::clone(&first_dirtied);
            first.on_dirtied(move || flag.store(true, Ordering::SeqCst));
            let flag = Arc::clone(&second_dirtied);
            second.on_dirtied(move || flag.store(true, Ordering::SeqCst));
            let second = Arc::clone(&second);
            first.on_dirtied(move || second.make_dirty());
        }

        assert_eq!(first.value(), 10);
        assert_eq!(second.value(), 50);
        // Computing doesn't count as dirtying
        assert!(!first_dirtied.load(Ordering::SeqCst));
        assert!(!second_dirtied.load(Ordering::SeqCst));

        k.store(10, Ordering::SeqCst);
        first.make_dirty();
        assert!(first_dirtied.load(Ordering::SeqCst));
        assert!(second_dirtied.load(Ordering::SeqCst));
        assert_eq!(first.value(), 20);
        assert_eq!(second.value(), 100);
    }

    #[test]
    fn concurrent_reads_compute_once() {
        const DELAY: Duration = Duration::from_millis(100);

        let count = Arc::new(AtomicUsize::new(0));
        let d = {
            let count = Arc::clone(&count);
            Arc::new(Dirtyable::new(move || {
                thread::sleep(DELAY);
                count.fetch_add(1, Ordering::SeqCst);
                2
            }))
        };

        let start = Instant::now();
        let handles = (0..4)
            .map(|_| {
                let d = Arc::clone(&d);
                thread::spawn(move || d.value())
            })
            .collect::<Vec<_>>();
        for h in handles {
            assert_eq!(h.join().expect("reader thread panicked"), 2);
        }

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() >= DELAY);
    }

    #[test]
    fn dirty_while_computing() {
        const DELAY: Duration = Duration::from_millis(100);

        let count = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(AtomicBool::new(false));
        let d = {
            let count = Arc::clone(&count);
            let started = Arc::clone(&started);
            Arc::new(Dirtyable::new(move || {
                started.store(true, Ordering::SeqCst);
                thread::sleep(DELAY);
                count.fetch_add(1, Ordering::SeqCst) + 1
            }))
        };

        let reader = {
            let d = Arc::clone(&d);
            thread::spawn(move || d.value())
        };
        // Wait for the reader to be inside the computation
        while !started.load(Ordering::SeqCst) {
            thread::yield_now();
        }
        // Blocks until the computation is done, so the value is dirty again afterwards
        d.make_dirty();

        assert_eq!(reader.join().expect("reader thread panicked"), 1);
        assert!(d.is_dirty());
        assert_eq!(d.value(), 2);
    }
}
