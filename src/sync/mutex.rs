// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! A first-in, first-out asynchronous mutex.

use std::{
    collections::VecDeque,
    fmt::{self, Debug},
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures::channel::oneshot;
use tracing::trace;

#[derive(Default)]
struct MutexState {
    queue: VecDeque<oneshot::Sender<MutexReleaser>>,
    held: bool,
}

type SharedState = Arc<parking_lot::Mutex<MutexState>>;

/// Hand the lock to the oldest live request, or mark it idle if there is none.
///
/// Requests whose `Acquire` future was dropped are skipped.
fn dispatch(shared: &SharedState, state: &mut MutexState) {
    while let Some(waiter) = state.queue.pop_front() {
        let releaser = MutexReleaser {
            state: Arc::clone(shared),
        };
        if waiter.send(releaser).is_ok() {
            state.held = true;
            trace!(waiting = state.queue.len(), "mutex handed to next waiter");
            return;
        }
        trace!("skipping abandoned mutex request");
    }
    state.held = false;
}

/// An asynchronous mutual-exclusion lock that serves requests strictly in the
/// order `acquire` was called.
///
/// The lock protects no data of its own: it serializes whatever the holder
/// does between `acquire` resolving and `MutexReleaser::release`. Clones share
/// the same lock.
///
/// There is no timeout. A holder that never calls `release` leaves the lock
/// held forever and every queued request waits forever; dropping a
/// `MutexReleaser` does *not* release the lock.
///
/// ```
/// use structpack::Mutex;
/// # tokio_test::block_on(async {
/// let mutex = Mutex::new();
/// let releaser = mutex.acquire().await;
/// assert!(mutex.is_locked());
/// releaser.release();
/// assert!(!mutex.is_locked());
/// # });
/// ```
#[derive(Clone, Default)]
pub struct Mutex {
    state: SharedState,
}

impl Mutex {
    pub fn new() -> Mutex {
        Mutex::default()
    }

    /// Queue a request for the lock.
    ///
    /// An idle lock is handed over right away, before the returned future is
    /// even polled. Dropping the future withdraws the request, passing the
    /// lock on if it had already been handed over.
    pub fn acquire(&self) -> Acquire {
        let (tx, rx) = oneshot::channel();
        let mut state = self.state.lock();
        state.queue.push_back(tx);
        if !state.held {
            dispatch(&self.state, &mut state);
        }
        Acquire { rx }
    }

    /// Run `f` while holding the lock, releasing it afterwards even if the
    /// returned future is dropped part way through.
    pub async fn with_lock<F, Fut, T>(&self, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _guard = ReleaseOnDrop(Some(self.acquire().await));
        f().await
    }

    /// Whether some request currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.state.lock().held
    }

    /// Number of requests queued behind the current holder.
    pub fn waiting(&self) -> usize {
        self.state.lock().queue.len()
    }
}

impl Debug for Mutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Mutex")
            .field("held", &state.held)
            .field("waiting", &state.queue.len())
            .finish()
    }
}

/// The capability to release a held `Mutex`.
#[must_use = "the mutex stays locked until `release` is called"]
pub struct MutexReleaser {
    state: SharedState,
}

impl MutexReleaser {
    /// Release the lock and hand it to the next queued request, if any.
    pub fn release(self) {
        let mut state = self.state.lock();
        state.held = false;
        dispatch(&self.state, &mut state);
    }
}

impl Debug for MutexReleaser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutexReleaser").finish()
    }
}

struct ReleaseOnDrop(Option<MutexReleaser>);

impl Drop for ReleaseOnDrop {
    fn drop(&mut self) {
        if let Some(releaser) = self.0.take() {
            releaser.release();
        }
    }
}

/// Future returned by `Mutex::acquire`.
#[must_use = "futures do nothing unless polled"]
pub struct Acquire {
    rx: oneshot::Receiver<MutexReleaser>,
}

impl Future for Acquire {
    type Output = MutexReleaser;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(releaser)) => Poll::Ready(releaser),
            // The lock state is gone: every handle was dropped while a holder
            // never released. This request can never be served.
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Pending,
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for Acquire {
    fn drop(&mut self) {
        self.rx.close();
        if let Ok(Some(releaser)) = self.rx.try_recv() {
            releaser.release();
        }
    }
}

impl Debug for Acquire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acquire").finish()
    }
}
