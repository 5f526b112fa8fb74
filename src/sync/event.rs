// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! A one-shot event that any number of tasks can wait on.

use std::{
    fmt::{self, Debug},
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    task::{Context, Poll},
};

use futures::{
    channel::oneshot,
    future::{FutureExt, Shared},
};
use tracing::trace;

struct EventState {
    is_set: AtomicBool,
    trigger: parking_lot::Mutex<Option<oneshot::Sender<()>>>,
    signal: Shared<oneshot::Receiver<()>>,
}

/// An event that starts unset, and once set stays set.
///
/// Every waiter, whether it started waiting before or after `set`, is
/// released. Clones share the same event. If every handle is dropped without
/// `set` being called, outstanding waits never complete.
#[derive(Clone)]
pub struct BlockingEvent {
    inner: Arc<EventState>,
}

impl BlockingEvent {
    pub fn new() -> BlockingEvent {
        let (trigger, signal) = oneshot::channel();
        BlockingEvent {
            inner: Arc::new(EventState {
                is_set: AtomicBool::new(false),
                trigger: parking_lot::Mutex::new(Some(trigger)),
                signal: signal.shared(),
            }),
        }
    }

    /// Get a future that resolves once the event is set.
    pub fn wait(&self) -> Wait {
        Wait {
            signal: self.inner.signal.clone(),
        }
    }

    /// Set the event, releasing all waiters. Setting it again does nothing.
    pub fn set(&self) {
        self.inner.is_set.store(true, Ordering::Release);
        if let Some(trigger) = self.inner.trigger.lock().take() {
            trace!("event set, releasing waiters");
            // The receiving half lives as long as `inner` does.
            let _ = trigger.send(());
        }
    }

    pub fn is_set(&self) -> bool {
        self.inner.is_set.load(Ordering::Acquire)
    }
}

impl Default for BlockingEvent {
    fn default() -> BlockingEvent {
        BlockingEvent::new()
    }
}

impl Debug for BlockingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingEvent")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// Future returned by `BlockingEvent::wait`.
#[must_use = "futures do nothing unless polled"]
pub struct Wait {
    signal: Shared<oneshot::Receiver<()>>,
}

impl Future for Wait {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match self.signal.poll_unpin(cx) {
            Poll::Ready(Ok(())) => Poll::Ready(()),
            // Every event handle was dropped while unset.
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Pending,
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Debug for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wait").finish()
    }
}
