// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Runtime-agnostic asynchronous synchronization primitives.
//!
//! Both are built on `futures` channels, so they work under any executor.

mod event;
mod mutex;

#[doc(inline)]
pub use crate::sync::{
    event::{BlockingEvent, Wait},
    mutex::{Acquire, Mutex, MutexReleaser},
};
