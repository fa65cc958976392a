// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-call deadline threaded through every client operation.

use std::future::Future;
use std::time::Duration;
use tokio::time::{error::Elapsed, timeout_at, Instant};

/// Deadline for a single client call. Dropping the call's future cancels it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// No deadline; the call runs until the transport answers
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drive `fut` to completion or until the deadline passes
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Elapsed> {
        match self.deadline {
            Some(deadline) => timeout_at(deadline, fut).await,
            None => Ok(fut.await),
        }
    }
}
