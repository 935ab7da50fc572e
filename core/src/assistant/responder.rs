//! Delayed delivery of resolver results.
//!
//! The assistant pauses before replying so the interface can show a typing
//! indicator. Only the most recent request is answered: every call takes a
//! fresh request id, and when its timer fires the result is delivered only
//! if no newer call (or [`Responder::cancel`]) has happened in between.

use log::debug;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("request {id} was superseded by request {latest}")]
    Superseded { id: u64, latest: u64 },
}

/// A delivered result paired with the input that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply<T> {
    pub id: u64,
    pub input: String,
    pub output: T,
}

pub struct Responder<F> {
    delay: Duration,
    latest: Arc<AtomicU64>,
    handler: F,
}

/// Clones share the request counter, so a request through any clone
/// supersedes pending requests on the others.
impl<F: Clone> Clone for Responder<F> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            latest: Arc::clone(&self.latest),
            handler: self.handler.clone(),
        }
    }
}

impl<F, T> Responder<F>
where
    F: Fn(&str) -> T,
{
    pub fn new(delay: Duration, handler: F) -> Self {
        Self {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
            handler,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Id of the most recently issued request (0 before the first call).
    pub fn latest_id(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Supersede every pending request.
    pub fn cancel(&self) {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("[responder] cancelled pending requests below {id}");
    }

    /// Wait out the delay, then run the handler if this is still the latest request.
    pub async fn respond(&self, input: &str) -> Result<Reply<T>, ResponseError> {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let latest = self.latest_id();
        if latest != id {
            debug!("[responder] dropping reply {id}, latest is {latest}");
            return Err(ResponseError::Superseded { id, latest });
        }

        Ok(Reply {
            id,
            input: input.to_owned(),
            output: (self.handler)(input),
        })
    }
}
