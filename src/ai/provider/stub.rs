//! In-process providers for tests

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionRequest, LlmProvider, LlmResponse, SharedProvider};
use crate::types::{Result, ScopeError};

#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Return this text for every call
    Canned(String),
    /// Sleep, then return the text
    Slow(Duration, String),
    /// Fail with an API error
    Fail(String),
    /// Calls whose system prompt mentions `marker` sleep for `delay` and
    /// raise `done` before answering; all others answer at once
    Gated {
        marker: String,
        delay: Duration,
        text: String,
        done: Arc<AtomicBool>,
    },
}

#[derive(Debug)]
pub struct StubProvider {
    behavior: StubBehavior,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn shared(behavior: StubBehavior) -> SharedProvider {
        Arc::new(Self::new(behavior))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Canned(text) => Ok(LlmResponse::text(text.clone())),
            StubBehavior::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(LlmResponse::text(text.clone()))
            }
            StubBehavior::Fail(message) => Err(ScopeError::LlmApi(message.clone())),
            StubBehavior::Gated {
                marker,
                delay,
                text,
                done,
            } => {
                if request.system.contains(marker.as_str()) {
                    tokio::time::sleep(*delay).await;
                    done.store(true, Ordering::SeqCst);
                }
                Ok(LlmResponse::text(text.clone()))
            }
        }
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!matches!(self.behavior, StubBehavior::Fail(_)))
    }
}
