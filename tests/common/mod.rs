//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use classroom_ai::error::{OrchestratorError, Result};
use classroom_ai::models::LessonPlanParams;
use classroom_ai::provider::CompletionProvider;
use classroom_ai::{Config, Orchestrator};

/// Provider that replays queued replies, then repeats a default reply.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String>>>,
    default_reply: String,
    latency: Duration,
    text_calls: AtomicUsize,
    image_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(default_reply: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: default_reply.to_string(),
            latency: Duration::ZERO,
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with a remote error.
    pub fn failing(attempts: usize) -> Self {
        let provider = Self::new("");
        for n in 0..attempts {
            provider.push(Err(OrchestratorError::RemoteCall(format!(
                "service unavailable ({})",
                n + 1
            ))));
        }
        provider
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn push(&self, reply: Result<String>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_text(&self, text: &str) {
        self.push(Ok(text.to_string()));
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.text_calls() + self.image_calls()
    }

    async fn next_reply(&self) -> Result<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let queued = self.replies.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(self.default_reply.clone()))
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        self.next_reply().await
    }

    async fn complete_with_image(
        &self,
        _prompt: &str,
        _image: &[u8],
        _mime_type: &str,
    ) -> Result<String> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.next_reply().await
    }
}

/// Defaults with a short retry step so failing tests stay fast.
pub fn test_config() -> Config {
    Config {
        retry_base_delay_ms: 10,
        ..Config::default()
    }
}

pub fn orchestrator(provider: &Arc<ScriptedProvider>, config: &Config) -> Orchestrator {
    let provider: Arc<dyn CompletionProvider> = provider.clone();
    Orchestrator::new(provider, config)
}

pub fn tamil_lesson() -> LessonPlanParams {
    LessonPlanParams {
        subject: "Tamil".to_string(),
        grade: "Grade 3".to_string(),
        duration: 45,
        topic: None,
        language: None,
        objectives: vec![],
    }
}
