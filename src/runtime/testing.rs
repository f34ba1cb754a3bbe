//! Mock implementations for testing
//!
//! These mocks enable testing the whole session without real I/O.

use crate::llm::{LlmError, LlmRequest, LlmResponse, LlmService};
use crate::state_machine::Notice;
use crate::weather::{WeatherError, WeatherPayload, WeatherProvider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::mpsc;

// ============================================================================
// Mock LLM Service
// ============================================================================

/// Mock LLM service that returns queued responses in order
#[derive(Default)]
pub struct MockLlmService {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    /// Record of all requests made
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful text reply
    pub fn queue_text(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(LlmResponse::text_only(text)));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// User prompts of every request, in order
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(LlmRequest::user_text)
            .collect()
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

// ============================================================================
// Mock Weather Provider
// ============================================================================

/// `(location, country, language_code)` of one fetch
pub type WeatherCall = (String, Option<String>, Option<String>);

/// Mock weather provider with queued payloads
#[derive(Default)]
pub struct MockWeatherProvider {
    responses: Mutex<VecDeque<Result<WeatherPayload, WeatherError>>>,
    calls: Mutex<Vec<WeatherCall>>,
}

impl MockWeatherProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_payload(&self, payload: WeatherPayload) {
        self.responses.lock().unwrap().push_back(Ok(payload));
    }

    pub fn queue_error(&self, error: WeatherError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_calls(&self) -> Vec<WeatherCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn fetch_weather(
        &self,
        location: &str,
        country: Option<&str>,
        language_code: Option<&str>,
    ) -> Result<WeatherPayload, WeatherError> {
        self.calls.lock().unwrap().push((
            location.to_string(),
            country.map(str::to_string),
            language_code.map(str::to_string),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(WeatherError::Request("No mock payload queued".to_string())))
    }
}

/// Collect every notice sent so far
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Notice>) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        notices.push(notice);
    }
    notices
}
