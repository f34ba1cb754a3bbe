//! Centralized model definitions for all LLM providers

use super::openai::OpenAIModel;
use super::{LlmService, OpenAIService};
use std::sync::Arc;

/// LLM provider enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Groq,
    OpenAI,
}

impl Provider {
    /// Get the environment variable name for this provider's API key
    pub fn api_key_env_var(self) -> &'static str {
        match self {
            Provider::Groq => "GROQ_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// Model definition with metadata
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// User-facing model ID, also the provider's API name
    pub id: &'static str,
    pub provider: Provider,
    pub description: &'static str,
    /// Factory function to create the service
    pub factory: fn(&str, Option<&str>) -> Result<Arc<dyn LlmService>, String>,
}

fn make(
    model: OpenAIModel,
    api_key: &str,
    gateway: Option<&str>,
) -> Result<Arc<dyn LlmService>, String> {
    if api_key.is_empty() {
        return Err(format!("{} requires an API key or gateway", model.api_name()));
    }
    Ok(Arc::new(OpenAIService::new(
        api_key.to_string(),
        model,
        gateway,
    )))
}

/// Get all available model definitions
pub fn all_models() -> &'static [ModelDef] {
    &[
        ModelDef {
            id: "llama-3.3-70b-versatile",
            provider: Provider::Groq,
            description: "Llama 3.3 70B on Groq (default)",
            factory: |api_key, gateway| make(OpenAIModel::Llama33Versatile, api_key, gateway),
        },
        ModelDef {
            id: "llama-3.1-8b-instant",
            provider: Provider::Groq,
            description: "Llama 3.1 8B on Groq (fast)",
            factory: |api_key, gateway| make(OpenAIModel::Llama31Instant, api_key, gateway),
        },
        ModelDef {
            id: "gpt-4o",
            provider: Provider::OpenAI,
            description: "GPT-4o",
            factory: |api_key, gateway| make(OpenAIModel::GPT4o, api_key, gateway),
        },
        ModelDef {
            id: "gpt-4o-mini",
            provider: Provider::OpenAI,
            description: "GPT-4o mini (fast, cheap)",
            factory: |api_key, gateway| make(OpenAIModel::GPT4oMini, api_key, gateway),
        },
    ]
}
