//! Weather Planner - weather-aware activity suggestions in the local language
//!
//! Resolves where the user is, fetches current conditions and has a language
//! model turn them into a forecast and suggestions for the day.

mod cli;
mod language;
mod llm;
mod narrator;
mod prompts;
mod resolver;
mod runtime;
mod state_machine;
mod weather;

use llm::{LlmConfig, ModelRegistry, Provider};
use narrator::WeatherNarrator;
use resolver::LocationResolver;
use runtime::SessionRuntime;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use weather::{OpenWeatherClient, WeatherConfig};

/// Startup configuration problems
#[derive(Debug, Error)]
enum ConfigError {
    #[error("No language model configured. Set {groq} or {openai}, or LLM_GATEWAY.")]
    NoModel {
        groq: &'static str,
        openai: &'static str,
    },
    #[error("Model {0} is not available with the configured keys")]
    UnknownModel(String),
    #[error("OPENWEATHER_API_KEY is not set")]
    NoWeatherKey,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "weather_planner=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Secrets may come from a local .env file
    dotenv::dotenv().ok();
    init_tracing();

    // Initialize LLM registry
    let llm_config = LlmConfig::from_env();
    let registry = ModelRegistry::new(&llm_config);
    if !registry.has_models() {
        return Err(ConfigError::NoModel {
            groq: Provider::Groq.api_key_env_var(),
            openai: Provider::OpenAI.api_key_env_var(),
        }
        .into());
    }
    let llm = registry
        .default()
        .ok_or_else(|| ConfigError::UnknownModel(registry.default_model_id().to_string()))?;
    tracing::info!(
        models = ?registry.available_models(),
        default = %registry.default_model_id(),
        "LLM registry initialized"
    );

    let weather_config = WeatherConfig::from_env().ok_or(ConfigError::NoWeatherKey)?;
    tracing::info!(url = %weather_config.base_url, "Weather provider configured");
    let weather = Arc::new(OpenWeatherClient::new(weather_config));

    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let runtime = SessionRuntime::new(
        LocationResolver::new(llm.clone()),
        WeatherNarrator::new(llm),
        weather,
        notice_tx,
    );

    cli::run(runtime, notice_rx).await?;
    Ok(())
}
