//! Oracle-backed location understanding
//!
//! Ambiguity, country, language and the localized confirmation. Each call is
//! a single round trip with no retry.

use crate::llm::{ask, LlmError, LlmService};
use crate::prompts;
use std::sync::Arc;

/// Language name, lowercase, that skips translation of the confirmation
pub const ENGLISH: &str = "english";

pub struct LocationResolver {
    llm: Arc<dyn LlmService>,
}

impl LocationResolver {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    /// Whether more than one real-world place has this name.
    ///
    /// Fails open: an oracle error or any reply without a `yes` word counts
    /// as unambiguous.
    pub async fn is_ambiguous(&self, location: &str) -> bool {
        match ask(self.llm.as_ref(), prompts::ambiguity(location)).await {
            Ok(reply) => {
                let ambiguous = is_affirmative(&reply);
                tracing::info!(location, ambiguous, "Ambiguity check");
                ambiguous
            }
            Err(e) => {
                tracing::warn!(location, error = %e, "Ambiguity check failed, assuming unambiguous");
                false
            }
        }
    }

    /// English name of the country the location is in, unvalidated
    pub async fn resolve_country(&self, location: &str) -> Result<String, LlmError> {
        let country = ask(self.llm.as_ref(), prompts::country(location)).await?;
        tracing::info!(location, country = %country, "Resolved country");
        Ok(country)
    }

    /// Lowercase English name of the language used at the location
    pub async fn detect_language(&self, location: &str, country: &str) -> Result<String, LlmError> {
        let language = ask(self.llm.as_ref(), prompts::language(location, country))
            .await?
            .to_lowercase();
        tracing::info!(location, country, language = %language, "Detected language");
        Ok(language)
    }

    /// Confirmation sentence, fully translated when the language is not English
    pub async fn build_confirmation(
        &self,
        location: &str,
        country: &str,
        language: &str,
    ) -> Result<String, LlmError> {
        if language.trim().eq_ignore_ascii_case(ENGLISH) {
            return Ok(prompts::confirmation_template(location, country));
        }
        ask(
            self.llm.as_ref(),
            prompts::confirmation(location, country, language),
        )
        .await
    }
}

/// True when the reply contains the standalone word `yes`, any case
fn is_affirmative(reply: &str) -> bool {
    reply
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "yes")
}
