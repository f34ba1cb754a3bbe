//! Turns a raw weather payload into a forecast and then into suggestions.
//!
//! The two calls are strictly sequential: the suggestions prompt is built
//! from the full forecast text, never from the payload.

use crate::llm::{ask, LlmError, LlmService};
use crate::prompts;
use crate::weather::WeatherPayload;
use std::sync::Arc;

pub struct WeatherNarrator {
    llm: Arc<dyn LlmService>,
}

impl WeatherNarrator {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    pub async fn interpret_weather(
        &self,
        payload: &WeatherPayload,
        language: &str,
    ) -> Result<String, LlmError> {
        let prompt = prompts::interpret_weather(&payload.as_context(), language);
        ask(self.llm.as_ref(), prompt).await
    }

    /// Suggestions that add to the forecast; sentences repeated from it are dropped
    pub async fn suggest_activities(&self, forecast: &str, language: &str) -> Result<String, LlmError> {
        let reply = ask(self.llm.as_ref(), prompts::suggest_activities(forecast, language)).await?;
        let (additive, removed) = drop_repeated_sentences(&reply, forecast);
        if removed > 0 {
            tracing::debug!(removed, "Removed suggestion sentences already present in the forecast");
        }
        Ok(additive)
    }

    /// Run both steps, returning `(forecast, suggestions)`
    pub async fn narrate(
        &self,
        payload: &WeatherPayload,
        language: &str,
    ) -> Result<(String, String), LlmError> {
        let forecast = self.interpret_weather(payload, language).await?;
        let suggestions = self.suggest_activities(&forecast, language).await?;
        Ok((forecast, suggestions))
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。' | '！' | '？')
}

/// Full-width terminators close a sentence even with no space after them
fn is_wide_sentence_end(c: char) -> bool {
    matches!(c, '。' | '！' | '？')
}

/// One sentence of a reply and the whitespace that followed it
#[derive(Debug, PartialEq)]
struct Sentence {
    text: String,
    separator: String,
}

/// Split text into sentences; concatenating them gives back the input.
///
/// An ASCII terminator only closes a sentence at the end of the text, or
/// before whitespace not followed by a lowercase letter, so `12.5` and
/// `e.g. the` stay inside their sentence.
fn sentences(text: &str) -> Vec<Sentence> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        current.push(c);
        i += 1;
        if !is_sentence_end(c) {
            continue;
        }

        // Runs like "?!" or "..." stay with their sentence
        let mut last = c;
        while let Some(&next) = chars.get(i).filter(|n| is_sentence_end(**n)) {
            current.push(next);
            last = next;
            i += 1;
        }

        let gap = chars
            .iter()
            .skip(i)
            .take_while(|w| w.is_whitespace())
            .count();
        let closes = match chars.get(i + gap) {
            None => true,
            Some(next) => is_wide_sentence_end(last) || (gap > 0 && !next.is_lowercase()),
        };
        if closes {
            let separator = chars.iter().skip(i).take(gap).collect();
            i += gap;
            out.push(Sentence {
                text: std::mem::take(&mut current),
                separator,
            });
        }
    }

    if !current.is_empty() {
        out.push(Sentence {
            text: current,
            separator: String::new(),
        });
    }
    out
}

/// Remove every sentence of `text` that appears verbatim in `reference`.
///
/// Returns the remaining text and how many sentences were removed. Kept
/// sentences keep their original separators, so nothing changes when nothing
/// is removed.
fn drop_repeated_sentences(text: &str, reference: &str) -> (String, usize) {
    let mut kept = String::with_capacity(text.len());
    let mut removed = 0;

    for sentence in sentences(text) {
        let trimmed = sentence.text.trim();
        if !trimmed.is_empty() && reference.contains(trimmed) {
            removed += 1;
            continue;
        }
        // A removed first sentence leaves no leading gap
        if kept.is_empty() && removed > 0 {
            kept.push_str(sentence.text.trim_start());
        } else {
            kept.push_str(&sentence.text);
        }
        kept.push_str(&sentence.separator);
    }

    if removed > 0 {
        let end = kept.trim_end().len();
        kept.truncate(end);
    }
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::testing::MockLlmService;
    use serde_json::json;

    fn sample_payload() -> WeatherPayload {
        WeatherPayload::new(
            200,
            json!({
                "weather": [{"id": 500, "description": "light rain"}],
                "main": {"temp": 12.3, "feels_like": 11.0, "temp_min": 10.0, "temp_max": 14.0, "pressure": 1012, "humidity": 88},
                "visibility": 8000,
                "wind": {"speed": 4.1, "deg": 220},
                "clouds": {"all": 90}
            }),
        )
    }

    fn texts(text: &str) -> Vec<String> {
        sentences(text).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_sentences_keep_terminators() {
        assert_eq!(
            texts("It is cold. Wear a coat! Rain?"),
            vec!["It is cold.", "Wear a coat!", "Rain?"]
        );
        assert_eq!(texts("Wow?! Great"), vec!["Wow?!", "Great"]);
        assert_eq!(texts("雨です。傘を持って！"), vec!["雨です。", "傘を持って！"]);
        assert!(sentences("").is_empty());
    }

    #[test]
    fn test_sentences_ignore_decimals_and_abbreviations() {
        assert_eq!(
            texts("It is 12.5 degrees. Visit a museum, e.g. the Louvre."),
            vec!["It is 12.5 degrees.", "Visit a museum, e.g. the Louvre."]
        );
        assert_eq!(texts("Winds of 3.6 m/s"), vec!["Winds of 3.6 m/s"]);
    }

    #[test]
    fn test_sentences_reassemble_to_input() {
        let text = "Wear a coat.\n\nVisit the museum!  It opens at 9.30 today.";
        let split = sentences(text);
        assert_eq!(split[0].separator, "\n\n");
        assert_eq!(split[1].separator, "  ");
        let joined: String = split
            .iter()
            .map(|s| format!("{}{}", s.text, s.separator))
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_drop_repeated_sentences() {
        let forecast = "It is 12 degrees with light rain. Winds are gentle.";
        let reply = "It is 12 degrees with light rain. Take an umbrella! Visit a museum.";
        assert_eq!(
            drop_repeated_sentences(reply, forecast),
            ("Take an umbrella! Visit a museum.".to_string(), 1)
        );
        assert_eq!(drop_repeated_sentences(reply, ""), (reply.to_string(), 0));
    }

    #[test]
    fn test_reply_without_repeats_is_unchanged() {
        let forecast = "It is 12.5 degrees with light rain.";
        let reply = "Since it is 12.5 degrees, wear a coat.\n\nVisit the museum, e.g. the Louvre.";
        assert_eq!(drop_repeated_sentences(reply, forecast), (reply.to_string(), 0));
    }

    #[test]
    fn test_dropping_keeps_paragraph_breaks() {
        let forecast = "It is 12.5 degrees with light rain.";
        let reply = "It is 12.5 degrees with light rain.\n\nWear a coat.\n\nVisit a museum.";
        assert_eq!(
            drop_repeated_sentences(reply, forecast),
            ("Wear a coat.\n\nVisit a museum.".to_string(), 1)
        );

        let trailing = "Wear a coat.\n\nIt is 12.5 degrees with light rain.";
        assert_eq!(
            drop_repeated_sentences(trailing, forecast),
            ("Wear a coat.".to_string(), 1)
        );
    }

    #[tokio::test]
    async fn test_narrate_chains_forecast_into_suggestions() {
        let mock = Arc::new(MockLlmService::new());
        mock.queue_text("Expect 12°C with light rain and a high of 14°C.");
        mock.queue_text("Expect 12°C with light rain and a high of 14°C. Bring an umbrella and visit a café.");
        let narrator = WeatherNarrator::new(mock.clone());

        let (forecast, suggestions) = narrator.narrate(&sample_payload(), "english").await.unwrap();
        assert_eq!(forecast, "Expect 12°C with light rain and a high of 14°C.");
        assert_eq!(suggestions, "Bring an umbrella and visit a café.");

        let prompts = mock.recorded_prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("light rain"));
        assert!(prompts[0].contains("\"humidity\":88"));
        // Second prompt sees the forecast, not the payload
        assert!(prompts[1].contains(&forecast));
        assert!(!prompts[1].contains("\"humidity\":88"));
    }

    #[tokio::test]
    async fn test_suggestions_never_restate_forecast_sentences() {
        let mock = Arc::new(MockLlmService::new());
        let forecast = "Il fait 20 degrés. Le ciel est dégagé.";
        mock.queue_text("Le ciel est dégagé. Portez un t-shirt. Allez au parc !");
        let narrator = WeatherNarrator::new(mock.clone());

        let suggestions = narrator.suggest_activities(forecast, "french").await.unwrap();
        for sentence in sentences(&suggestions) {
            assert!(!forecast.contains(sentence.text.trim()));
        }
        assert!(suggestions.contains("Portez un t-shirt."));
    }

    #[tokio::test]
    async fn test_suggestions_keep_model_formatting() {
        let mock = Arc::new(MockLlmService::new());
        let forecast = "It is 12.5 degrees with light rain.";
        let reply = "Since it is 12.5 degrees, wear a coat.\n\nVisit the museum, e.g. the Louvre.";
        mock.queue_text(reply);
        let narrator = WeatherNarrator::new(mock.clone());

        let suggestions = narrator.suggest_activities(forecast, "english").await.unwrap();
        assert_eq!(suggestions, reply);
    }

    #[tokio::test]
    async fn test_interpret_failure_skips_suggestions() {
        let mock = Arc::new(MockLlmService::new());
        mock.queue_error(LlmError::network("offline"));
        let narrator = WeatherNarrator::new(mock.clone());

        assert!(narrator.narrate(&sample_payload(), "english").await.is_err());
        assert_eq!(mock.recorded_prompts().len(), 1);
    }
}
