//! Session state types

use crate::weather::WeatherPayload;

/// Where the session is in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Waiting for the user's location
    #[default]
    Location,
    /// Location known; waiting for the user's country or for auto-resolution
    Country,
    /// Detecting language, fetching weather and narrating
    Process,
    /// Report shown; offers "start over"
    Done,
    /// The process failed; offers "try again"
    Error,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Location => "location",
            Step::Country => "country",
            Step::Process => "process",
            Step::Done => "done",
            Step::Error => "error",
        }
    }

    /// States that accept a reset back to `Location`
    pub fn is_finished(self) -> bool {
        matches!(self, Step::Done | Step::Error)
    }
}

/// Everything known about the current user interaction.
///
/// `Session::default()` is both the initial value and the result of a reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub step: Step,
    pub location: Option<String>,
    pub country: Option<String>,
    pub is_ambiguous: bool,
    /// Lowercase English language name
    pub language: Option<String>,
    pub weather_data: Option<WeatherPayload>,
    pub weather_interpretation: Option<String>,
    pub suggestions: Option<String>,
}

impl Session {
    /// Location and country, only when both are present
    pub fn place(&self) -> Option<(&str, &str)> {
        Some((self.location.as_deref()?, self.country.as_deref()?))
    }
}

/// Successful result of the process step
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub language: String,
    pub confirmation: String,
    pub weather_data: WeatherPayload,
    pub forecast: String,
    pub suggestions: String,
}

/// Trimmed text, `None` when nothing is left
pub fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
