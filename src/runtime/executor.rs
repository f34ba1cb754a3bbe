//! Session runtime executor

use super::ProcessError;
use crate::language;
use crate::narrator::WeatherNarrator;
use crate::resolver::LocationResolver;
use crate::state_machine::{
    transition, Effect, Event, Notice, Session, TransitionError, WeatherReport,
};
use crate::weather::WeatherProvider;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Drives one session: transitions, then effects, until nothing is pending
pub struct SessionRuntime {
    session: Session,
    resolver: LocationResolver,
    narrator: WeatherNarrator,
    weather: Arc<dyn WeatherProvider>,
    notice_tx: mpsc::UnboundedSender<Notice>,
}

impl SessionRuntime {
    pub fn new(
        resolver: LocationResolver,
        narrator: WeatherNarrator,
        weather: Arc<dyn WeatherProvider>,
        notice_tx: mpsc::UnboundedSender<Notice>,
    ) -> Self {
        Self {
            session: Session::default(),
            resolver,
            narrator,
            weather,
            notice_tx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle a user event and everything it sets in motion.
    ///
    /// A rejected event leaves the session untouched.
    pub async fn handle(&mut self, event: Event) -> Result<(), TransitionError> {
        let mut pending = VecDeque::from([event]);

        while let Some(current) = pending.pop_front() {
            let name = current.name();
            let result = transition(&self.session, current)?;

            let from = self.session.step;
            self.session = result.new_session;
            tracing::debug!(
                event = name,
                from = from.as_str(),
                to = self.session.step.as_str(),
                "Session transition"
            );

            for effect in result.effects {
                if let Some(next) = self.execute_effect(effect).await {
                    pending.push_back(next);
                }
            }
        }

        Ok(())
    }

    fn notify(&self, notice: Notice) {
        // The UI may have gone away; the session carries on regardless
        let _ = self.notice_tx.send(notice);
    }

    fn status(&self, text: &str) {
        self.notify(Notice::Status(text.to_string()));
    }

    async fn execute_effect(&mut self, effect: Effect) -> Option<Event> {
        if effect.is_external() {
            tracing::debug!(effect = ?effect, "Executing effect");
        }

        match effect {
            Effect::Notify(notice) => {
                self.notify(notice);
                None
            }

            Effect::CheckAmbiguity { location } => {
                self.status("Checking location...");
                let ambiguous = self.resolver.is_ambiguous(&location).await;
                Some(Event::AmbiguityChecked { ambiguous })
            }

            Effect::ResolveCountry { location } => {
                self.status("Detecting country...");
                match self.resolver.resolve_country(&location).await {
                    Ok(country) => Some(Event::CountryResolved { country }),
                    Err(e) => {
                        tracing::error!(location = %location, error = %e, "Country resolution failed");
                        Some(Event::Failed {
                            message: ProcessError::from(e).to_string(),
                        })
                    }
                }
            }

            Effect::RunProcess { location, country } => {
                match self.run_process(&location, &country).await {
                    Ok(report) => {
                        tracing::info!(
                            location = %location,
                            country = %country,
                            language = %report.language,
                            confirmation = %report.confirmation,
                            "Weather report ready"
                        );
                        Some(Event::ProcessCompleted { report })
                    }
                    Err(e) => {
                        tracing::error!(location = %location, country = %country, error = %e, "Process failed");
                        Some(Event::Failed {
                            message: e.to_string(),
                        })
                    }
                }
            }
        }
    }

    /// Language, confirmation, weather, then the two-step narration
    async fn run_process(&self, location: &str, country: &str) -> Result<WeatherReport, ProcessError> {
        self.status("Detecting language...");
        let language = self.resolver.detect_language(location, country).await?;

        self.status("Confirming location...");
        let confirmation = self
            .resolver
            .build_confirmation(location, country, &language)
            .await?;
        self.notify(Notice::Confirmation(confirmation.clone()));

        self.status("Getting the weather data...");
        let language_code = language::resolve_code(&language);
        match language_code {
            Some(code) => tracing::debug!(
                code,
                provider_language = language::language_name(code).unwrap_or(code),
                "Requesting localized weather"
            ),
            None => tracing::debug!(language = %language, "No provider code, requesting default language"),
        }
        let weather_data = self
            .weather
            .fetch_weather(location, Some(country), language_code)
            .await?;
        self.notify(Notice::WeatherRetrieved);

        self.status("Putting together some suggestions...");
        let (forecast, suggestions) = self.narrator.narrate(&weather_data, &language).await?;

        Ok(WeatherReport {
            language,
            confirmation,
            weather_data,
            forecast,
            suggestions,
        })
    }
}
