//! Pure state transition function
//!
//! Given the same session and event it always produces the same result; all
//! oracle and HTTP work is described by the returned effects.

use super::effect::Notice;
use super::state::non_blank;
use super::{Effect, Event, Session, Step};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    pub new_session: Session,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(session: Session) -> Self {
        Self {
            new_session: session,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Please enter a non-empty value")]
    EmptyInput,
    #[error("Invalid transition: {event} while in {step}")]
    InvalidTransition {
        step: &'static str,
        event: &'static str,
    },
}

pub fn transition(session: &Session, event: Event) -> Result<TransitionResult, TransitionError> {
    match (session.step, event) {
        // Location + LocationSubmitted -> (still Location) check ambiguity
        (Step::Location, Event::LocationSubmitted { text }) => {
            let location = non_blank(&text).ok_or(TransitionError::EmptyInput)?;
            let next = Session {
                location: Some(location.clone()),
                ..Session::default()
            };
            Ok(TransitionResult::new(next).with_effect(Effect::CheckAmbiguity { location }))
        }

        // Location + AmbiguityChecked -> Country, whatever the answer
        (Step::Location, Event::AmbiguityChecked { ambiguous }) => {
            let Some(location) = session.location.clone() else {
                return Ok(back_to_location(session.clone()));
            };
            let next = Session {
                step: Step::Country,
                is_ambiguous: ambiguous,
                ..session.clone()
            };
            let effect = if ambiguous {
                Effect::notify(Notice::AskCountry { location })
            } else {
                Effect::ResolveCountry { location }
            };
            Ok(TransitionResult::new(next).with_effect(effect))
        }

        // Country + CountrySubmitted -> Process (ambiguous names only)
        (Step::Country, Event::CountrySubmitted { text }) if session.is_ambiguous => {
            let country = non_blank(&text).ok_or(TransitionError::EmptyInput)?;
            Ok(enter_process(Session {
                country: Some(country),
                ..session.clone()
            }))
        }

        // Country + CountryResolved -> Process (unambiguous names only)
        (Step::Country, Event::CountryResolved { country }) if !session.is_ambiguous => {
            Ok(enter_process(Session {
                country: non_blank(&country),
                ..session.clone()
            }))
        }

        (Step::Process, Event::ProcessCompleted { report }) => {
            let next = Session {
                step: Step::Done,
                language: Some(report.language),
                weather_data: Some(report.weather_data),
                weather_interpretation: Some(report.forecast.clone()),
                suggestions: Some(report.suggestions.clone()),
                ..session.clone()
            };
            Ok(TransitionResult::new(next).with_effect(Effect::notify(Notice::Report {
                forecast: report.forecast,
                suggestions: report.suggestions,
            })))
        }

        // Failures reach one boundary and keep no partial results
        (Step::Country | Step::Process, Event::Failed { message }) => {
            let next = Session {
                step: Step::Error,
                ..session.clone()
            };
            Ok(TransitionResult::new(next).with_effect(Effect::notify(Notice::Error { message })))
        }

        // Done/Error + Reset -> fresh session
        (step, Event::Reset) if step.is_finished() => Ok(TransitionResult::new(Session::default())
            .with_effect(Effect::notify(Notice::AskLocation))),

        (step, event) => Err(TransitionError::InvalidTransition {
            step: step.as_str(),
            event: event.name(),
        }),
    }
}

/// Enter `Process`, or fall back to `Location` when the place is incomplete
fn enter_process(session: Session) -> TransitionResult {
    let place = session
        .place()
        .map(|(location, country)| (location.to_string(), country.to_string()));
    match place {
        Some((location, country)) => TransitionResult::new(Session {
            step: Step::Process,
            ..session
        })
        .with_effect(Effect::RunProcess { location, country }),
        None => back_to_location(session),
    }
}

fn back_to_location(session: Session) -> TransitionResult {
    TransitionResult::new(Session {
        step: Step::Location,
        ..session
    })
    .with_effect(Effect::notify(Notice::AskLocation))
}
