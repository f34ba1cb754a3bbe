//! Property-based tests for the session state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::weather::WeatherPayload;
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Location),
        Just(Step::Country),
        Just(Step::Process),
        Just(Step::Done),
        Just(Step::Error),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[A-Za-z ]{1,16}",
    ]
}

fn arb_opt_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z]{1,12}")
}

fn arb_session() -> impl Strategy<Value = Session> {
    (
        arb_step(),
        arb_opt_text(),
        arb_opt_text(),
        any::<bool>(),
        arb_opt_text(),
        arb_opt_text(),
    )
        .prop_map(
            |(step, location, country, is_ambiguous, language, suggestions)| Session {
                step,
                location,
                country,
                is_ambiguous,
                language,
                weather_data: None,
                weather_interpretation: None,
                suggestions,
            },
        )
}

fn arb_report() -> impl Strategy<Value = WeatherReport> {
    ("[a-z]{3,10}", "[A-Za-z .]{1,30}", "[A-Za-z .]{1,30}").prop_map(
        |(language, forecast, suggestions)| WeatherReport {
            language,
            confirmation: "Got it!".to_string(),
            weather_data: WeatherPayload::new(200, json!({"cod": 200})),
            forecast,
            suggestions,
        },
    )
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_text().prop_map(|text| Event::LocationSubmitted { text }),
        arb_text().prop_map(|text| Event::CountrySubmitted { text }),
        Just(Event::Reset),
        any::<bool>().prop_map(|ambiguous| Event::AmbiguityChecked { ambiguous }),
        arb_text().prop_map(|country| Event::CountryResolved { country }),
        arb_report().prop_map(|report| Event::ProcessCompleted { report }),
        "[a-z ]{0,20}".prop_map(|message| Event::Failed { message }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Same session and event always give the same result
    #[test]
    fn transition_is_deterministic(session in arb_session(), event in arb_event()) {
        let a = transition(&session, event.clone());
        let b = transition(&session, event);
        prop_assert_eq!(a, b);
    }

    /// A session in Process always has a complete place
    #[test]
    fn process_requires_location_and_country(session in arb_session(), event in arb_event()) {
        if let Ok(result) = transition(&session, event) {
            if result.new_session.step == Step::Process {
                prop_assert!(result.new_session.place().is_some());
            }
        }
    }

    /// RunProcess is only ever emitted with the session's own place
    #[test]
    fn run_process_matches_session(session in arb_session(), event in arb_event()) {
        if let Ok(result) = transition(&session, event) {
            for effect in &result.effects {
                if let Effect::RunProcess { location, country } = effect {
                    prop_assert_eq!(result.new_session.step, Step::Process);
                    prop_assert_eq!(
                        result.new_session.place(),
                        Some((location.as_str(), country.as_str()))
                    );
                }
            }
        }
    }

    /// Falling back to Location never performs oracle or HTTP work
    #[test]
    fn guard_fallback_has_no_external_effects(session in arb_session(), event in arb_event()) {
        let was_location = session.step == Step::Location;
        if let Ok(result) = transition(&session, event) {
            if !was_location && result.new_session.step == Step::Location {
                prop_assert!(result.effects.iter().all(|e| !e.is_external()));
            }
        }
    }

    /// Reset from a finished state clears every attribute
    #[test]
    fn reset_is_complete(mut session in arb_session(), finished in prop_oneof![Just(Step::Done), Just(Step::Error)]) {
        session.step = finished;
        session.weather_data = Some(WeatherPayload::new(200, json!({})));
        session.weather_interpretation = Some("x".to_string());
        let result = transition(&session, Event::Reset).unwrap();
        prop_assert_eq!(result.new_session, Session::default());
        prop_assert_eq!(result.effects, vec![Effect::notify(Notice::AskLocation)]);
    }

    /// Reset is rejected while the workflow is still running
    #[test]
    fn reset_rejected_mid_flow(mut session in arb_session(), step in prop_oneof![Just(Step::Location), Just(Step::Country), Just(Step::Process)]) {
        session.step = step;
        prop_assert!(transition(&session, Event::Reset).is_err());
    }

    /// The ambiguity answer picks the next prompt, never the next step
    #[test]
    fn ambiguity_decides_prompt_not_step(location in "[A-Za-z]{1,12}", ambiguous in any::<bool>()) {
        let session = Session { location: Some(location.clone()), ..Session::default() };
        let result = transition(&session, Event::AmbiguityChecked { ambiguous }).unwrap();
        prop_assert_eq!(result.new_session.step, Step::Country);
        let expected = if ambiguous {
            Effect::notify(Notice::AskCountry { location })
        } else {
            Effect::ResolveCountry { location }
        };
        prop_assert_eq!(result.effects, vec![expected]);
    }

    /// A new location always starts from a clean session
    #[test]
    fn new_location_discards_previous_place(mut session in arb_session(), text in "[A-Za-z]{1,12}") {
        session.step = Step::Location;
        let result = transition(&session, Event::LocationSubmitted { text: text.clone() }).unwrap();
        prop_assert_eq!(result.new_session.location, Some(text));
        prop_assert!(result.new_session.country.is_none());
        prop_assert!(result.new_session.language.is_none());
        prop_assert!(!result.new_session.is_ambiguous);
    }
}
