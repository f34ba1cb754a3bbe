//! Events that drive the session

use super::state::WeatherReport;

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // User events
    LocationSubmitted { text: String },
    CountrySubmitted { text: String },
    /// "Start over" or "try again"
    Reset,

    // Oracle results
    AmbiguityChecked { ambiguous: bool },
    CountryResolved { country: String },

    // Process results
    ProcessCompleted { report: WeatherReport },
    Failed { message: String },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::LocationSubmitted { .. } => "location_submitted",
            Event::CountrySubmitted { .. } => "country_submitted",
            Event::Reset => "reset",
            Event::AmbiguityChecked { .. } => "ambiguity_checked",
            Event::CountryResolved { .. } => "country_resolved",
            Event::ProcessCompleted { .. } => "process_completed",
            Event::Failed { .. } => "failed",
        }
    }
}
