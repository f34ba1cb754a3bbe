//! Effects produced by state transitions

/// Messages for the user interface
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Prompt for a location
    AskLocation,
    /// The name is shared by several places; prompt for the country
    AskCountry { location: String },
    /// Progress text while a call is in flight
    Status(String),
    /// Localized "Got it! You're in ..." message
    Confirmation(String),
    WeatherRetrieved,
    /// Forecast and suggestions, followed by a "start over" offer
    Report {
        forecast: String,
        suggestions: String,
    },
    /// Generic failure message, followed by a "try again" offer
    Error { message: String },
}

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the oracle whether the location name is ambiguous
    CheckAmbiguity { location: String },

    /// Ask the oracle for the country of an unambiguous location
    ResolveCountry { location: String },

    /// Run the process sequence for a complete place
    RunProcess { location: String, country: String },

    /// Notify the user interface
    Notify(Notice),
}

impl Effect {
    pub fn notify(notice: Notice) -> Self {
        Effect::Notify(notice)
    }

    /// Whether executing this effect performs an oracle or HTTP call
    pub fn is_external(&self) -> bool {
        !matches!(self, Effect::Notify(_))
    }
}
