//! Line-based terminal driver
//!
//! Reads one line per user turn, maps it to an [`Event`] for the current step
//! and prints every notice the runtime produced.

use crate::runtime::SessionRuntime;
use crate::state_machine::{Event, Notice, Step};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

const START_OVER: &str = "start over";
const TRY_AGAIN: &str = "try again";

const WELCOME: &str = "\
Weather-to-Activity Planner

Hey there! I'm your Weather-to-Activity Planner.
Think of me as your personal guide to the day.
I'll let you know what the weather's like, suggest what to wear,
and even give you fun ideas for what to do and where to go!
Just tell me where you are right now, and we'll get started.
Oh, and you can ask me in any language you'd like.";

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Handle(Event),
    /// Input that means nothing in the current step
    Hint(&'static str),
}

pub fn parse_input(line: &str, step: Step) -> Action {
    let command = line.trim().to_lowercase();
    if command == "quit" || command == "exit" {
        return Action::Quit;
    }

    match step {
        Step::Location => Action::Handle(Event::LocationSubmitted {
            text: line.to_string(),
        }),
        Step::Country => Action::Handle(Event::CountrySubmitted {
            text: line.to_string(),
        }),
        Step::Done | Step::Error if command == START_OVER || command == TRY_AGAIN => {
            Action::Handle(Event::Reset)
        }
        Step::Done => Action::Hint("Type \"start over\" to plan for another place, or \"quit\"."),
        Step::Error => Action::Hint("Type \"try again\" to start over, or \"quit\"."),
        Step::Process => Action::Hint("Still working on it..."),
    }
}

/// Terminal text for a notice
pub fn render(notice: &Notice) -> String {
    match notice {
        Notice::AskLocation => "Where are you? Enter a city or place name.".to_string(),
        Notice::AskCountry { location } => {
            format!("There is more than one {location}. Which country is it in?")
        }
        Notice::Status(text) | Notice::Confirmation(text) => text.clone(),
        Notice::WeatherRetrieved => "Weather data retrieved.".to_string(),
        Notice::Report {
            forecast,
            suggestions,
        } => format!(
            "Current Weather\n{forecast}\n\nRecommendations\n{suggestions}\n\n\
             Have a great day!\nType \"{START_OVER}\" to plan for another place."
        ),
        Notice::Error { message } => format!(
            "Sorry, something went wrong: {message}\nType \"{TRY_AGAIN}\" to start again."
        ),
    }
}

async fn print_line(out: &mut io::Stdout, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

/// Run the conversation until `quit` or end of input
pub async fn run(
    mut runtime: SessionRuntime,
    mut notices: mpsc::UnboundedReceiver<Notice>,
) -> io::Result<()> {
    let mut out = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    print_line(&mut out, WELCOME).await?;
    print_line(&mut out, &render(&Notice::AskLocation)).await?;

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line, runtime.session().step) {
            Action::Quit => break,
            Action::Hint(hint) => print_line(&mut out, hint).await?,
            Action::Handle(event) => {
                if let Err(e) = runtime.handle(event).await {
                    tracing::debug!(error = %e, "Input rejected");
                    print_line(&mut out, &e.to_string()).await?;
                }
            }
        }

        while let Ok(notice) = notices.try_recv() {
            print_line(&mut out, &render(&notice)).await?;
        }
    }

    tracing::info!("Session closed");
    Ok(())
}
