//! Prompt text for every oracle round trip
//!
//! Each builder is pure so the wording can be tested without a model.

/// Confirmation shown when the detected language is English
pub fn confirmation_template(location: &str, country: &str) -> String {
    format!("Got it! You're in {location}, {country}.")
}

pub fn ambiguity(location: &str) -> String {
    format!(
        r"Is there more than one place in the world called {location}?
For example, London exists both in the United Kingdom and in Ontario, Canada.
Answer 'yes' if the place name is ambiguous, otherwise answer 'no'.
Answer with that single word only."
    )
}

pub fn country(location: &str) -> String {
    format!(
        r"Which country is {location} in?
Reply with only the English name of the country and nothing else.
Keep the answer short."
    )
}

pub fn language(location: &str, country: &str) -> String {
    format!(
        r"Consider the place {location} in {country} and work out which language a person there is writing in.
Reply with only the English name of that language and nothing else.
Keep the answer short."
    )
}

pub fn confirmation(location: &str, country: &str, language: &str) -> String {
    let template = confirmation_template(location, country);
    format!(
        r"The user is in '{location}', '{country}' and writes in {language}.

If {language} is English, reply with exactly: '{template}'

Otherwise you MUST translate the ENTIRE message '{template}' into {language}.
Follow the word order and grammar of {language}, not of English.
For example, in Japanese the message for Tokyo, Japan reads 'わかりました！あなたは日本の東京にいるのですね。'.
DO NOT keep any English words in your reply.
DO NOT write any part of the reply in English.
Use the proper script, punctuation and grammar of {language}.

Reply with ONLY the translated message and no explanation."
    )
}

pub fn interpret_weather(weather_data: &str, language: &str) -> String {
    format!(
        r"Describe the weather right now using this data from the weather service:
{weather_data}

Cover:
- the current temperature with the high and low for the day
- the feels_like temperature
- atmospheric pressure
- humidity
- visibility
- wind speed and direction

Work out how likely rain is from the weather id, the description, the humidity and the clouds.

Give only the forecast, with no preamble.
Do not use bullet points; write a couple of naturally flowing sentences in a friendly tone.
Write the whole forecast in {language}."
    )
}

pub fn suggest_activities(forecast: &str, language: &str) -> String {
    format!(
        r"Here is today's forecast:
{forecast}

Based on it, suggest:
- how to dress
- whether to stay indoors or go out
- where to visit
- what to do
- whether to take an umbrella if rain is expected

Do not use bullet points; write a couple of naturally flowing sentences in a friendly tone.
Do not repeat anything the forecast already says; only add to it.
Write the whole reply in {language}."
    )
}
