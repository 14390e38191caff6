//! Fixed bot phrases, resolved by [`Phrase`] id and locale code.

/// Ids of every fixed message the bot can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    /// Reply to `/start`.
    Greeting,
    /// Reply to `/help`.
    Help,
    /// Reply to `/search` without a topic. Rendered as Markdown.
    SearchUsage,
    /// The model answered but no usable bullet survived formatting.
    NoResults,
    /// The model response could not be read.
    SummaryUnreadable,
}

impl Phrase {
    pub const ALL: [Phrase; 5] = [
        Phrase::Greeting,
        Phrase::Help,
        Phrase::SearchUsage,
        Phrase::NoResults,
        Phrase::SummaryUnreadable,
    ];

    fn en(self) -> &'static str {
        match self {
            Phrase::Greeting => "Hello! I'm your AI-backed Telegram bot for Victory Express.",
            Phrase::Help => {
                "Use /start to get started and /help for commands.\n\
                 /search <topic> sends a bullet-point summary of the topic."
            }
            Phrase::SearchUsage => {
                "Please specify the subject and chapter. Example: \n\
                 `/search Subject: Biology | Chapter: Cell Biology`"
            }
            Phrase::NoResults => "No summary points were found for this topic.",
            Phrase::SummaryUnreadable => {
                "An error occurred while processing the Gemini API response."
            }
        }
    }

    fn hi(self) -> Option<&'static str> {
        match self {
            Phrase::Greeting => {
                Some("नमस्ते! मैं आपका विक्ट्री एक्सप्रेस के लिए एआई-संचालित टेलीग्राम बॉट हूँ।")
            }
            Phrase::Help => Some(
                "/start का उपयोग करके शुरू करें और कमांड के लिए /help।\n\
                 /search <विषय> विषय का बुलेट-पॉइंट सारांश भेजता है।",
            ),
            Phrase::SearchUsage => Some(
                "कृपया विषय और अध्याय निर्दिष्ट करें। उदाहरण: \n\
                 `/search विषय: जीव विज्ञान | अध्याय: कोशिका जीव विज्ञान`",
            ),
            Phrase::NoResults => Some("इस विषय के लिए कोई सारांश बिंदु नहीं मिला।"),
            Phrase::SummaryUnreadable => None,
        }
    }

    /// Text for `locale`; falls back to English when the locale has no entry.
    pub fn text(self, locale: &str) -> &'static str {
        match locale {
            "hi" => self.hi().unwrap_or_else(|| self.en()),
            _ => self.en(),
        }
    }
}
