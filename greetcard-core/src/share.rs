//! Helpers for handing a finished card to the user: file naming and share links.

use crate::{
    compose::request::DisplayName,
    foundation::error::{CardError, CardResult},
};

/// Native share sheet title.
pub const SHARE_TITLE: &str = "Happy New Year 2026!";

/// Native share sheet body.
pub const SHARE_TEXT: &str = "✨ Happy New Year 2026! I created this just for you 🎆 Check it out 💖";

/// Public page linked from the WhatsApp fallback message.
pub const SITE_URL: &str = "https://happy-newyear-20-26.netlify.app/";

const WHATSAPP_SEND: &str = "https://api.whatsapp.com/send";

/// Suggested download name, `NewYear2026-{name}.png`.
///
/// Characters that are unsafe in file names become `_`.
pub fn download_filename(name: &DisplayName) -> String {
    let safe: String = name
        .as_str()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("NewYear2026-{safe}.png")
}

/// Title and text offered to a native share target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
    /// Share title.
    pub title: String,
    /// Share body.
    pub text: String,
}

impl Default for ShareMessage {
    fn default() -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
        }
    }
}

/// Pre-filled message for the WhatsApp fallback share.
pub fn whatsapp_message() -> String {
    format!(
        "🎉 WISH YOU HAPPY NEW YEAR 2026 🎆 ✨\n\nCheck out this amazing New Year greeting: {SITE_URL} 🌟💖🎊"
    )
}

/// `https://api.whatsapp.com/send?text=...` carrying [`whatsapp_message`].
pub fn whatsapp_share_url() -> CardResult<url::Url> {
    url::Url::parse_with_params(WHATSAPP_SEND, [("text", whatsapp_message())])
        .map_err(|e| CardError::validation(format!("share url: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/share.rs"]
mod tests;
