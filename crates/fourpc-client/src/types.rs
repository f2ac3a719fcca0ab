//! Access tiers and the rendered endpoint table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Access tier
// ─────────────────────────────────────────────────────────────────────────────

/// Which API host the bot talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    /// The development beta host.
    #[default]
    Beta,
    /// The production host.
    Main,
}

impl AccessTier {
    /// Base URL (scheme and host, no trailing slash) for this tier.
    pub fn host(self) -> &'static str {
        match self {
            AccessTier::Beta => "https://4player-beta.chess.com",
            AccessTier::Main => "https://4player.chess.com",
        }
    }

    /// Lowercase tier name.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessTier::Beta => "beta",
            AccessTier::Main => "main",
        }
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beta" => Ok(AccessTier::Beta),
            "main" => Ok(AccessTier::Main),
            other => Err(Error::Config(format!(
                "unknown access tier '{other}' (expected 'beta' or 'main')"
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Endpoints
// ─────────────────────────────────────────────────────────────────────────────

const ARROW_TEMPLATE: &str = "{url}/bot?token={token}&arrows=";
const CHAT_TEMPLATE: &str = "{url}/bot?token={token}&chat=";
const CLEAR_TEMPLATE: &str = "{url}/bot?token={token}&arrows=clear";
const PLAY_TEMPLATE: &str = "{url}/bot?token={token}&play=";
const RESIGN_TEMPLATE: &str = "{url}/bot?token={token}&play=R";
const STREAM_TEMPLATE: &str = "{url}/bot?token={token}&stream=1";

/// Promotion code sent by [`FourPlayerChess::play`](crate::FourPlayerChess::play).
pub const DEFAULT_PROMOTION: &str = "Q";

/// Endpoint table with the host and token already substituted.
///
/// The `arrow`, `chat` and `play` entries are prefixes; the action
/// parameters are appended verbatim (chat messages are form-encoded first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    arrow: String,
    chat: String,
    clear: String,
    play: String,
    resign: String,
    stream: String,
}

impl Endpoints {
    /// Render every template for `base` (e.g. `https://4player.chess.com`) and `token`.
    pub fn new(base: &str, token: &str) -> Self {
        let render = |template: &str| template.replace("{token}", token).replace("{url}", base);
        Self {
            arrow: render(ARROW_TEMPLATE),
            chat: render(CHAT_TEMPLATE),
            clear: render(CLEAR_TEMPLATE),
            play: render(PLAY_TEMPLATE),
            resign: render(RESIGN_TEMPLATE),
            stream: render(STREAM_TEMPLATE),
        }
    }

    /// URL drawing an arrow from `from` to `to`, with an optional opacity suffix.
    pub fn arrow_url(&self, from: &str, to: &str, opacity: Option<&str>) -> String {
        match opacity.filter(|o| !o.is_empty()) {
            Some(opacity) => format!("{}{from}{to}-{opacity}", self.arrow),
            None => format!("{}{from}{to}", self.arrow),
        }
    }

    /// URL marking a single square, drawn as an arrow onto itself.
    pub fn circle_url(&self, square: &str) -> String {
        self.arrow_url(square, square, None)
    }

    /// URL posting `message` to the game chat.
    pub fn chat_url(&self, message: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
        format!("{}{encoded}", self.chat)
    }

    /// URL removing every arrow and circle.
    pub fn clear_url(&self) -> &str {
        &self.clear
    }

    /// URL playing `from`-`to`, promoting to `promotion` if the move is a promotion.
    pub fn play_url(&self, from: &str, to: &str, promotion: &str) -> String {
        format!("{}{from}{to}{promotion}", self.play)
    }

    /// URL resigning the current game.
    pub fn resign_url(&self) -> &str {
        &self.resign
    }

    /// URL of the live game stream.
    pub fn stream_url(&self) -> &str {
        &self.stream
    }
}
