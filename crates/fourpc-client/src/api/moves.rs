//! Moves and resignation.

use crate::client::FourPlayerChess;
use crate::error::Result;
use crate::types::DEFAULT_PROMOTION;

impl FourPlayerChess {
    /// Play `from`-`to`, promoting to a queen if the move is a promotion.
    pub fn play(&self, from: &str, to: &str) -> bool {
        self.play_with_promotion(from, to, DEFAULT_PROMOTION)
    }

    /// Play `from`-`to` with an explicit promotion code (`"Q"`, `"R"`, `"B"`, `"N"`, ...).
    pub fn play_with_promotion(&self, from: &str, to: &str, promotion: &str) -> bool {
        Self::accepted("play", self.try_play(from, to, promotion))
    }

    /// Like [`play_with_promotion`](Self::play_with_promotion), returning the
    /// response body or the failure.
    pub fn try_play(&self, from: &str, to: &str, promotion: &str) -> Result<String> {
        let url = self.endpoints().play_url(from, to, promotion);
        self.send("play", &url)
    }

    /// Resign the current game.
    pub fn resign(&self) -> bool {
        Self::accepted("resign", self.try_resign())
    }

    /// Like [`resign`](Self::resign), returning the response body or the failure.
    pub fn try_resign(&self) -> Result<String> {
        self.send("resign", self.endpoints().resign_url())
    }
}
