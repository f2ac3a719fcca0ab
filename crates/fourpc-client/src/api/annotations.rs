//! Board annotations: arrows, circles, clearing.

use crate::client::FourPlayerChess;
use crate::error::Result;

impl FourPlayerChess {
    /// Draw an arrow from `from` to `to`, optionally with an opacity such as `"80"`.
    pub fn arrow(&self, from: &str, to: &str, opacity: Option<&str>) -> bool {
        Self::accepted("arrow", self.try_arrow(from, to, opacity))
    }

    /// Like [`arrow`](Self::arrow), returning the response body or the failure.
    pub fn try_arrow(&self, from: &str, to: &str, opacity: Option<&str>) -> Result<String> {
        let url = self.endpoints().arrow_url(from, to, opacity);
        self.send("arrow", &url)
    }

    /// Circle a single square.
    pub fn circle(&self, square: &str) -> bool {
        Self::accepted("circle", self.try_circle(square))
    }

    /// Like [`circle`](Self::circle), returning the response body or the failure.
    pub fn try_circle(&self, square: &str) -> Result<String> {
        let url = self.endpoints().circle_url(square);
        self.send("circle", &url)
    }

    /// Remove every arrow and circle.
    pub fn clear(&self) -> bool {
        Self::accepted("clear", self.try_clear())
    }

    /// Like [`clear`](Self::clear), returning the response body or the failure.
    pub fn try_clear(&self) -> Result<String> {
        self.send("clear", self.endpoints().clear_url())
    }
}
