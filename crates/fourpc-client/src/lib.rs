//! HTTP client for the four-player chess bot API.
//!
//! The bot API is a handful of GET endpoints keyed by a bot token. This
//! crate renders those endpoints once for a chosen host and exposes one
//! blocking method per bot action, plus a line stream over the live feed.
//!
//! # Example
//!
//! ```no_run
//! use fourpc_client::{AccessTier, FourPlayerChess, Result};
//!
//! # fn example() -> Result<()> {
//! let client = FourPlayerChess::builder()
//!     .token("my-bot-token")
//!     .tier(AccessTier::Beta)
//!     .build()?;
//!
//! // Annotate the board, then move
//! client.arrow("e2", "e4", Some("80"));
//! client.circle("e4");
//! if !client.play("e2", "e4") {
//!     client.resign();
//! }
//!
//! // Follow the game
//! for line in client.stream()? {
//!     println!("{}", line?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Actions
//!
//! - **Annotations**: `arrow`, `circle`, `clear`
//! - **Chat**: `chat`
//! - **Moves**: `play`, `play_with_promotion`, `resign`
//! - **Stream**: `stream`
//!
//! Action methods return `bool`; each has a `try_` twin returning the
//! response body or an [`Error`].

mod api;
pub mod client;
pub mod error;
pub mod stream;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{ClientBuilder, FourPlayerChess, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use stream::LineStream;
pub use transport::{HttpTransport, Transport};
pub use types::{AccessTier, Endpoints, DEFAULT_PROMOTION};
