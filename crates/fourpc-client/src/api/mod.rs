//! Bot action endpoints.
//!
//! Each module adds its actions as inherent methods on
//! [`FourPlayerChess`](crate::FourPlayerChess).

mod annotations;
mod chat;
mod feed;
mod moves;
