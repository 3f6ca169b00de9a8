//! Transport channels.
//!
//! One channel today: the HTTP web gateway the client application talks to.

pub mod web;
