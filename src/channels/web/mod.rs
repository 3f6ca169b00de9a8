//! HTTP web channel.

pub mod server;
pub mod types;

pub use server::{WebState, router, serve};
