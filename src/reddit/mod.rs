//! Authenticated Reddit session client
//!
//! `RedditClient` is the concrete gateway behind the miner: it holds an
//! authenticated HTTP client, resolves the account identity on connect, and
//! serves GET requests against the OAuth API.

mod client;

pub use client::{Identity, RedditClient};
