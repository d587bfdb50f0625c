//! Minimal Nexla platform API client for the bridge backend.
//!
//! Covers exactly the two operations the bridge exposes: session-token
//! retrieval and nexset listing. A thin stand-in for the SDK surface the
//! bridge needs, not a general SDK.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod error;

pub use client::{NexlaClient, DEFAULT_API_URL};
pub use error::ClientError;
