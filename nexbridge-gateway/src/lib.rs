//! HTTP bridge between the browser front-end and the Nexla platform API.
//!
//! Exposes the health, connect, and nexset listing endpoints consumed by
//! the local development front-end.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
pub mod settings;
