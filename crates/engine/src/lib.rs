//! Turn-order engine: platform chat events in, whispered replies and a
//! single turn-order write out.
//!
//! The library surface is exposed so the integration tests and the
//! sandbox binary share one wiring:
//!
//! - [`TurnEngine`]: the facade, generic over an injected campaign.
//! - [`EngineConfig`]: round-counter defaults from the environment.
//! - [`ChatMessage`] / [`MessageKind`]: the inbound event shape.
//! - [`resolve`]: display-name resolution used by prefix searches.

pub mod config;
pub mod engine;
pub mod event;
pub mod handlers;
pub mod resolve;

pub use config::EngineConfig;
pub use engine::TurnEngine;
pub use event::{ChatMessage, MessageKind};
