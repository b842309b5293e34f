//! Turn-order domain logic for the roundtable engine.
//!
//! Everything in this crate is pure and host-free:
//!
//! - [`TurnEntry`]: one slot in the order, in the host's wire shape.
//! - [`TurnQueue`]: the ordered list plus every mutation the commands
//!   need (insert, remove, sort, clean).
//! - [`command`]: the chat grammar, parsed into a closed [`Command`] set.
//! - [`CoreError`]: what goes wrong, phrased for whispering back.
//!
//! Host access (persisted state, object lookups, chat output) lives behind
//! the traits in `roundtable-campaign`; the engine crate wires the two
//! together.

pub mod command;
pub mod entry;
pub mod error;
pub mod queue;

pub use command::{Anchor, Command, Position, COMMAND_PREFIX};
pub use entry::{TurnEntry, SYNTHETIC_ID};
pub use error::CoreError;
pub use queue::TurnQueue;
