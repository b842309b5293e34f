//! Campaign host interfaces for the roundtable engine.
//!
//! The engine never talks to a live tabletop host directly; it is generic
//! over three small traits:
//!
//! - [`TurnStore`]: the persisted turn order and the tracker flag.
//! - [`Directory`]: read-only token, character, and player lookups.
//! - [`ChatSink`]: whispered replies.
//!
//! [`Campaign`] bundles the three for convenience, and [`MemoryCampaign`]
//! implements the lot in memory for tests and the sandbox binary. A real
//! host adapter implements the same traits against its own API surface.

pub mod chat;
pub mod directory;
pub mod memory;
pub mod store;

pub use chat::{ChatSink, Whisper, GM_TARGET};
pub use directory::{Character, Directory, Player, Token};
pub use memory::MemoryCampaign;
pub use store::TurnStore;

/// The full host surface the engine is generic over.
pub trait Campaign: TurnStore + Directory + ChatSink {}

impl<T: TurnStore + Directory + ChatSink> Campaign for T {}
