//! In-memory campaign, used by the integration tests and the sandbox
//! binary.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::chat::{ChatSink, Whisper};
use crate::directory::{Character, Directory, Player, Token};
use crate::store::TurnStore;

/// A self-contained campaign: object tables, the persisted turn order,
/// the tracker flag, and a transcript of every whisper sent.
#[derive(Debug)]
pub struct MemoryCampaign {
    turn_order: String,
    tracker_open: bool,
    tokens: HashMap<String, Token>,
    characters: HashMap<String, Character>,
    players: HashMap<String, Player>,
    whispers: Vec<Whisper>,
}

impl Default for MemoryCampaign {
    fn default() -> Self {
        Self {
            turn_order: String::new(),
            // A live session has the tracker open until something closes it.
            tracker_open: true,
            tokens: HashMap::new(),
            characters: HashMap::new(),
            players: HashMap::new(),
            whispers: Vec::new(),
        }
    }
}

impl MemoryCampaign {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the persisted turn order, builder style.
    pub fn with_turn_order(mut self, raw: &str) -> Self {
        self.turn_order = raw.to_string();
        self
    }

    /// Register a player. Returns the minted id.
    pub fn add_player(&mut self, display_name: &str, is_gm: bool) -> String {
        let id = mint_id();
        self.players.insert(
            id.clone(),
            Player {
                id: id.clone(),
                display_name: display_name.to_string(),
                is_gm,
            },
        );
        id
    }

    /// Register a character sheet. Returns the minted id.
    pub fn add_character(&mut self, name: &str) -> String {
        let id = mint_id();
        self.characters.insert(
            id.clone(),
            Character {
                id: id.clone(),
                name: name.to_string(),
            },
        );
        id
    }

    /// Place a token on the board, optionally linked to a character it
    /// represents. Returns the minted id.
    pub fn add_token(&mut self, name: &str, represents: Option<&str>) -> String {
        let id = mint_id();
        self.tokens.insert(
            id.clone(),
            Token {
                id: id.clone(),
                name: name.to_string(),
                represents: represents.map(str::to_string),
            },
        );
        id
    }

    /// First registered player holding the GM seat.
    pub fn gm(&self) -> Option<Player> {
        self.players.values().find(|p| p.is_gm).cloned()
    }

    /// Look a player up by display name, ignoring ASCII case.
    pub fn player_by_name(&self, display_name: &str) -> Option<Player> {
        self.players
            .values()
            .find(|p| p.display_name.eq_ignore_ascii_case(display_name))
            .cloned()
    }

    /// Tracker display state, as last signaled through [`TurnStore`].
    pub fn tracker_open(&self) -> bool {
        self.tracker_open
    }

    /// Every whisper sent so far, oldest first.
    pub fn whispers(&self) -> &[Whisper] {
        &self.whispers
    }

    /// Take the transcript, leaving it empty. The sandbox prints whispers
    /// as they happen; tests usually read [`whispers`](Self::whispers)
    /// instead.
    pub fn drain_whispers(&mut self) -> Vec<Whisper> {
        std::mem::take(&mut self.whispers)
    }
}

impl TurnStore for MemoryCampaign {
    fn turn_order(&self) -> String {
        self.turn_order.clone()
    }

    fn set_turn_order(&mut self, raw: &str) {
        self.turn_order = raw.to_string();
    }

    fn set_tracker_open(&mut self, open: bool) {
        self.tracker_open = open;
    }
}

impl Directory for MemoryCampaign {
    fn token(&self, id: &str) -> Option<Token> {
        self.tokens.get(id).cloned()
    }

    fn character(&self, id: &str) -> Option<Character> {
        self.characters.get(id).cloned()
    }

    fn player(&self, id: &str) -> Option<Player> {
        self.players.get(id).cloned()
    }
}

impl ChatSink for MemoryCampaign {
    fn whisper(&mut self, to: &str, text: &str) {
        self.whispers.push(Whisper {
            to: to.to_string(),
            text: text.to_string(),
            sent_at: Utc::now(),
        });
    }
}

fn mint_id() -> String {
    Uuid::now_v7().to_string()
}
