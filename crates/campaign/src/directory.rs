//! Read-only directory of host campaign objects.

/// A token placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    /// Board name. Hosts allow unnamed tokens; resolution then falls back
    /// to the represented character.
    pub name: String,
    /// Id of the character sheet this token stands for, when any.
    pub represents: Option<String>,
}

/// A character sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: String,
    pub name: String,
}

/// A connected player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub display_name: String,
    pub is_gm: bool,
}

/// Synchronous point lookups into the host's object tables.
///
/// Hosts expose some of these as callback-style fetches, but they are
/// logically keyed lookups and are modeled as such. Lookups never fail,
/// they just miss.
pub trait Directory {
    fn token(&self, id: &str) -> Option<Token>;

    fn character(&self, id: &str) -> Option<Character>;

    fn player(&self, id: &str) -> Option<Player>;

    /// Whether the player holds the GM seat. Unknown ids are not GMs.
    fn is_gm(&self, player_id: &str) -> bool {
        self.player(player_id).map(|p| p.is_gm).unwrap_or(false)
    }
}
