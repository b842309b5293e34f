//! Host-persisted campaign state.

/// Access to the campaign's serialized turn order.
///
/// The host owns the canonical copy and hands it around as an opaque
/// string. The engine always reads the whole string, mutates a parsed
/// copy, and writes the whole string back in one call; there is no
/// entry-level mutation on the host side.
pub trait TurnStore {
    /// Current serialized turn order. May be empty or malformed; parsing
    /// tolerates both.
    fn turn_order(&self) -> String;

    /// Replace the serialized turn order wholesale.
    fn set_turn_order(&mut self, raw: &str);

    /// Open or close the host's initiative tracker display.
    fn set_tracker_open(&mut self, open: bool);
}
