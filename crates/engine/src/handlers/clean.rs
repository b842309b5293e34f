//! `clean`: drop entries counted down to zero or below.

use roundtable_campaign::{Campaign, TurnStore};
use roundtable_core::TurnQueue;

use super::Caller;

/// Open to every seat, not just the GM.
pub(super) fn handle<C: Campaign>(campaign: &mut C, caller: &Caller) {
    let mut queue = TurnQueue::parse(&campaign.turn_order());
    let removed = queue.clean();
    campaign.set_turn_order(&queue.to_json());

    tracing::debug!(
        removed,
        remaining = queue.len(),
        player_id = %caller.id,
        "Turn order cleaned"
    );
}
