//! `remove`: delete one entry located by display-name prefix.

use roundtable_campaign::{Campaign, TurnStore};
use roundtable_core::TurnQueue;

use super::{whisper_player, Caller};
use crate::resolve::entry_display_name;

pub(super) fn handle<C: Campaign>(campaign: &mut C, caller: &Caller, prefix: &str) {
    let mut queue = TurnQueue::parse(&campaign.turn_order());

    let Some(index) = queue.find_by_prefix(prefix, |e| entry_display_name(campaign, e)) else {
        whisper_player(
            campaign,
            &caller.id,
            &format!("Cannot find an entry starting with \"{prefix}\" to remove."),
        );
        return;
    };

    if !caller.is_gm && queue.entries()[index].restricted {
        let name = entry_display_name(campaign, &queue.entries()[index])
            .unwrap_or_else(|| "that entry".to_string());
        whisper_player(
            campaign,
            &caller.id,
            &format!("You do not have permission to remove {name}. Please ask the GM to do it."),
        );
        return;
    }

    queue.remove_at(index);
    campaign.set_turn_order(&queue.to_json());

    tracing::debug!(prefix = %prefix, index, "Turn entry removed");
}
