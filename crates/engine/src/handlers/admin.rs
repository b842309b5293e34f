//! GM-only wholesale operations: `clear`, `load`, `append`.

use roundtable_campaign::{Campaign, TurnStore};
use roundtable_core::{CoreError, TurnQueue};

use super::{require_gm, whisper_gm, whisper_player, Caller};

/// Empty the turn order, whispering a restore hint with the outgoing
/// contents unless suppressed.
pub(super) fn clear<C: Campaign>(
    campaign: &mut C,
    caller: &Caller,
    close_tracker: bool,
    no_restore_hint: bool,
) {
    if !require_gm(campaign, caller, "clear turn data") {
        return;
    }

    let outgoing = campaign.turn_order();
    campaign.set_turn_order("[]");
    if close_tracker {
        campaign.set_tracker_open(false);
    }

    tracing::info!(payload = %outgoing, "Turn order cleared");

    if !no_restore_hint {
        whisper_gm(
            campaign,
            &format!("Turn order cleared. To restore it, run: !to-load {outgoing}"),
        );
    }
}

/// Replace the turn order wholesale from an operator-supplied payload.
/// The payload is validated before anything is written.
pub(super) fn load<C: Campaign>(campaign: &mut C, caller: &Caller, payload: &str) {
    if !require_gm(campaign, caller, "load turn data") {
        return;
    }

    match TurnQueue::parse_strict(payload) {
        Ok(queue) => {
            campaign.set_turn_order(&queue.to_json());
            tracing::info!(entries = queue.len(), "Turn order loaded from chat payload");
        }
        Err(err) => {
            whisper_player(
                campaign,
                &caller.id,
                &format!("ERROR loading data: '{}'", parse_detail(err)),
            );
        }
    }
}

/// Merge a JSON array of entries onto the end of the order. A payload
/// that fails to parse leaves the stored order byte-for-byte untouched.
pub(super) fn append<C: Campaign>(campaign: &mut C, caller: &Caller, payload: &str) {
    if !require_gm(campaign, caller, "append turn data") {
        return;
    }

    let batch = match TurnQueue::parse_strict(payload) {
        Ok(batch) => batch,
        Err(err) => {
            whisper_player(
                campaign,
                &caller.id,
                &format!("ERROR appending data: '{}'", parse_detail(err)),
            );
            return;
        }
    };

    let mut queue = TurnQueue::parse(&campaign.turn_order());
    queue.extend(batch.into_entries());
    campaign.set_turn_order(&queue.to_json());

    tracing::info!(entries = queue.len(), "Turn entries appended");
}

/// The raw parser message, without the error type's own framing.
fn parse_detail(err: CoreError) -> String {
    match err {
        CoreError::Parse(detail) => detail,
        other => other.to_string(),
    }
}
