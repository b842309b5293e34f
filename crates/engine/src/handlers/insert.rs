//! `up` and `down`: synthetic countdown entries with optional anchored
//! placement.

use roundtable_campaign::{Campaign, Directory, TurnStore};
use roundtable_core::command::{Anchor, Position};
use roundtable_core::{TurnEntry, TurnQueue};

use super::{whisper_gm, whisper_player, Caller};
use crate::resolve::entry_display_name;

/// Any seat may insert. Entries created by players are written
/// unrestricted, and the GM is told what was added.
pub(super) fn handle<C: Campaign>(
    campaign: &mut C,
    caller: &Caller,
    start: f64,
    anchor: Option<Anchor>,
    label: String,
    formula: &str,
) {
    let mut entry = TurnEntry::synthetic(label, start, formula);
    if !caller.is_gm {
        entry.restricted = false;
    }
    let label = entry.label.clone();

    let mut queue = TurnQueue::parse(&campaign.turn_order());

    let mut target = None;
    if let Some(anchor) = &anchor {
        match queue.find_by_prefix(&anchor.prefix, |e| entry_display_name(campaign, e)) {
            Some(found) => {
                target = Some(match anchor.position {
                    Position::Before => found,
                    Position::After => found + 1,
                });
            }
            None => {
                whisper_player(
                    campaign,
                    &caller.id,
                    &format!(
                        "could not find an entry starting with \"{}\". Putting \"{label}\" at the end.",
                        anchor.prefix
                    ),
                );
            }
        }
    }

    let landed = queue.insert_at(target, entry);
    campaign.set_turn_order(&queue.to_json());

    tracing::debug!(label = %label, index = landed, "Turn entry inserted");

    if !caller.is_gm {
        let player = campaign
            .player(&caller.id)
            .map(|p| p.display_name)
            .unwrap_or_else(|| caller.id.clone());
        let placement = match target {
            Some(_) => format!(" in position {}", landed + 1),
            None => String::new(),
        };
        whisper_gm(
            campaign,
            &format!("Player ({player}) added turn entry \"{label}\"{placement}"),
        );
    }
}
