//! `begin`: sort the order and start the round counter.

use roundtable_campaign::{Campaign, TurnStore};
use roundtable_core::{TurnEntry, TurnQueue};

use super::{require_gm, Caller};
use crate::config::EngineConfig;

pub(super) fn handle<C: Campaign>(
    campaign: &mut C,
    config: &EngineConfig,
    caller: &Caller,
    counter_name: Option<String>,
    counter_value: Option<f64>,
) {
    if !require_gm(campaign, caller, "start the round counter") {
        return;
    }

    // The label doubles as the deduplication key; an empty name is
    // treated as unset.
    let name = counter_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| config.counter_name.clone());
    let value = counter_value.unwrap_or(config.counter_value);

    let mut queue = TurnQueue::parse(&campaign.turn_order());
    queue.begin_round(TurnEntry::synthetic(name.clone(), value, "+1"));
    campaign.set_turn_order(&queue.to_json());

    tracing::info!(counter = %name, value, entries = queue.len(), "Round counter started");
}
