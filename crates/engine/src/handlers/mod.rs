//! Verb handlers for the chat command surface.
//!
//! [`handle`] filters and parses one inbound message; `dispatch` maps each
//! [`Command`] variant onto its handler. Handlers all follow the same
//! shape: load the queue from the store, mutate the copy, save once,
//! whisper outcomes. Nothing here returns an error; every failure is
//! reported in chat and the engine moves on to the next message.

mod admin;
mod begin;
mod clean;
mod help;
mod insert;
mod remove;

use roundtable_campaign::{Campaign, ChatSink, Directory, GM_TARGET};
use roundtable_core::command::{self, Command};
use roundtable_core::CoreError;

use crate::config::EngineConfig;
use crate::event::{ChatMessage, MessageKind};

/// The resolved identity behind one message.
#[derive(Debug, Clone)]
pub(crate) struct Caller {
    pub id: String,
    pub is_gm: bool,
}

/// React to one inbound chat message.
pub fn handle<C: Campaign>(campaign: &mut C, config: &EngineConfig, message: &ChatMessage) {
    if message.kind != MessageKind::Api {
        return;
    }
    let Some(parsed) = command::parse_message(&message.content) else {
        return;
    };

    let caller = Caller {
        id: message.player_id.clone(),
        is_gm: campaign.is_gm(&message.player_id),
    };

    match parsed {
        Ok(cmd) => dispatch(campaign, config, &caller, cmd),
        Err(err) => {
            if let CoreError::UnknownCommand(verb) = &err {
                tracing::warn!(verb = %verb, player_id = %caller.id, "Unknown turn-order command");
            }
            whisper_player(campaign, &caller.id, &err.to_string());
        }
    }
}

fn dispatch<C: Campaign>(campaign: &mut C, config: &EngineConfig, caller: &Caller, cmd: Command) {
    match cmd {
        Command::Begin {
            counter_name,
            counter_value,
        } => begin::handle(campaign, config, caller, counter_name, counter_value),
        Command::Clear {
            close_tracker,
            no_restore_hint,
        } => admin::clear(campaign, caller, close_tracker, no_restore_hint),
        Command::Load { payload } => admin::load(campaign, caller, &payload),
        Command::Append { payload } => admin::append(campaign, caller, &payload),
        Command::Clean => clean::handle(campaign, caller),
        Command::Up {
            start,
            anchor,
            label,
        } => insert::handle(campaign, caller, start, anchor, label, "+1"),
        Command::Down {
            start,
            anchor,
            label,
        } => insert::handle(campaign, caller, start, anchor, label, "-1"),
        Command::Remove { prefix } => remove::handle(campaign, caller, &prefix),
        Command::Help => help::handle(campaign, caller),
    }
}

/// Whisper to the player behind `player_id`, resolving their display name.
/// Unknown ids fall back to the raw id so the host can still route it.
pub(crate) fn whisper_player<C: Campaign>(campaign: &mut C, player_id: &str, text: &str) {
    let name = campaign
        .player(player_id)
        .map(|p| p.display_name)
        .unwrap_or_else(|| player_id.to_string());
    campaign.whisper(&name, text);
}

/// Whisper to whoever holds the GM seat.
pub(crate) fn whisper_gm<C: Campaign>(campaign: &mut C, text: &str) {
    campaign.whisper(GM_TARGET, text);
}

/// Gate for the GM-only verbs. Whispers the standard denial and returns
/// `false` for everyone else.
pub(crate) fn require_gm<C: Campaign>(campaign: &mut C, caller: &Caller, action: &str) -> bool {
    if caller.is_gm {
        return true;
    }
    whisper_player(
        campaign,
        &caller.id,
        &format!("Only the GM can {action}."),
    );
    false
}
