//! Sandbox REPL for driving the engine without a live tabletop host.
//!
//! Each stdin line becomes one chat message. Bare lines speak as the GM;
//! `@name ...` speaks as that player. After every message the whisper
//! transcript and the resulting turn order are printed, which makes the
//! binary a convenient way to poke at command behavior:
//!
//! ```text
//! !to-begin
//! @alice !to-down 3 Bless
//! @alice !to-remove ble
//! ```

use std::io::BufRead;

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roundtable_campaign::{MemoryCampaign, TurnStore};
use roundtable_core::{TurnEntry, TurnQueue};
use roundtable_engine::resolve::entry_display_name;
use roundtable_engine::{ChatMessage, EngineConfig, TurnEngine};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roundtable_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(
        counter = %config.counter_name,
        value = config.counter_value,
        "Engine configuration loaded"
    );

    let campaign = match std::env::var("ROUNDTABLE_ROSTER") {
        Ok(path) => load_roster(&path),
        Err(_) => demo_campaign(),
    };
    let gm = campaign.gm().expect("campaign must include a GM player");

    println!("roundtable sandbox. Lines speak as the GM ({}),", gm.display_name);
    println!("'@<player> <line>' speaks as a player, '#' comments, 'quit' exits.");
    print_queue(&campaign);

    let mut engine = TurnEngine::new(campaign, config);

    for line in std::io::stdin().lock().lines() {
        let line = line.expect("Failed to read line from stdin");
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let (speaker, content) = match line.strip_prefix('@') {
            Some(rest) => {
                let (name, content) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match engine.campaign().player_by_name(name) {
                    Some(player) => (player.id, content.trim().to_string()),
                    None => {
                        println!("no player named '{name}' in the roster");
                        continue;
                    }
                }
            }
            None => (gm.id.clone(), line.to_string()),
        };

        engine.handle_message(&ChatMessage::api(speaker, content));

        for whisper in engine.campaign_mut().drain_whispers() {
            println!("  [whisper -> {}] {}", whisper.to, whisper.text);
        }
        print_queue(engine.campaign());
    }
}

/// Roster file pointed at by `ROUNDTABLE_ROSTER`.
///
/// ```json
/// {
///   "players": [{ "name": "Marisha", "gm": true }, { "name": "alice" }],
///   "tokens": [
///     { "name": "Skeleton Archer", "priority": 9 },
///     { "name": "", "character": "Grask", "priority": 12 }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct Roster {
    #[serde(default)]
    players: Vec<RosterPlayer>,
    #[serde(default)]
    tokens: Vec<RosterToken>,
}

#[derive(Debug, Deserialize)]
struct RosterPlayer {
    name: String,
    #[serde(default)]
    gm: bool,
}

#[derive(Debug, Deserialize)]
struct RosterToken {
    name: String,
    /// Character sheet the token represents; how unnamed tokens resolve.
    character: Option<String>,
    /// When present, the token starts in the turn order at this priority.
    priority: Option<f64>,
}

fn load_roster(path: &str) -> MemoryCampaign {
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read roster file {path}: {e}"));
    let roster: Roster = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("Invalid roster file {path}: {e}"));

    let mut campaign = MemoryCampaign::new();
    for player in &roster.players {
        campaign.add_player(&player.name, player.gm);
    }

    let mut seeded = Vec::new();
    for token in &roster.tokens {
        let character = token
            .character
            .as_deref()
            .map(|name| campaign.add_character(name));
        let id = campaign.add_token(&token.name, character.as_deref());
        if let Some(priority) = token.priority {
            seeded.push(TurnEntry {
                id,
                priority,
                label: String::new(),
                formula: None,
                restricted: true,
            });
        }
    }

    tracing::info!(path, players = roster.players.len(), tokens = roster.tokens.len(), "Roster loaded");
    campaign.with_turn_order(&TurnQueue::from_entries(seeded).to_json())
}

/// Built-in roster used when no `ROUNDTABLE_ROSTER` is given: a GM, two
/// players, and a few tokens already in the order. The seeded JSON uses
/// string priorities on purpose, matching what hosts actually persist.
fn demo_campaign() -> MemoryCampaign {
    let mut campaign = MemoryCampaign::new();
    campaign.add_player("Dungeon Master", true);
    campaign.add_player("alice", false);
    campaign.add_player("bob", false);

    let grask = campaign.add_character("Grask the Goblin King");
    let grask_token = campaign.add_token("", Some(&grask));
    let skeleton = campaign.add_token("Skeleton Archer", None);
    let dragon = campaign.add_token("Ancient Red Dragon", None);

    let seeded = serde_json::json!([
        { "id": grask_token, "pr": "12" },
        { "id": skeleton, "pr": 9 },
        { "id": dragon, "pr": 17.5 },
    ]);
    campaign.with_turn_order(&seeded.to_string())
}

fn print_queue(campaign: &MemoryCampaign) {
    let queue = TurnQueue::parse(&campaign.turn_order());
    if queue.is_empty() {
        println!("  (turn order empty)");
        return;
    }
    for (i, entry) in queue.entries().iter().enumerate() {
        let name =
            entry_display_name(campaign, entry).unwrap_or_else(|| "<unnamed>".to_string());
        println!("  {:>2}. {:<28} {}", i + 1, name, entry.priority);
    }
}
