use roundtable_campaign::{MemoryCampaign, TurnStore, Whisper};
use roundtable_core::{TurnEntry, TurnQueue};
use roundtable_engine::{ChatMessage, EngineConfig, TurnEngine};

/// One table: an engine over a [`MemoryCampaign`], plus the ids the tests
/// need to speak as players or point at tokens.
pub struct Table {
    pub engine: TurnEngine<MemoryCampaign>,
    pub gm: String,
    pub alice: String,
    pub goblin: String,
    pub dragon: String,
}

/// A table mid-combat: GM seat, one player, and two host-written token
/// entries already in the order (Goblin King at "12", Ancient Dragon at
/// 17.5). The string priority is deliberate; hosts persist both shapes.
pub fn seeded_table() -> Table {
    let mut table = bare_table();
    let goblin = table.goblin.clone();
    let dragon = table.dragon.clone();
    seed_order(
        &mut table,
        &format!(r#"[{{"id":"{goblin}","pr":"12"}},{{"id":"{dragon}","pr":17.5}}]"#),
    );
    table
}

/// Same roster as [`seeded_table`], but with an empty turn order.
pub fn bare_table() -> Table {
    let mut campaign = MemoryCampaign::new();
    let gm = campaign.add_player("Marisha", true);
    let alice = campaign.add_player("alice", false);
    let goblin = campaign.add_token("Goblin King", None);
    let dragon = campaign.add_token("Ancient Dragon", None);

    Table {
        engine: TurnEngine::new(campaign, EngineConfig::default()),
        gm,
        alice,
        goblin,
        dragon,
    }
}

/// Send one API chat line as the given player.
pub fn send(table: &mut Table, player_id: &str, line: &str) {
    table.engine.handle_message(&ChatMessage::api(player_id, line));
}

/// Overwrite the stored order directly, bypassing the command surface.
pub fn seed_order(table: &mut Table, raw: &str) {
    table.engine.campaign_mut().set_turn_order(raw);
}

/// The stored turn order, parsed into entries.
pub fn entries(table: &Table) -> Vec<TurnEntry> {
    TurnQueue::parse(&table.engine.campaign().turn_order()).into_entries()
}

/// The stored turn order exactly as persisted.
pub fn raw_order(table: &Table) -> String {
    table.engine.campaign().turn_order()
}

/// Texts of every whisper sent so far, oldest first.
pub fn whisper_texts(table: &Table) -> Vec<String> {
    table
        .engine
        .campaign()
        .whispers()
        .iter()
        .map(|w| w.text.clone())
        .collect()
}

/// The most recent whisper.
pub fn last_whisper(table: &Table) -> Whisper {
    table
        .engine
        .campaign()
        .whispers()
        .last()
        .cloned()
        .expect("expected at least one whisper")
}
