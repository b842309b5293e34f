//! The ordered turn queue and its operations.
//!
//! Every command follows one cycle: parse the host's serialized order,
//! mutate the copy in memory, write the whole thing back in a single call.
//! The queue itself never talks to the host; callers hand it the raw
//! string and take the serialized result away.

use crate::entry::TurnEntry;
use crate::error::CoreError;

/// A campaign's turn order, materialized from its persisted JSON form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnQueue {
    entries: Vec<TurnEntry>,
}

impl TurnQueue {
    pub fn from_entries(entries: Vec<TurnEntry>) -> Self {
        Self { entries }
    }

    /// Parse the host-persisted representation.
    ///
    /// The host may hand back an empty string, garbage, or a non-array;
    /// all of those load as an empty queue rather than an error.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str::<Vec<TurnEntry>>(raw)
            .map(Self::from_entries)
            .unwrap_or_default()
    }

    /// Parse operator-supplied JSON, keeping the underlying parser message
    /// so it can be reported back in chat.
    pub fn parse_strict(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str::<Vec<TurnEntry>>(raw)
            .map(Self::from_entries)
            .map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Serialize for the single write back to the host.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).expect("turn entries are always serialisable")
    }

    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TurnEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `entry` at `index`, or append when `index` is `None` or past
    /// the end. Returns the position the entry actually landed at.
    pub fn insert_at(&mut self, index: Option<usize>, entry: TurnEntry) -> usize {
        match index {
            Some(i) if i < self.entries.len() => {
                self.entries.insert(i, entry);
                i
            }
            _ => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        }
    }

    /// First entry whose resolved display name starts with `prefix`,
    /// case-insensitively. `resolve` may return `None` for entries with no
    /// usable name; those never match.
    pub fn find_by_prefix<F>(&self, prefix: &str, resolve: F) -> Option<usize>
    where
        F: Fn(&TurnEntry) -> Option<String>,
    {
        let needle = prefix.to_lowercase();
        self.entries.iter().position(|entry| {
            resolve(entry)
                .map(|name| name.to_lowercase().starts_with(&needle))
                .unwrap_or(false)
        })
    }

    /// Remove and return the entry at `index`. Callers locate the index
    /// through [`find_by_prefix`](TurnQueue::find_by_prefix) first.
    pub fn remove_at(&mut self, index: usize) -> TurnEntry {
        self.entries.remove(index)
    }

    /// Start-of-round bootstrap: drop any previous synthetic counter
    /// carrying the same label, sort what remains by descending priority
    /// (ties keep their relative order), then put the fresh counter on
    /// top.
    pub fn begin_round(&mut self, counter: TurnEntry) {
        self.entries
            .retain(|e| !(e.is_synthetic() && e.label == counter.label));
        self.entries
            .sort_by(|a, b| b.priority.total_cmp(&a.priority));
        self.entries.insert(0, counter);
    }

    /// Drop every entry whose priority has been counted down to zero or
    /// below. Returns how many were removed.
    pub fn clean(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.priority > 0.0);
        before - self.entries.len()
    }

    /// Append a batch of entries, keeping their given order.
    pub fn extend(&mut self, entries: Vec<TurnEntry>) {
        self.entries.extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    fn named(id: &str, priority: f64) -> TurnEntry {
        TurnEntry {
            id: id.to_string(),
            priority,
            label: String::new(),
            formula: None,
            restricted: true,
        }
    }

    #[test]
    fn parse_tolerates_garbage() {
        assert!(TurnQueue::parse("").is_empty());
        assert!(TurnQueue::parse("not json").is_empty());
        assert!(TurnQueue::parse(r#"{"id":"t1"}"#).is_empty());
    }

    #[test]
    fn parse_reads_host_written_entries() {
        let queue = TurnQueue::parse(r#"[{"id":"t1","pr":"12"},{"id":"-1","pr":3,"custom":"Bless"}]"#);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.entries()[0].priority, 12.0);
        assert_eq!(queue.entries()[1].label, "Bless");
    }

    #[test]
    fn parse_strict_reports_the_parser_message() {
        let err = TurnQueue::parse_strict("[{").unwrap_err();
        assert_matches!(err, CoreError::Parse(msg) if !msg.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let source = r#"[{"id":"t1","pr":"12"},{"id":"-1","pr":3,"custom":"Bless","formula":"-1"}]"#;
        let queue = TurnQueue::parse(source);
        let rewritten = TurnQueue::parse(&queue.to_json());
        assert_eq!(queue, rewritten);
    }

    #[test]
    fn insert_at_none_appends() {
        let mut queue = TurnQueue::from_entries(vec![named("t1", 5.0)]);
        let landed = queue.insert_at(None, TurnEntry::synthetic("Haste", 3.0, "-1"));
        assert_eq!(landed, 1);
        assert_eq!(queue.entries()[1].label, "Haste");
    }

    #[test]
    fn insert_past_end_appends() {
        let mut queue = TurnQueue::from_entries(vec![named("t1", 5.0)]);
        let landed = queue.insert_at(Some(9), TurnEntry::synthetic("Haste", 3.0, "-1"));
        assert_eq!(landed, 1);
    }

    #[test]
    fn insert_at_index_shifts_the_rest() {
        let mut queue = TurnQueue::from_entries(vec![named("t1", 5.0), named("t2", 4.0)]);
        let landed = queue.insert_at(Some(1), TurnEntry::synthetic("Haste", 3.0, "-1"));
        assert_eq!(landed, 1);
        assert_eq!(queue.entries()[1].label, "Haste");
        assert_eq!(queue.entries()[2].id, "t2");
    }

    #[test]
    fn find_by_prefix_is_case_insensitive() {
        let queue = TurnQueue::from_entries(vec![
            TurnEntry::synthetic("Bless", 3.0, "-1"),
            TurnEntry::synthetic("Goblin King", 12.0, "-1"),
        ]);
        let found = queue.find_by_prefix("GOB", |e| Some(e.label.clone()));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn find_by_prefix_takes_the_first_match() {
        let queue = TurnQueue::from_entries(vec![
            TurnEntry::synthetic("Goblin Archer", 9.0, "-1"),
            TurnEntry::synthetic("Goblin King", 12.0, "-1"),
        ]);
        assert_eq!(queue.find_by_prefix("goblin", |e| Some(e.label.clone())), Some(0));
    }

    #[test]
    fn find_by_prefix_skips_unresolvable_entries() {
        let queue = TurnQueue::from_entries(vec![named("t1", 5.0), named("t2", 4.0)]);
        let found = queue.find_by_prefix("t", |e| {
            if e.id == "t2" {
                Some("Troll".to_string())
            } else {
                None
            }
        });
        assert_eq!(found, Some(1));
    }

    #[test]
    fn find_by_prefix_misses_cleanly() {
        let queue = TurnQueue::from_entries(vec![TurnEntry::synthetic("Bless", 3.0, "-1")]);
        assert_eq!(queue.find_by_prefix("dragon", |e| Some(e.label.clone())), None);
    }

    #[test]
    fn test_begin_round_sorts_and_prepends_counter() {
        let mut queue = TurnQueue::from_entries(vec![
            named("t1", 4.0),
            named("t2", 17.0),
            named("t3", 9.5),
        ]);
        queue.begin_round(TurnEntry::synthetic("ROUND", 101.0, "+1"));

        let priorities: Vec<f64> = queue.entries().iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![101.0, 17.0, 9.5, 4.0]);
        assert_eq!(queue.entries()[0].label, "ROUND");
    }

    #[test]
    fn begin_round_replaces_a_stale_counter() {
        let mut queue = TurnQueue::from_entries(vec![named("t1", 4.0)]);
        queue.begin_round(TurnEntry::synthetic("ROUND", 101.0, "+1"));
        queue.begin_round(TurnEntry::synthetic("ROUND", 101.0, "+1"));

        let counters = queue
            .entries()
            .iter()
            .filter(|e| e.label == "ROUND")
            .count();
        assert_eq!(counters, 1);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn begin_round_sort_is_stable_for_ties() {
        let mut tied_a = named("t1", 10.0);
        tied_a.label = "first".to_string();
        let mut tied_b = named("t2", 10.0);
        tied_b.label = "second".to_string();

        let mut queue = TurnQueue::from_entries(vec![tied_a, tied_b]);
        queue.begin_round(TurnEntry::synthetic("ROUND", 101.0, "+1"));
        assert_eq!(queue.entries()[1].label, "first");
        assert_eq!(queue.entries()[2].label, "second");
    }

    #[test]
    fn test_clean_drops_spent_entries() {
        let mut queue = TurnQueue::from_entries(vec![
            named("t1", 5.0),
            named("t2", 0.0),
            named("t3", -2.0),
            named("t4", 3.0),
        ]);
        let removed = queue.clean();
        assert_eq!(removed, 2);

        let priorities: Vec<f64> = queue.entries().iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![5.0, 3.0]);
    }

    #[test]
    fn remove_at_returns_the_entry() {
        let mut queue = TurnQueue::from_entries(vec![named("t1", 5.0), named("t2", 4.0)]);
        let removed = queue.remove_at(0);
        assert_eq!(removed.id, "t1");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn extend_keeps_batch_order() {
        let mut queue = TurnQueue::from_entries(vec![named("t1", 5.0)]);
        queue.extend(vec![
            TurnEntry::synthetic("Bless", 3.0, "-1"),
            TurnEntry::synthetic("Haste", 2.0, "-1"),
        ]);
        assert_eq!(queue.entries()[1].label, "Bless");
        assert_eq!(queue.entries()[2].label, "Haste");
    }
}
