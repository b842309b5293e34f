//! Turn entry model and its wire representation.
//!
//! The wire field names (`pr`, `custom`) belong to the host platform, which
//! also writes entries of its own whenever a token is dropped onto the
//! tracker. Loading therefore tolerates missing fields and string-typed
//! priorities instead of rejecting them.

use serde::{Deserialize, Deserializer, Serialize};

/// Id carried by entries with no token referent (round counters and ad-hoc
/// countdowns created from chat).
pub const SYNTHETIC_ID: &str = "-1";

/// One slot in the campaign's turn order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEntry {
    /// Token id, or [`SYNTHETIC_ID`] for entries without a token referent.
    pub id: String,

    /// Initiative priority. The wire value may be a number or a numeric
    /// string; anything else loads as `0.0`.
    #[serde(
        rename = "pr",
        default,
        deserialize_with = "deserialize_priority"
    )]
    pub priority: f64,

    /// Display label for synthetic entries. Token entries leave this empty
    /// and resolve their name through the campaign directory instead.
    #[serde(
        rename = "custom",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub label: String,

    /// Per-round increment applied by the host tracker, e.g. `"+1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,

    /// When `true` (the default for host-written entries) only the GM may
    /// remove the entry. Entries players insert themselves are written
    /// unrestricted.
    #[serde(
        default = "default_restricted",
        skip_serializing_if = "skip_when_restricted"
    )]
    pub restricted: bool,
}

impl TurnEntry {
    /// Build a synthetic entry (no token referent) with the given label.
    pub fn synthetic(label: impl Into<String>, priority: f64, formula: &str) -> Self {
        Self {
            id: SYNTHETIC_ID.to_string(),
            priority,
            label: label.into(),
            formula: Some(formula.to_string()),
            restricted: true,
        }
    }

    /// `true` when the entry does not reference a board token.
    pub fn is_synthetic(&self) -> bool {
        self.id == SYNTHETIC_ID
    }
}

fn default_restricted() -> bool {
    true
}

fn skip_when_restricted(restricted: &bool) -> bool {
    *restricted
}

fn deserialize_priority<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_priority(&value))
}

/// Numeric coercion applied to every priority crossing the wire: numbers
/// pass through, numeric strings parse, and everything else (including the
/// non-finite values JSON cannot carry anyway) becomes `0.0`.
pub fn coerce_priority(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => finite_or_zero(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => coerce_number(s),
        _ => 0.0,
    }
}

/// String form of [`coerce_priority`], shared with the command grammar.
pub fn coerce_number(raw: &str) -> f64 {
    finite_or_zero(raw.trim().parse::<f64>().unwrap_or(0.0))
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_accepts_plain_floats() {
        assert_eq!(coerce_number("12"), 12.0);
        assert_eq!(coerce_number("-3.5"), -3.5);
        assert_eq!(coerce_number("  7.25  "), 7.25);
    }

    #[test]
    fn test_coerce_number_defaults_garbage_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("goblin"), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
    }

    #[test]
    fn test_coerce_number_rejects_non_finite_spellings() {
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-Infinity"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn coerces_string_priority_on_load() {
        let entry: TurnEntry = serde_json::from_str(r#"{"id":"t1","pr":"15.5"}"#)
            .expect("entry should parse");
        assert_eq!(entry.priority, 15.5);
    }

    #[test]
    fn missing_priority_loads_as_zero() {
        let entry: TurnEntry =
            serde_json::from_str(r#"{"id":"t1"}"#).expect("entry should parse");
        assert_eq!(entry.priority, 0.0);
        assert_eq!(entry.label, "");
        assert!(entry.restricted);
    }

    #[test]
    fn null_priority_loads_as_zero() {
        let entry: TurnEntry = serde_json::from_str(r#"{"id":"t1","pr":null}"#)
            .expect("entry should parse");
        assert_eq!(entry.priority, 0.0);
    }

    #[test]
    fn empty_label_and_default_restriction_are_not_serialized() {
        let entry = TurnEntry {
            id: "t1".to_string(),
            priority: 4.0,
            label: String::new(),
            formula: None,
            restricted: true,
        };
        let json = serde_json::to_string(&entry).expect("entry should serialize");
        assert_eq!(json, r#"{"id":"t1","pr":4.0}"#);
    }

    #[test]
    fn unrestricted_flag_is_written_out() {
        let mut entry = TurnEntry::synthetic("Bless", 3.0, "-1");
        entry.restricted = false;
        let json = serde_json::to_string(&entry).expect("entry should serialize");
        assert!(json.contains(r#""restricted":false"#));

        let back: TurnEntry = serde_json::from_str(&json).expect("entry should parse");
        assert!(!back.restricted);
    }

    #[test]
    fn synthetic_constructor_sets_sentinel_id() {
        let entry = TurnEntry::synthetic("ROUND", 101.0, "+1");
        assert!(entry.is_synthetic());
        assert_eq!(entry.label, "ROUND");
        assert_eq!(entry.formula.as_deref(), Some("+1"));
    }
}
