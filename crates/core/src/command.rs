//! Chat command grammar for the turn-order surface.
//!
//! Messages are plain chat lines. Anything that does not carry the
//! [`COMMAND_PREFIX`] is ignored outright; anything that does is parsed
//! into exactly one [`Command`] variant or a reportable error, so the
//! dispatch layer never has to re-tokenize.

use crate::entry::coerce_number;
use crate::error::CoreError;

/// Leading token marking a chat message as a turn-order command.
pub const COMMAND_PREFIX: &str = "!to-";

/// Which side of an anchor match an inserted entry lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Before,
    After,
}

/// Anchored placement for `up` and `down`: a display-name prefix to look
/// for, plus the side of the matched entry to land on.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub position: Position,
    pub prefix: String,
}

/// The closed set of verbs the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Sort the order and prepend a fresh round counter. GM only.
    Begin {
        counter_name: Option<String>,
        counter_value: Option<f64>,
    },
    /// Empty the turn order. GM only.
    Clear {
        close_tracker: bool,
        no_restore_hint: bool,
    },
    /// Replace the order wholesale from a JSON payload. GM only.
    Load { payload: String },
    /// Merge a JSON array of entries onto the end. GM only.
    Append { payload: String },
    /// Drop entries counted down to zero or below.
    Clean,
    /// Add a counting-up synthetic entry.
    Up {
        start: f64,
        anchor: Option<Anchor>,
        label: String,
    },
    /// Add a counting-down synthetic entry.
    Down {
        start: f64,
        anchor: Option<Anchor>,
        label: String,
    },
    /// Remove the first entry whose display name matches a prefix.
    Remove { prefix: String },
    /// Whisper the verb summary back to the caller.
    Help,
}

/// Parse one chat line.
///
/// Returns `None` for messages that are not turn-order commands at all.
/// Once the prefix matches, the result is always worth reporting: either a
/// command or the error to whisper back.
pub fn parse_message(content: &str) -> Option<Result<Command, CoreError>> {
    let message = content.trim();
    let first = message.split_whitespace().next()?;
    let verb = first.strip_prefix(COMMAND_PREFIX)?;
    Some(parse_verb(verb, message[first.len()..].trim()))
}

fn parse_verb(verb: &str, remainder: &str) -> Result<Command, CoreError> {
    let args: Vec<&str> = remainder.split_whitespace().collect();

    match verb {
        "begin" | "start" => Ok(parse_begin(&args)),
        "clear" => Ok(parse_clear(&args)),
        // The payload verbs take the raw remainder so JSON spacing
        // survives tokenization.
        "load" => Ok(Command::Load {
            payload: remainder.to_string(),
        }),
        "append" => Ok(Command::Append {
            payload: remainder.to_string(),
        }),
        "clean" => Ok(Command::Clean),
        "up" => parse_insert(&args).map(|(start, anchor, label)| Command::Up {
            start,
            anchor,
            label,
        }),
        "down" => parse_insert(&args).map(|(start, anchor, label)| Command::Down {
            start,
            anchor,
            label,
        }),
        "remove" | "rm" => parse_remove(&args),
        "help" => Ok(Command::Help),
        unknown => Err(CoreError::UnknownCommand(unknown.to_string())),
    }
}

fn parse_begin(args: &[&str]) -> Command {
    let mut counter_name = None;
    let mut counter_value = None;

    let mut i = 0;
    while i < args.len() {
        let (flag, inline) = split_flag(args[i]);
        match flag {
            "--counter-name" => {
                if let Some(value) = flag_value(args, &mut i, inline) {
                    counter_name = Some(value);
                }
            }
            "--counter-value" => {
                if let Some(value) = flag_value(args, &mut i, inline) {
                    counter_value = Some(coerce_number(&value));
                }
            }
            _ => {}
        }
        i += 1;
    }

    Command::Begin {
        counter_name,
        counter_value,
    }
}

fn parse_clear(args: &[&str]) -> Command {
    Command::Clear {
        close_tracker: args.contains(&"--close"),
        no_restore_hint: args.contains(&"--no-load"),
    }
}

/// `<n> [--before|--after <prefix>] <label...>`. The starting value is
/// coerced like every other priority, so garbage silently becomes zero.
fn parse_insert(args: &[&str]) -> Result<(f64, Option<Anchor>, String), CoreError> {
    let (start, mut rest) = match args.split_first() {
        Some((raw, rest)) => (coerce_number(raw), rest),
        None => (0.0, args),
    };

    let mut anchor = None;
    if let Some(first) = rest.first() {
        let (flag, inline) = split_flag(first);
        if let Some(position) = anchor_position(flag) {
            let mut i = 0;
            if let Some(prefix) = flag_value(rest, &mut i, inline) {
                anchor = Some(Anchor { position, prefix });
            }
            rest = &rest[i + 1..];
        }
    }

    let label = rest.join(" ");
    if label.is_empty() {
        return Err(CoreError::MissingLabel);
    }
    Ok((start, anchor, label))
}

fn parse_remove(args: &[&str]) -> Result<Command, CoreError> {
    match args.first() {
        Some(prefix) => Ok(Command::Remove {
            prefix: (*prefix).to_string(),
        }),
        None => Err(CoreError::MissingRemoveTarget),
    }
}

fn anchor_position(flag: &str) -> Option<Position> {
    match flag {
        "--before" => Some(Position::Before),
        "--after" => Some(Position::After),
        _ => None,
    }
}

/// Split `--flag=value` into the flag and its inline value. Tokens without
/// an `=` come back unchanged.
fn split_flag(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    }
}

/// Value for the flag at `args[*i]`: the inline `=value` part when present,
/// otherwise the following token, which is consumed unless it looks like
/// another flag.
fn flag_value(args: &[&str], i: &mut usize, inline: Option<&str>) -> Option<String> {
    match inline {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        Some(_) => None,
        None => {
            let next = args.get(*i + 1)?;
            if next.starts_with("--") {
                return None;
            }
            *i += 1;
            Some((*next).to_string())
        }
    }
}
