//! Display-name resolution for queue entries.

use roundtable_campaign::Directory;
use roundtable_core::TurnEntry;

/// The name all prefix searches operate on.
///
/// Synthetic entries resolve to their label. Token entries resolve to the
/// token's board name, falling back to the name of the character the token
/// represents. Returns `None` when nothing usable exists; such entries can
/// never be matched by an anchor or removal search.
pub fn entry_display_name<D>(directory: &D, entry: &TurnEntry) -> Option<String>
where
    D: Directory + ?Sized,
{
    if entry.is_synthetic() {
        return non_empty(entry.label.clone());
    }

    let token = directory.token(&entry.id)?;
    if let Some(name) = non_empty(token.name) {
        return Some(name);
    }

    let character = directory.character(token.represents.as_deref()?)?;
    non_empty(character.name)
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
