//! `help`: whisper the verb summary back to whoever asked.

use roundtable_campaign::Campaign;

use super::{whisper_player, Caller};

const HELP_TEXT: &str = "\
Turn-order commands:
!to-begin [--counter-name NAME] [--counter-value N] : sort the order, start the round counter (GM, alias !to-start)
!to-clear [--close] [--no-load] : empty the turn order (GM)
!to-load <json> : replace the turn order wholesale (GM)
!to-append <json array> : merge entries onto the end (GM)
!to-clean : drop entries counted down to zero or below
!to-up <n> [--before|--after <prefix>] <label> : add an entry counting up from n
!to-down <n> [--before|--after <prefix>] <label> : add an entry counting down from n
!to-remove <prefix> : remove the first entry matching the name prefix (alias !to-rm)
!to-help : this summary";

pub(super) fn handle<C: Campaign>(campaign: &mut C, caller: &Caller) {
    whisper_player(campaign, &caller.id, HELP_TEXT);
}
