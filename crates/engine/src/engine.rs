//! The engine facade: one injected campaign, one message at a time.

use roundtable_campaign::Campaign;

use crate::config::EngineConfig;
use crate::event::ChatMessage;
use crate::handlers;

/// Synchronous turn-order engine bound to an injected campaign host.
///
/// Each [`handle_message`](TurnEngine::handle_message) call runs to
/// completion before returning, and the engine is the only writer of the
/// campaign's turn order for the duration of the call. Hosts deliver
/// events strictly one at a time.
pub struct TurnEngine<C: Campaign> {
    campaign: C,
    config: EngineConfig,
}

impl<C: Campaign> TurnEngine<C> {
    pub fn new(campaign: C, config: EngineConfig) -> Self {
        Self { campaign, config }
    }

    /// React to one inbound chat message.
    ///
    /// Non-API messages and lines without the command prefix are ignored.
    /// Everything else is dispatched; failures are whispered back to the
    /// caller and never propagate out of the engine.
    pub fn handle_message(&mut self, message: &ChatMessage) {
        handlers::handle(&mut self.campaign, &self.config, message);
    }

    /// The injected campaign. Tests and the sandbox inspect state through
    /// this.
    pub fn campaign(&self) -> &C {
        &self.campaign
    }

    pub fn campaign_mut(&mut self) -> &mut C {
        &mut self.campaign
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
